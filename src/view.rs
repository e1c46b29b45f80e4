//! View Pipeline
//!
//! Pure search/filter/sort over the catalog. Recomputed through a memo in
//! `app.rs` whenever the catalog, the progress set, or the query changes.

use std::cmp::Ordering;

use crate::models::Picto;
use crate::progress::ProgressSet;

/// Sortable columns of the picto table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Niveau,
    Bonus,
    Zone,
    Emplacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressFilter {
    All,
    Obtained,
    Missing,
}

impl ProgressFilter {
    fn passes(self, id: u32, progress: &ProgressSet) -> bool {
        match self {
            ProgressFilter::All => true,
            ProgressFilter::Obtained => progress.contains(id),
            ProgressFilter::Missing => !progress.contains(id),
        }
    }
}

/// Everything the pipeline needs besides the catalog and progress set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub search_term: String,
    pub progress_filter: ProgressFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            progress_filter: ProgressFilter::All,
            sort_field: SortField::Id,
            sort_direction: SortDirection::Asc,
        }
    }
}

/// Search, filter, and sort the catalog.
///
/// The sort is stable, so pictos with equal keys keep their catalog order.
/// `Desc` reverses the comparator rather than the output, which preserves
/// that property for equal keys.
pub fn apply_view(catalog: &[Picto], progress: &ProgressSet, query: &ViewQuery) -> Vec<Picto> {
    let needle = query.search_term.to_lowercase();
    let mut rows: Vec<Picto> = catalog
        .iter()
        .filter(|picto| matches_search(picto, &needle))
        .filter(|picto| query.progress_filter.passes(picto.id, progress))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, query.sort_field);
        match query.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    rows
}

/// Case-insensitive substring match against any of the four searchable
/// fields. `needle` must already be lowercased.
fn matches_search(picto: &Picto, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    picto.name.to_lowercase().contains(needle)
        || picto.bonus.to_lowercase().contains(needle)
        || picto.zone.to_lowercase().contains(needle)
        || picto.emplacement.to_lowercase().contains(needle)
}

fn compare_by_field(a: &Picto, b: &Picto, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Niveau => a.level().cmp(&b.level()),
        SortField::Name => compare_ci(&a.name, &b.name),
        SortField::Bonus => compare_ci(&a.bonus, &b.bonus),
        SortField::Zone => compare_ci(&a.zone, &b.zone),
        SortField::Emplacement => compare_ci(&a.emplacement, &b.emplacement),
    }
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_picto(id: u32, name: &str, niveau: &str, zone: &str) -> Picto {
        Picto {
            id,
            name: name.to_string(),
            bonus: format!("Bonus of {name}"),
            zone: zone.to_string(),
            emplacement: format!("Chest in {zone}"),
            niveau: niveau.to_string(),
        }
    }

    fn catalog() -> Vec<Picto> {
        vec![
            make_picto(1, "Energising Start", "3", "Spring Meadows"),
            make_picto(2, "Critical Burn", "12", "Stone Wave Cliffs"),
            make_picto(3, "Augmented Aim", "25", "Forgotten Battlefield"),
            make_picto(4, "Glass Canon", "8", "Spring Meadows"),
            make_picto(5, "Solidifying Meditation", "18", "Monolith"),
        ]
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let catalog = catalog();
        let rows = apply_view(&catalog, &ProgressSet::default(), &ViewQuery::default());
        assert_eq!(rows.len(), catalog.len());
    }

    #[test]
    fn test_search_matches_any_of_the_four_fields() {
        let catalog = catalog();
        let query = ViewQuery {
            search_term: "MEADOWS".to_string(),
            ..ViewQuery::default()
        };
        let rows = apply_view(&catalog, &ProgressSet::default(), &query);
        assert_eq!(
            rows.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 4],
            "zone and emplacement both contain the term"
        );

        // Every survivor really contains the term somewhere.
        for picto in &rows {
            let hay = format!(
                "{} {} {} {}",
                picto.name, picto.bonus, picto.zone, picto.emplacement
            )
            .to_lowercase();
            assert!(hay.contains("meadows"));
        }
    }

    #[test]
    fn test_search_matches_bonus_text() {
        let catalog = catalog();
        let query = ViewQuery {
            search_term: "bonus of glass".to_string(),
            ..ViewQuery::default()
        };
        let rows = apply_view(&catalog, &ProgressSet::default(), &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 4);
    }

    #[test]
    fn test_progress_filters_partition_the_catalog() {
        let catalog = catalog();
        let progress = ProgressSet::from_ids([2, 5]);

        let obtained = apply_view(
            &catalog,
            &progress,
            &ViewQuery {
                progress_filter: ProgressFilter::Obtained,
                ..ViewQuery::default()
            },
        );
        let missing = apply_view(
            &catalog,
            &progress,
            &ViewQuery {
                progress_filter: ProgressFilter::Missing,
                ..ViewQuery::default()
            },
        );

        assert!(obtained.iter().all(|p| progress.contains(p.id)));
        assert!(missing.iter().all(|p| !progress.contains(p.id)));
        assert_eq!(obtained.len() + missing.len(), catalog.len());
    }

    #[test]
    fn test_sort_by_niveau_is_numeric() {
        let catalog = catalog();
        let query = ViewQuery {
            sort_field: SortField::Niveau,
            ..ViewQuery::default()
        };
        let rows = apply_view(&catalog, &ProgressSet::default(), &query);
        // Lexicographic order would put "12" and "18" before "3" and "8".
        assert_eq!(rows.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 4, 2, 5, 3]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut catalog = catalog();
        catalog.push(make_picto(6, "aegis of Dawn", "1", "Monolith"));
        let query = ViewQuery {
            sort_field: SortField::Name,
            ..ViewQuery::default()
        };
        let rows = apply_view(&catalog, &ProgressSet::default(), &query);
        assert_eq!(rows[0].id, 6, "lowercase 'aegis' sorts before 'Augmented'");
        assert_eq!(rows[1].id, 3);
    }

    #[test]
    fn test_desc_reverses_asc_when_keys_are_unique() {
        let catalog = catalog();
        let asc = apply_view(
            &catalog,
            &ProgressSet::default(),
            &ViewQuery {
                sort_field: SortField::Niveau,
                ..ViewQuery::default()
            },
        );
        let desc = apply_view(
            &catalog,
            &ProgressSet::default(),
            &ViewQuery {
                sort_field: SortField::Niveau,
                sort_direction: SortDirection::Desc,
                ..ViewQuery::default()
            },
        );
        let reversed: Vec<u32> = asc.iter().rev().map(|p| p.id).collect();
        assert_eq!(desc.iter().map(|p| p.id).collect::<Vec<_>>(), reversed);
    }

    #[test]
    fn test_equal_keys_keep_catalog_order_in_both_directions() {
        let catalog = vec![
            make_picto(10, "Same", "5", "A"),
            make_picto(11, "Same", "5", "B"),
            make_picto(12, "Same", "5", "C"),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let rows = apply_view(
                &catalog,
                &ProgressSet::default(),
                &ViewQuery {
                    sort_field: SortField::Name,
                    sort_direction: direction,
                    ..ViewQuery::default()
                },
            );
            assert_eq!(
                rows.iter().map(|p| p.id).collect::<Vec<_>>(),
                vec![10, 11, 12],
                "stable sort keeps ties in catalog order ({direction:?})"
            );
        }
    }

    #[test]
    fn test_empty_catalog_is_a_valid_input() {
        let rows = apply_view(&[], &ProgressSet::from_ids([1]), &ViewQuery::default());
        assert!(rows.is_empty());
    }
}
