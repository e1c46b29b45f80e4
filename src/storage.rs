//! Progress Persistence
//!
//! The persisted slot is a single localStorage key holding a JSON array of
//! obtained picto ids. Reads are best-effort: a missing or corrupt value
//! hydrates to an empty set with only a console diagnostic.

use crate::progress::ProgressSet;

const STORAGE_KEY: &str = "pictosProgress";

/// Persistence capability for the progress set. Injected into the session
/// context so state transitions stay testable without a browser.
pub trait ProgressStore {
    fn load(&self) -> ProgressSet;
    fn save(&self, progress: &ProgressSet);
}

/// Browser-backed store over `window.localStorage`.
pub struct LocalStorageProgress;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl ProgressStore for LocalStorageProgress {
    fn load(&self) -> ProgressSet {
        let Some(raw) = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        else {
            return ProgressSet::default();
        };
        match serde_json::from_str::<Vec<u32>>(&raw) {
            Ok(ids) => ProgressSet::from_ids(ids),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[storage] ignoring corrupt saved progress: {err}").into(),
                );
                ProgressSet::default()
            }
        }
    }

    fn save(&self, progress: &ProgressSet) {
        let Some(storage) = local_storage() else { return };
        let Ok(raw) = serde_json::to_string(&progress.sorted_ids()) else {
            return;
        };
        if let Err(err) = storage.set_item(STORAGE_KEY, &raw) {
            web_sys::console::error_1(
                &format!("[storage] failed to save progress: {err:?}").into(),
            );
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::MemoryProgress;
    use super::*;
    use crate::progress::ProgressSet;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryProgress::default();
        assert!(store.load().is_empty());

        let progress = ProgressSet::from_ids([1, 2, 3]);
        store.save(&progress);
        assert_eq!(store.load(), progress);
    }
}
