//! Session Context
//!
//! Shared state provided via Leptos Context API: the progress set, its
//! persistence capability, and transient user notices.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::progress::ProgressSet;
use crate::storage::ProgressStore;

/// How long a notice stays on screen.
const NOTICE_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Session-wide state provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Ids the user has obtained
    pub progress: RwSignal<ProgressSet>,
    /// Current notice, if any
    notice: RwSignal<Option<Notice>>,
    /// Bumped per notice so a stale dismiss timer cannot clear a newer one
    notice_seq: RwSignal<u32>,
    store: StoredValue<Rc<dyn ProgressStore>, LocalStorage>,
}

impl SessionContext {
    /// Hydrates the progress set from `store`; corrupt or missing saved
    /// data simply yields an empty set.
    pub fn new(store: Rc<dyn ProgressStore>) -> Self {
        Self {
            progress: RwSignal::new(store.load()),
            notice: RwSignal::new(None),
            notice_seq: RwSignal::new(0),
            store: StoredValue::new_local(store),
        }
    }

    /// Flip one picto between obtained and missing
    pub fn toggle(&self, id: u32) {
        self.progress.update(|progress| {
            progress.toggle(id);
        });
        self.persist();
    }

    /// Wholesale replacement, used by import. No merge.
    pub fn replace(&self, imported: ProgressSet) {
        self.progress.set(imported);
        self.persist();
    }

    fn persist(&self) {
        let snapshot = self.progress.get_untracked();
        self.store.with_value(|store| store.save(&snapshot));
    }

    pub fn notice(&self) -> ReadSignal<Option<Notice>> {
        self.notice.read_only()
    }

    pub fn notify_success(&self, message: String) {
        self.notify(NoticeKind::Success, message);
    }

    pub fn notify_error(&self, message: String) {
        self.notify(NoticeKind::Error, message);
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    fn notify(&self, kind: NoticeKind, message: String) {
        let seq = self.notice_seq.get_untracked() + 1;
        self.notice_seq.set(seq);
        self.notice.set(Some(Notice { kind, message }));

        let notice = self.notice;
        let notice_seq = self.notice_seq;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            if notice_seq.get_untracked() == seq {
                notice.set(None);
            }
        });
    }
}
