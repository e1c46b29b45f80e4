//! Notification Toast Component
//!
//! Transient success/error notices from import and export. Auto-dismissed
//! by the session context; a click dismisses early.

use leptos::prelude::*;

use crate::context::{NoticeKind, SessionContext};

#[component]
pub fn NotificationToast() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let notice = session.notice();

    view! {
        <Show when=move || notice.get().is_some()>
            {move || {
                notice
                    .get()
                    .map(|notice| {
                        let kind_class = match notice.kind {
                            NoticeKind::Success => "notification success",
                            NoticeKind::Error => "notification error",
                        };
                        view! {
                            <div class=kind_class on:click=move |_| session.dismiss_notice()>
                                {notice.message.clone()}
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
