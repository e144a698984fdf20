//! Notice Banner Component
//!
//! Shows the current notice (e.g. sharing unsupported) with a dismiss button.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.notice().map(|notice| {
            let id = notice.id;
            view! {
                <div class="notice" role="status">
                    <span class="notice-text">{notice.message}</span>
                    <button class="cancel-btn" on:click=move |_| ctx.dismiss_notice(id)>"✗"</button>
                </div>
            }
        })
    }
}
