//! Summary Panel Component
//!
//! Packing statistics, status prompt, bulk actions and exports.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let summary = Memo::new(move |_| ctx.summary());

    view! {
        <footer class="stats">
            <em>{move || summary.get().stats_line()}</em>
            <p class="status">{move || summary.get().status().message()}</p>

            <div class="stats-actions">
                <button on:click=move |_| ctx.check_all()>"Check All"</button>
                <button on:click=move |_| ctx.clear_all()>"Clear All"</button>
                <button on:click=move |_| ctx.export_pdf()>"Download PDF"</button>
                <button on:click=move |_| ctx.share()>"Share Link"</button>
                <button on:click=move |_| ctx.email()>"Email List"</button>
            </div>
        </footer>
    }
}
