//! Packing List Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::AppContext;

#[component]
pub fn PackingList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="list">
            <ul>
                <For
                    each=move || ctx.items()
                    // packed is part of the key so toggled rows re-render
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
        </div>
    }
}
