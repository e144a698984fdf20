//! Item Row Component
//!
//! A single packing-list entry. No logic beyond forwarding events.

use leptos::prelude::*;

use travel_list_core::Item;

use crate::context::AppContext;

fn row_class(packed: bool) -> &'static str {
    if packed {
        "item-row packed"
    } else {
        "item-row"
    }
}

fn row_style(packed: bool) -> &'static str {
    if packed {
        "text-decoration: line-through;"
    } else {
        "text-decoration: none;"
    }
}

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let packed = item.packed;

    view! {
        <li class=row_class(packed) style=row_style(packed)>
            <input
                type="checkbox"
                checked=packed
                on:change=move |ev| ctx.set_packed(id, event_target_checked(&ev))
            />
            <span class="item-text">{item.label()}</span>
            <button class="delete-btn" title="Remove" on:click=move |_| ctx.remove_item(id)>
                "❌"
            </button>
        </li>
    }
}
