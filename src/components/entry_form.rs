//! Entry Form Component
//!
//! Sort selector plus the add-item form (quantity presets, custom quantity,
//! description).

use leptos::prelude::*;

use travel_list_core::{EntryDraft, SortKey, CUSTOM_OPTION};

use crate::context::AppContext;

/// Form for adding items and choosing the sort order
#[component]
pub fn EntryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let presets = ctx.quantity_presets();
    let draft = RwSignal::new(EntryDraft::new(&presets));

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.try_update(EntryDraft::submit) {
            Some(Ok(new_item)) => {
                ctx.add_item(&new_item);
            }
            Some(Err(err)) => tracing::debug!(%err, "submission blocked"),
            None => {}
        }
    };

    // Sorting happens on change, not on submit
    let change_sort = move |ev: web_sys::Event| ctx.sort_by(SortKey::from_str(&event_target_value(&ev)));

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"Sort by:"</h3>
            <select
                class="sort-select"
                prop:value=move || ctx.sort_key().as_str()
                on:change=change_sort
            >
                {SortKey::ALL.iter().map(|key| view! {
                    <option value=key.as_str()>{key.label()}</option>
                }).collect_view()}
            </select>

            <h3>"What do you need to pack?"</h3>
            <select
                class="quantity-select"
                prop:value=move || draft.with(|d| d.choice().option_value())
                on:change=move |ev| draft.update(|d| d.select_quantity(&event_target_value(&ev)))
            >
                {presets.into_iter().map(|n| view! {
                    <option value=n.to_string()>{n}</option>
                }).collect_view()}
                <option value=CUSTOM_OPTION>"Custom"</option>
            </select>

            <Show when=move || draft.with(EntryDraft::is_custom)>
                <input
                    type="number"
                    min="1"
                    placeholder="Enter quantity..."
                    prop:value=move || draft.with(|d| d.custom_quantity().to_string())
                    on:input=move |ev| draft.update(|d| d.set_custom_quantity(event_target_value(&ev)))
                />
            </Show>

            <input
                type="text"
                placeholder="Item..."
                prop:value=move || draft.with(|d| d.description().to_string())
                on:input=move |ev| draft.update(|d| d.set_description(event_target_value(&ev)))
            />
            <button
                type="submit"
                prop:disabled=move || draft.with(|d| d.validate().is_err())
            >
                "Add"
            </button>
        </form>
    }
}
