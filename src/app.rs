//! Travel List App
//!
//! Root component: owns the ItemStore and the view store and provides them
//! to the component tree.

use leptos::prelude::*;
use reactive_stores::Store;

use travel_list_core::{ItemStore, ListConfig};

use crate::components::{EntryForm, NoticeBanner, PackingList, SummaryPanel};
use crate::context::AppContext;
use crate::store::ViewState;

#[component]
pub fn App(config: ListConfig) -> impl IntoView {
    let view_store = Store::new(ViewState::default());
    let ctx = AppContext::new(ItemStore::new(), view_store, config);

    // Provide context to all children
    provide_context(ctx);

    view! {
        <div class="app">
            <h1>{ctx.title()}</h1>
            <EntryForm />
            <PackingList />
            <SummaryPanel />
            <NoticeBanner />
        </div>
    }
}
