//! Search Session
//!
//! This example plays one search session against a store, with a listener
//! that re-renders on every dispatch and a recorder that keeps the history.
//!
//! Key concepts:
//! - Dispatching actions and reading the new state
//! - Late responses are ignored once a newer search started
//! - Listeners resolving a search from inside a notification
//! - Inspecting the recorded path afterwards
//!
//! Run with: cargo run --example search_session

use search_store::search::{self, render, GalleryItem, SearchAction, SearchState};
use search_store::store::HistoryRecorder;

fn main() {
    println!("=== Search Session ===\n");

    let recorder = HistoryRecorder::<SearchState>::new();
    let store = search::store_builder().middleware(recorder.clone()).build();
    println!("Initial: {}", render(&store.state()));

    let weak = store.downgrade();
    let renderer = store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            println!("  -> {}", render(&store.state()));
        }
    });

    println!("\nSearch and succeed:");
    store.dispatch(SearchAction::search("dogs"));
    store.dispatch(SearchAction::search_success(vec![
        GalleryItem::new("english-setter"),
        GalleryItem::new("irish-setter"),
    ]));

    println!("\nA stale failure arrives after the gallery is shown:");
    store.dispatch(SearchAction::search_failure());

    println!("\nA listener answers every search with one result:");
    let weak = store.downgrade();
    let responder = store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            if let SearchState::Loading { query } = &*store.state() {
                store.dispatch(SearchAction::search_success(vec![GalleryItem::new(
                    query.clone(),
                )]));
            }
        }
    });
    store.dispatch(SearchAction::search("cats"));
    responder.unsubscribe();
    renderer.unsubscribe();

    let history = recorder.history();
    println!("\nRecorded path ({} transitions):", history.len());
    for state in history.get_path() {
        println!("  {}", render(state));
    }

    println!("\n=== Example Complete ===");
}
