//! Text projections of records and the writers that put them on a surface.
//!
//! The `*_text` functions are pure; the `render_*` functions only add one
//! `set_text` call.

use serde::Serialize;
use serde_json::Value;

use crate::surface::{Region, Surface};
use crate::types::UserRecord;

#[derive(Serialize)]
struct ListView<'a> {
    id: u64,
    email: &'a str,
}

/// Absent fields are dropped, so a missing record renders as `{}`.
#[derive(Serialize)]
struct DetailView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
}

fn to_json<V: Serialize>(view: &V) -> String {
    // Views hold only strings and integers.
    serde_json::to_string(view).unwrap_or_default()
}

/// Every item as `{"id","email"}`, serialized as one array.
pub fn all_items_text(items: &[UserRecord]) -> String {
    let views: Vec<ListView<'_>> = items
        .iter()
        .map(|item| ListView {
            id: item.id,
            email: &item.email,
        })
        .collect();
    to_json(&views)
}

/// One item as `{"email","id"}`; `None` gives `{}`.
pub fn one_item_text(item: Option<&UserRecord>) -> String {
    to_json(&DetailView {
        email: item.map(|i| i.email.as_str()),
        id: item.map(|i| i.id),
    })
}

/// The server's create response, unchanged.
pub fn created_item_text(item: &Value) -> String {
    item.to_string()
}

/// Write `all_items_text` to the all-items region.
pub fn render_all<S: Surface>(surface: &S, items: &[UserRecord]) {
    surface.set_text(Region::AllItems, &all_items_text(items));
}

/// Write `one_item_text` to the single-item region.
pub fn render_one<S: Surface>(surface: &S, item: Option<&UserRecord>) {
    surface.set_text(Region::SingleItem, &one_item_text(item));
}

/// Write `created_item_text` to the created-item region.
pub fn render_created<S: Surface>(surface: &S, item: &Value) {
    surface.set_text(Region::CreatedItem, &created_item_text(item));
}

/// An empty message clears the region.
pub fn set_error<S: Surface>(surface: &S, message: &str) {
    surface.set_text(Region::ErrorMessage, message);
}
