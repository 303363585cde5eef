use super::item::SearchResultItem;
use crate::ui::use_search;
use dioxus::prelude::*;

/// Rows on the current page, keyed by lecture ID
#[component]
pub fn SearchResultList() -> Element {
    let state = use_search().state;

    if state.read().results().is_empty() {
        return rsx! {
            div {}
        };
    }

    rsx! {
        ul { class: "result-list",
            for record in state.read().visible_results().iter() {
                SearchResultItem {
                    key: "{record.lecture_id}",
                    record: record.clone(),
                }
            }
        }
    }
}
