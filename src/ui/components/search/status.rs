use crate::ui::use_search;
use dioxus::prelude::*;

#[component]
pub fn SearchStatus() -> Element {
    let state = use_search().state;
    let state = state.read();
    let total = state.results().len();
    let range = state.pagination().range(total);
    let (first, last) = (range.start + 1, range.end);

    rsx! {
        if state.is_loading() {
            div { class: "status",
                p { "検索中..." }
            }
        } else if let Some(error) = state.last_error() {
            div { class: "status status-error", "検索に失敗しました: {error}" }
        } else if total > 0 {
            div { class: "status",
                "{total} 件中 {first}-{last} 件を表示"
            }
        }
    }
}
