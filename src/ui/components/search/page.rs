use super::{form::SearchForm, list::SearchResultList, pager::SearchPager, status::SearchStatus};
use dioxus::prelude::*;

/// Syllabus search page that orchestrates the search UI components
#[component]
pub fn SearchPage() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "シラバス検索" }

            SearchForm {}
            SearchStatus {}
            SearchResultList {}
            SearchPager {}
        }
    }
}
