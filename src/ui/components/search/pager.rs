use crate::ui::use_search;
use dioxus::prelude::*;

/// Previous/next and numbered page buttons. Paging never refetches.
#[component]
pub fn SearchPager() -> Element {
    let search_ctx = use_search();
    let state = search_ctx.state;
    let page_count = state.read().page_count();
    let current = state.read().pagination().current_page();

    if page_count <= 1 {
        return rsx! {
            div {}
        };
    }

    rsx! {
        nav { class: "pager",
            button {
                class: "pager-button",
                disabled: current == 1,
                onclick: {
                    let search_ctx = search_ctx.clone();
                    move |_| search_ctx.change_page(current.saturating_sub(1))
                },
                "‹"
            }
            for page in 1..=page_count {
                button {
                    key: "{page}",
                    class: if page == current { "pager-button active" } else { "pager-button" },
                    onclick: {
                        let search_ctx = search_ctx.clone();
                        move |_| search_ctx.change_page(page)
                    },
                    "{page}"
                }
            }
            button {
                class: "pager-button",
                disabled: current == page_count,
                onclick: move |_| search_ctx.change_page(current + 1),
                "›"
            }
        }
    }
}
