use crate::ui::use_search;
use dioxus::prelude::*;

/// Query field, search button and the two filter checkboxes
#[component]
pub fn SearchForm() -> Element {
    let search_ctx = use_search();
    let state = search_ctx.state;
    let is_loading = state.read().is_loading();
    let filters = state.read().filters();
    let query = state.read().query().to_string();

    rsx! {
        div { class: "search-form",
            input {
                class: "search-input",
                onmounted: move |element| {
                    spawn(async move {
                        let _ = element.set_focus(true).await;
                    });
                },
                placeholder: "授業名・教員名は部分一致",
                value: "{query}",
                oninput: {
                    let search_ctx = search_ctx.clone();
                    move |event: FormEvent| {
                        search_ctx.set_query(event.value());
                    }
                },
                onkeydown: {
                    let search_ctx = search_ctx.clone();
                    move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            search_ctx.submit();
                        }
                    }
                },
            }
            button {
                class: "search-button",
                disabled: is_loading,
                onclick: {
                    let search_ctx = search_ctx.clone();
                    move |_| search_ctx.submit()
                },
                if is_loading {
                    "検索中..."
                } else {
                    "検索"
                }
            }
            label { class: "filter",
                input {
                    r#type: "checkbox",
                    checked: filters.by_name,
                    onchange: {
                        let search_ctx = search_ctx.clone();
                        move |event: FormEvent| search_ctx.toggle_name_filter(event.checked())
                    },
                }
                "科目名"
            }
            label { class: "filter",
                input {
                    r#type: "checkbox",
                    checked: filters.by_teacher,
                    onchange: move |event: FormEvent| search_ctx.toggle_teacher_filter(event.checked()),
                }
                "教員名"
            }
        }
    }
}
