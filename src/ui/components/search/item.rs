use crate::syllabus::SyllabusRecord;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchResultItemProps {
    pub record: SyllabusRecord,
}

#[component]
pub fn SearchResultItem(props: SearchResultItemProps) -> Element {
    let record = &props.record;
    let description = record.description();
    let schedule = record.schedule_line();
    let category = record.category_line();

    rsx! {
        li { class: "result-item",
            a { class: "result-title", href: "{record.url}", target: "_blank",
                "{record.name} ↗"
            }
            p { class: "result-description", "{description}" }
            p { "{schedule}" }
            p { "{category}" }
        }
    }
}
