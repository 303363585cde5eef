use crate::search::SearchState;
use crate::syllabus::SyllabusApi;
use crate::ui::AppContext;
use dioxus::prelude::*;
use std::sync::Arc;

/// Search page state plus the client it searches with
#[derive(Clone)]
pub struct SearchContext {
    pub state: Signal<SearchState>,
    pub(crate) api: Arc<dyn SyllabusApi>,
}

impl SearchContext {
    pub fn set_query(&self, query: String) {
        let mut state = self.state;
        state.write().set_query(query);
    }

    pub fn toggle_name_filter(&self, checked: bool) {
        let mut state = self.state;
        state.write().toggle_name_filter(checked);
    }

    pub fn toggle_teacher_filter(&self, checked: bool) {
        let mut state = self.state;
        state.write().toggle_teacher_filter(checked);
    }

    pub fn change_page(&self, page: usize) {
        let mut state = self.state;
        state.write().change_page(page);
    }

    /// Shared by the search button and Enter in the query field
    pub fn submit(&self) {
        let mut state = self.state;
        let Some(request) = state.write().begin_search() else {
            return;
        };

        let api = self.api.clone();
        spawn(async move {
            let outcome = request.send(api.as_ref()).await;
            state.write().complete_search(request.ticket, outcome);
        });
    }
}

/// Provider component to make the search context available to the page
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let app_ctx = use_context::<AppContext>();
    let page_size = app_ctx.config.page_size;
    let state = use_signal(move || SearchState::new(page_size));
    let search_ctx = SearchContext {
        state,
        api: app_ctx.syllabus_api.clone(),
    };

    use_context_provider(|| search_ctx.clone());

    rsx! {
        {children}
    }
}

/// Hook to access the search context
pub fn use_search() -> SearchContext {
    use_context::<SearchContext>()
}
