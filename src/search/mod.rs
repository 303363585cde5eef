// # Search Module
//
// View state for the syllabus search page, kept free of any UI types so it
// can be driven directly from tests and the CLI:
//
// - **SearchFilters / SearchMode**: Checkbox flags and the search they select
// - **Pagination**: Fixed-size client-side paging
// - **SearchState**: Query, filters, results and loading flag, with the
//   begin/complete pair every submission goes through

mod mode;
mod pagination;
mod state;

pub use mode::{SearchFilters, SearchMode};
pub use pagination::Pagination;
pub use state::{Completion, SearchRequest, SearchState};
