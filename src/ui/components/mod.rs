mod search;

pub use search::SearchPage;
