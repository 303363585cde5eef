mod form;
mod item;
mod list;
mod page;
mod pager;
mod status;

pub use page::SearchPage;
