// Library exports for integration tests and the command-line tool

pub mod config;
pub mod search;
pub mod syllabus;

#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;
