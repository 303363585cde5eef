// # Syllabus Module
//
// Wire types and the HTTP client for the external syllabus service:
//
// - **SyllabusRecord**: One catalog row as returned by the service
// - **SyllabusApi**: Seam between the search state and the network
// - **SyllabusClient**: reqwest-backed implementation of `SyllabusApi`

pub mod client;
pub mod models;

pub use client::{Endpoint, SearchError, SyllabusApi, SyllabusClient};
pub use models::SyllabusRecord;
