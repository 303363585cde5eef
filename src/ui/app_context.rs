use crate::config;
use crate::syllabus::SyllabusApi;
use std::sync::Arc;

/// Handed to the desktop app at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub syllabus_api: Arc<dyn SyllabusApi>,
}
