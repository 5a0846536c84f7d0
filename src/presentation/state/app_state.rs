use std::sync::Arc;

use crate::application::services::JobDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<JobDispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<JobDispatcher>) -> Self {
        Self { dispatcher }
    }
}
