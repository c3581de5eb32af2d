use std::sync::Arc;

use macronote_core::application::MacronoteService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MacronoteService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MacronoteService) -> Self {
        Self { args, service }
    }
}
