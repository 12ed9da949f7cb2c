use std::sync::Arc;

use verdura_core::application::VerduraService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: VerduraService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: VerduraService) -> Self {
        Self { args, service }
    }
}
