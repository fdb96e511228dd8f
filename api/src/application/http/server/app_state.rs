use std::sync::Arc;

use healthsuite_core::application::HealthSuiteService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HealthSuiteService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HealthSuiteService) -> Self {
        Self { args, service }
    }
}
