use std::sync::Arc;

use crate::infrastructure::{atlas::JobBoard, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub job_board: Arc<dyn JobBoard>,
}

impl AppState {
    pub fn new(config: Arc<Config>, job_board: Arc<dyn JobBoard>) -> Self {
        Self { config, job_board }
    }
}
