use crate::planner::JourneyPlanner;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<JourneyPlanner>,
}

impl AppState {
    pub fn new(planner: JourneyPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
