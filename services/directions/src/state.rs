use crate::provider::RouteProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn RouteProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn RouteProvider>) -> Self {
        Self { provider }
    }
}
