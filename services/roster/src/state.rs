use crate::roster::Roster;
use crate::validator::TokenValidator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Roster>,
}

impl AppState {
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self {
            roster: Arc::new(Roster::new(validator)),
        }
    }
}
