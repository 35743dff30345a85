use crate::token::TokenService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(tokens: TokenService) -> Self {
        Self {
            tokens: Arc::new(tokens),
        }
    }
}
