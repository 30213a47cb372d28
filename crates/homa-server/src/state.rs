use std::sync::Arc;

use homa_auth::jwt::TokenIssuer;
use homa_export::styles::DocumentStyles;
use homa_storage::Store;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub tokens: TokenIssuer,
    pub styles: Arc<DocumentStyles>,
}

impl AppState {
    pub fn new(store: Store, tokens: TokenIssuer) -> Self {
        Self {
            store: Arc::new(store),
            tokens,
            styles: Arc::new(DocumentStyles::default()),
        }
    }
}
