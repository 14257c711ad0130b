pub mod dashboard;
pub mod health;
pub mod market;

use crate::AppState;
use axum::Router;
use serde::Serialize;

/// API response wrapper shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    pub cached: bool,
}

impl<T> ApiResponse<T> {
    /// Wrap a freshly computed value.
    pub fn fresh(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta { cached: false },
        }
    }

    /// Wrap a value with explicit cache provenance.
    pub fn with_cached(data: T, cached: bool) -> Self {
        Self {
            data,
            meta: ApiMeta { cached },
        }
    }
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(dashboard::router())
        .nest("/api/market", market::router())
}
