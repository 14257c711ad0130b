use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::sources::upbit;
use crate::types::DashboardReport;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Query parameters for the dashboard endpoint; both fall back to the
/// configured defaults.
#[derive(Debug, Deserialize, Default)]
pub struct DashboardQuery {
    pub symbol: Option<String>,
    pub market: Option<String>,
}

/// GET /api/dashboard
async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<DashboardReport>>> {
    let symbol = query
        .symbol
        .unwrap_or_else(|| state.config.default_equity_symbol.clone());
    let market = query
        .market
        .unwrap_or_else(|| state.config.default_crypto_market.clone());

    if !upbit::is_supported_market(&market) {
        return Err(AppError::BadRequest(format!(
            "unsupported market: {}",
            market
        )));
    }

    let report = state.market.dashboard(&symbol, &market).await?;
    Ok(Json(ApiResponse::fresh(report)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(get_dashboard))
}
