use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::sources::upbit;
use crate::types::{DrawdownReport, RebalanceBand, SentimentReport, ShockSignalReport};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// GET /api/market/equity/:symbol
async fn get_equity(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<DrawdownReport>>> {
    let report = state.market.equity_report(&symbol).await?;
    Ok(Json(ApiResponse::with_cached(report.data, report.cached)))
}

/// GET /api/market/crypto/:market
async fn get_crypto(
    State(state): State<AppState>,
    Path(market): Path<String>,
) -> Result<Json<ApiResponse<DrawdownReport>>> {
    if !upbit::is_supported_market(&market) {
        return Err(AppError::BadRequest(format!(
            "unsupported market: {}",
            market
        )));
    }

    let report = state.market.crypto_report(&market).await?;
    Ok(Json(ApiResponse::with_cached(report.data, report.cached)))
}

/// GET /api/market/signal
async fn get_signal(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ShockSignalReport>>> {
    let report = state.market.shock_signal().await?;
    Ok(Json(ApiResponse::with_cached(report.data, report.cached)))
}

/// GET /api/market/sentiment
async fn get_sentiment(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SentimentReport>>> {
    let report = state.market.sentiment_report().await?;
    Ok(Json(ApiResponse::with_cached(report.data, report.cached)))
}

/// GET /api/market/rebalance
async fn get_rebalance(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RebalanceBand>>>> {
    Ok(Json(ApiResponse::fresh(state.market.rebalance_table())))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/equity/:symbol", get(get_equity))
        .route("/crypto/:market", get(get_crypto))
        .route("/signal", get(get_signal))
        .route("/sentiment", get(get_sentiment))
        .route("/rebalance", get(get_rebalance))
}
