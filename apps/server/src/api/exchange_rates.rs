use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use forex_rate_providers::ExchangeRate;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateParams {
    source_currency: String,
    target_currency: String,
}

async fn get_exchange_rate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RateParams>,
) -> ApiResult<Json<ExchangeRate>> {
    let rate = state
        .conversion_service
        .get_exchange_rate(&params.source_currency, &params.target_currency)
        .await?;
    Ok(Json(rate))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/exchange-rates", get(get_exchange_rate))
}
