use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDateTime;
use forex_core::conversions::{
    Conversion, ConversionRequest, HistoryFilter, Page, PageRequest, SortOrder,
};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryParams {
    transaction_id: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    page: Option<i64>,
    page_size: Option<i64>,
    sort: Option<SortOrder>,
}

async fn convert_currency(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConversionRequest>,
) -> ApiResult<Json<Conversion>> {
    let conversion = state.conversion_service.convert(request).await?;
    Ok(Json(conversion))
}

async fn get_conversions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> ApiResult<Json<Page<Conversion>>> {
    let start = params.start_date.as_deref().map(parse_datetime).transpose()?;
    let end = params.end_date.as_deref().map(parse_datetime).transpose()?;
    let filter = HistoryFilter::from_params(params.transaction_id, start, end)
        .map_err(forex_core::Error::from)?;
    let page = PageRequest::new(params.page, params.page_size, params.sort);

    let conversions = state.conversion_service.get_conversions(&filter, &page)?;
    Ok(Json(conversions))
}

/// Accepts `YYYY-MM-DD HH:MM:SS` with an optional fractional part, with
/// either a space or a `T` separating date and time.
fn parse_datetime(raw: &str) -> Result<NaiveDateTime, ApiError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|e| ApiError::from(forex_core::Error::from(e)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/conversions",
        get(get_conversions).post(convert_currency),
    )
}
