//! Statistics endpoints.
//!
//! Rows are shaped the way the dashboard's chart library consumes them:
//! arrays of `[weekday label, value…]`, with `presence_weekday`
//! additionally carrying a column-header row.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use super::{load_store, user_not_found};
use crate::server::state::AppState;
use crate::store::aggregator::{
    group_by_weekday, group_start_end_weekday, mean, top_weeks,
};
use crate::store::types::UserId;

/// Weekday labels, Monday first, matching the bucket order.
const DAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// How many ranked weeks the top-weeks endpoint returns.
const TOP_WEEK_COUNT: usize = 5;

/// GET /api/v1/mean_time_weekday/:user_id - Mean presence interval per weekday.
pub async fn mean_time_weekday(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<(&'static str, f64)>>, StatusCode> {
    let store = load_store(&state)?;
    let Some(records) = store.records_for(user_id) else {
        return Err(user_not_found(user_id));
    };

    let rows = group_by_weekday(records)
        .iter()
        .enumerate()
        .map(|(weekday, intervals)| (DAY_ABBR[weekday], mean(intervals)))
        .collect();

    Ok(Json(rows))
}

/// GET /api/v1/presence_weekday/:user_id - Total presence per weekday.
pub async fn presence_weekday(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Value>, StatusCode> {
    let store = load_store(&state)?;
    let Some(records) = store.records_for(user_id) else {
        return Err(user_not_found(user_id));
    };

    let mut rows = vec![json!(["Weekday", "Presence (s)"])];
    for (weekday, intervals) in group_by_weekday(records).iter().enumerate() {
        rows.push(json!([DAY_ABBR[weekday], intervals.iter().sum::<i64>()]));
    }

    Ok(Json(Value::Array(rows)))
}

/// GET /api/v1/presence_start_end/:user_id - Mean clock-in/out per weekday.
pub async fn presence_start_end(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<(&'static str, f64, f64)>>, StatusCode> {
    let store = load_store(&state)?;
    let Some(records) = store.records_for(user_id) else {
        return Err(user_not_found(user_id));
    };

    let rows = group_start_end_weekday(records)
        .iter()
        .enumerate()
        .map(|(weekday, bucket)| (DAY_ABBR[weekday], mean(&bucket.start), mean(&bucket.end)))
        .collect();

    Ok(Json(rows))
}

/// GET /api/v1/top5/:user_id - Highest-presence calendar weeks.
pub async fn top5_weeks(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<(String, i64)>>, StatusCode> {
    let store = load_store(&state)?;
    let Some(records) = store.records_for(user_id) else {
        return Err(user_not_found(user_id));
    };

    let rows = top_weeks(records, TOP_WEEK_COUNT)
        .into_iter()
        .map(|(week, total)| (week.to_string(), total))
        .collect();

    Ok(Json(rows))
}
