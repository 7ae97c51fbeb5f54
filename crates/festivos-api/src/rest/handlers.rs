//! Request handlers.

use super::AppState;
use crate::error::ApiError;
use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, TimeZone, Utc};
use festivos_calendar::{ResolvedHoliday, Verdict};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Health check.
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /holidays/verify/{year}/{month}/{day}` — textual verdict.
///
/// Years outside the configured window get the `INVALID_DATE` verdict,
/// the same as an impossible month/day: from the client's point of view
/// both are simply dates the service does not recognize.
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Path((year, month, day)): Path<(i64, u16, u16)>,
) -> String {
    if !state.config.accepts_year(year) {
        debug!(year, "verify: year outside accepted window");
        return Verdict::InvalidDate.to_string();
    }
    // Segments wider than any real month or day are still just invalid
    // dates to the client, not malformed requests.
    let (Ok(month), Ok(day)) = (u8::try_from(month), u8::try_from(day)) else {
        return Verdict::InvalidDate.to_string();
    };
    state.service.verify(year as u16, month, day).to_string()
}

/// A resolved holiday as it crosses the wire.
///
/// The date is serialized as midnight UTC in RFC 3339 form.  That
/// timestamp is purely a transport representation; the underlying value
/// is a calendar date with no time-of-day semantics.
#[derive(Debug, Serialize)]
pub struct HolidayDto {
    /// Holiday display name.
    pub name: String,
    /// Concrete date, rendered as midnight UTC.
    pub date: DateTime<Utc>,
}

impl From<ResolvedHoliday> for HolidayDto {
    fn from(holiday: ResolvedHoliday) -> Self {
        let date = Utc
            .with_ymd_and_hms(
                holiday.date.year() as i32,
                holiday.date.month() as u32,
                holiday.date.day_of_month() as u32,
                0,
                0,
                0,
            )
            .single()
            .expect("resolved dates are always valid at midnight UTC");
        Self {
            name: holiday.name,
            date,
        }
    }
}

/// `GET /holidays/list/{year}` — every holiday of the year, in catalog
/// order.  Out-of-window years are a 400, not an internal failure.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i64>,
) -> Result<Json<Vec<HolidayDto>>, ApiError> {
    if !state.config.accepts_year(year) {
        return Err(ApiError::InvalidRequest(format!(
            "year {year} outside accepted range [{}, {}]",
            state.config.min_year, state.config.max_year
        )));
    }
    let holidays = state
        .service
        .holidays_for_year(year as u16)
        .into_iter()
        .map(HolidayDto::from)
        .collect();
    Ok(Json(holidays))
}
