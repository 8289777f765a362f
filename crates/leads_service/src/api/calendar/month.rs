use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use leads_service::domain::calendar::{month_grid, RangeSelection};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::ErrorResponse;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthQuery {
    /// Pending or committed range start, to render the selection.
    pub start: Option<NaiveDate>,
    /// Committed range end.
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Past days are not selectable.
    pub selectable: bool,
    pub selected: bool,
    pub in_range: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub today: NaiveDate,
    /// Sunday-first cells; nulls pad the first week.
    pub grid: Vec<Option<CalendarDay>>,
}

/// One month of the stay calendar, with the guest's current selection
/// rendered into the cells. Month navigation is just another call; the
/// selection rides along in the query untouched.
#[utoipa::path(
        get,
        operation_id = "calendar_month",
        path = "/calendar/{year}/{month}",
        params(
            ("year" = i32, Path, description = "calendar year"),
            ("month" = u32, Path, description = "calendar month, 1-12"),
            MonthQuery,
        ),
        responses(
            (status = 200, body = CalendarMonth),
            (status = 400, description = "invalid month", body = ErrorResponse),
        )
    )]
#[tracing::instrument]
pub async fn month_view(
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<CalendarMonth>, Response> {
    let today = Utc::now().date_naive();

    let grid = month_grid(year, month, today).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: format!("invalid month {year}-{month}"),
            }),
        )
            .into_response()
    })?;

    let selection = RangeSelection::resume(query.start, query.end);
    let selection_start = selection.pending_start();
    let selection_end = selection.committed().map(|(_, end)| end);

    let grid = grid
        .into_iter()
        .map(|slot| {
            slot.map(|day| CalendarDay {
                date: day.date,
                selectable: day.selectable,
                selected: selection_start == Some(day.date) || selection_end == Some(day.date),
                in_range: selection.in_range(day.date),
            })
        })
        .collect();

    Ok(Json(CalendarMonth {
        year,
        month,
        today,
        grid,
    }))
}
