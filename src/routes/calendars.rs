//! Landing page and calendar download endpoints

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};

use iimcal_core::{IimcalError, ics, sections};

use crate::routes::AppError;
use crate::state::AppState;

/// Public host the calendars are served from, used for webcal links.
const DOMAIN: &str = "iimcal.sabid.in";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/{file}", get(serve_calendar))
}

/// GET / - landing page listing the section calendars
async fn home() -> Html<String> {
    let rows: String = sections::VALID_CALENDARS
        .iter()
        .map(|id| {
            format!(
                "<li>{id}: <a href=\"webcal://{DOMAIN}/{id}.ics\">subscribe</a> \
                 or <a href=\"/{id}.ics\">download</a></li>"
            )
        })
        .collect();

    Html(format!(
        "<!DOCTYPE html>\
         <html><head><title>IIMK EPGP Calendars</title></head>\
         <body><h1>IIMK EPGP Section Calendars</h1><ul>{rows}</ul></body></html>"
    ))
}

/// GET /{calendar_id}.ics - merged section + exam calendar
async fn serve_calendar(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let calendar_id = file
        .strip_suffix(".ics")
        .filter(|id| sections::is_valid_calendar(id))
        .ok_or_else(|| IimcalError::CalendarNotFound(file.clone()))?;

    let events = state.sheets.calendar_events(calendar_id).await?;
    tracing::info!(calendar_id, events = events.len(), "serving calendar");

    let body = ics::generate_ics(calendar_id, &events);
    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={calendar_id}.ics"),
            ),
        ],
        body,
    ))
}
