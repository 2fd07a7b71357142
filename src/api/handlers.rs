use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Form, Json,
};
use serde_json::{json, Value};
use tracing::{error, info, instrument};

use crate::{
    error::{AnalyticsError, ShortenError},
    state::AppState,
    types::{AnalyticsData, ShortenRequest},
};

const HOME_PAGE: &str = r#"<!doctype html>
<html>
<head><title>linkfront</title></head>
<body>
<h1>Shorten a URL</h1>
<form method="post" action="/shorten">
  <label>Long URL <input type="url" name="long_url" required></label>
  <label>Alias (optional) <input type="text" name="alias"></label>
  <label>Expiration (optional) <input type="date" name="expiration"></label>
  <button type="submit">Shorten</button>
</form>
</body>
</html>
"#;

const DASHBOARD_PAGE: &str = r#"<!doctype html>
<html>
<head><title>linkfront - dashboard</title></head>
<body>
<h1>Dashboard</h1>
<p>Open <code>/analytics/&lt;short-url&gt;</code> to inspect a link, or go <a href="/">home</a> to create one.</p>
</body>
</html>
"#;

#[instrument]
pub async fn health_check() -> (StatusCode, Json<Value>) {
    let response = json!({
        "status": "ok",
        "version": "1.0.0",
    });
    (StatusCode::OK, Json(response))
}

#[instrument]
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

#[instrument]
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

#[instrument(skip(state, payload))]
pub async fn create_short_url(
    State(state): State<AppState>,
    payload: Result<Form<ShortenRequest>, FormRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(payload) => payload.0,
        Err(rejection) => {
            error!(error = ?rejection, "form parsing error");
            return (
                StatusCode::BAD_REQUEST,
                Html(render_error("Malformed form submission")),
            )
                .into_response();
        }
    };

    match state.client.shorten_url(&request).await {
        Ok(result) => {
            info!(long_url = %request.long_url, "URL shortened");
            (StatusCode::OK, Html(render_result(result.as_str()))).into_response()
        }
        Err(e) => {
            let status = match e {
                ShortenError::InvalidFormat | ShortenError::UnreachableUrl => {
                    StatusCode::BAD_REQUEST
                }
                ShortenError::ShortenFailed => StatusCode::BAD_GATEWAY,
            };
            (status, Html(render_error(&e.to_string()))).into_response()
        }
    }
}

#[instrument(skip(state))]
pub async fn analytics(
    State(state): State<AppState>,
    Path(short_url): Path<String>,
) -> impl IntoResponse {
    match state.client.analytics(&short_url).await {
        Ok(data) => Html(render_analytics(&short_url, &data)).into_response(),
        Err(AnalyticsError::Status(404)) => (
            StatusCode::NOT_FOUND,
            Html(render_error("Short URL not found")),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, short_url = %short_url, "analytics fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                Html(render_error("Analytics are unavailable right now")),
            )
                .into_response()
        }
    }
}

fn render_result(body: &str) -> String {
    format!(
        "<!doctype html>\n<html><body>\n<h1>Done</h1>\n<pre>{}</pre>\n<p><a href=\"/\">Shorten another</a></p>\n</body></html>\n",
        escape_html(body)
    )
}

fn render_error(message: &str) -> String {
    format!(
        "<!doctype html>\n<html><body>\n<h1>Error</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>\n</body></html>\n",
        escape_html(message)
    )
}

fn render_analytics(short_url: &str, data: &AnalyticsData) -> String {
    let mut days = String::new();
    for (date, clicks) in &data.day {
        days.push_str(&format!(
            "<li>{}: {} clicks</li>\n",
            escape_html(date),
            clicks.click_counts
        ));
    }
    format!(
        "<!doctype html>\n<html><body>\n<h1>Analytics for {}</h1>\n<p>Total clicks: {}</p>\n<ul>\n{}</ul>\n</body></html>\n",
        escape_html(short_url),
        data.total_click_counts,
        days
    )
}

// The shorten response body and path segments are untrusted text.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
