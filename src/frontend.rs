use axum::{Router, debug_handler, extract::State, response::Html, routing::get};
use axum_extra::extract::CookieJar;
use tower_http::services::ServeDir;

use crate::{AppResult, AppState, config::FrontendDir, session::Sessions};

pub fn router(frontend: &FrontendDir) -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .nest_service("/static", ServeDir::new(frontend.0.join("static")))
}

/// Serves the frontend entry document. Goes through a handler rather than a
/// file service because loading the page is also what first establishes the
/// session cookie.
#[debug_handler(state = AppState)]
async fn index(
    State(sessions): State<Sessions>,
    State(FrontendDir(path)): State<FrontendDir>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let (_, jar) = sessions.resolve(jar);
    let page = tokio::fs::read_to_string(path.join("index.html")).await?;
    Ok((jar, Html(page)))
}
