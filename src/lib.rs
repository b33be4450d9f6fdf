pub mod api;
pub mod config;
pub mod frontend;
pub mod session;
pub mod zdk;

use axum::{Router, extract::FromRef, http::StatusCode, response::{IntoResponse, Response}};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::FrontendDir, session::Sessions, zdk::ZdkClient};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub zdk: ZdkClient,
    pub sessions: Sessions,
    pub frontend: FrontendDir,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(frontend::router(&state.frontend))
        .nest("/api", api::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub type AppResult<T> = Result<T, AppError>;
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
