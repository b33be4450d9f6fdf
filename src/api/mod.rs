mod kick;
mod me;
mod room;
mod token;

use axum::{Router, routing::get};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(me::me))
        .route("/token", get(token::token))
        .route("/room", get(room::room))
        .route("/kick", get(kick::kick))
}
