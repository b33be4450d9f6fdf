use axum::{Json, debug_handler, extract::State};
use axum_extra::extract::CookieJar;

use crate::{AppState, session::{Identity, Sessions}};

#[debug_handler(state = AppState)]
pub(crate) async fn me(
    State(sessions): State<Sessions>,
    jar: CookieJar,
) -> (CookieJar, Json<Identity>) {
    let (identity, jar) = sessions.resolve(jar);
    (jar, Json(identity))
}
