use axum::{Json, debug_handler, extract::State};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use crate::{AppResult, AppState, session::Sessions, zdk::ZdkClient};

#[derive(Serialize)]
pub(crate) struct TokenReply {
    token: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn token(
    State(sessions): State<Sessions>,
    State(zdk): State<ZdkClient>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<TokenReply>)> {
    let (identity, jar) = sessions.resolve(jar);
    let token = zdk.issue_token(&identity.id, &identity.name).await?;
    Ok((jar, Json(TokenReply { token })))
}
