use anyhow::anyhow;
use axum::{Json, debug_handler, extract::{Query, State}};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::{AppResult, AppState, session::Sessions, zdk::{MemberFilter, ZdkClient}};

#[derive(Deserialize)]
pub(crate) struct KickQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

#[debug_handler(state = AppState)]
pub(crate) async fn kick(
    State(sessions): State<Sessions>,
    State(zdk): State<ZdkClient>,
    jar: CookieJar,
    Query(KickQuery { user_id }): Query<KickQuery>,
) -> AppResult<(CookieJar, Json<serde_json::Value>)> {
    let (_, jar) = sessions.resolve(jar);

    let user_id = user_id
        .filter(|id| !id.is_empty())
        .ok_or(anyhow!("missing userId query parameter"))?;

    zdk.kick_members(MemberFilter::user(user_id), None).await?;
    Ok((jar, Json(json!({}))))
}
