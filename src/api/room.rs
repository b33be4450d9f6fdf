use std::collections::HashMap;
use std::time::Duration;

use axum::{Json, debug_handler, extract::State};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use crate::{AppResult, AppState, session::Sessions, zdk::{CreateRoom, Room, ZdkClient}};

const ROOM_CAPACITY: u32 = 32;
const ROOM_RETENTION: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Serialize)]
pub(crate) struct RoomReply {
    room: Room,
}

#[debug_handler(state = AppState)]
pub(crate) async fn room(
    State(sessions): State<Sessions>,
    State(zdk): State<ZdkClient>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<RoomReply>)> {
    let (_, jar) = sessions.resolve(jar);

    let room = zdk
        .create_room(CreateRoom {
            capacity: Some(ROOM_CAPACITY),
            metadata: Some(HashMap::from([("name".to_owned(), "test room".to_owned())])),
            retention: Some(ROOM_RETENTION),
            ..CreateRoom::default()
        })
        .await?;

    Ok((jar, Json(RoomReply { room })))
}
