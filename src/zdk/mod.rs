mod members;
mod rooms;
mod tokens;

pub use members::MemberFilter;
pub use rooms::{CreateRoom, Room, RoomPatch};

use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

/// Client for the upstream room/user platform's private API. Cheap to
/// clone; the underlying HTTP client is shared.
#[derive(Clone)]
pub struct ZdkClient {
    http: reqwest::Client,
    api_key: String,
    room_base: String,
    user_base: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ZdkError {
    /// Upstream answered with anything but 200. The body text stays
    /// "unauthorized" for the frontend's sake; the real status rides along.
    #[error("unauthorized (upstream status {status})")]
    Unauthorized { status: StatusCode },
    #[error("zdk request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected zdk response: {0}")]
    Malformed(&'static str),
}

/// Every private-API call wraps its argument object in this envelope.
#[derive(Serialize)]
struct Arguments<T> {
    arguments: [T; 1],
}

#[derive(Serialize, Default)]
pub(crate) struct Query {
    pub(crate) conditions: Vec<Condition>,
}

#[derive(Serialize, Default)]
pub(crate) struct Condition {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) user_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) room_ids: Vec<String>,
}

impl Query {
    pub(crate) fn by_ids(ids: &[String]) -> Query {
        Query {
            conditions: vec![Condition {
                ids: ids.to_vec(),
                ..Condition::default()
            }],
        }
    }
}

impl ZdkClient {
    pub fn new(api_key: &str, api_host: &str) -> ZdkClient {
        ZdkClient::with_endpoints(
            api_key,
            format!("https://room.{api_host}"),
            format!("https://user.{api_host}"),
        )
    }

    /// Points the client at explicit service roots instead of deriving
    /// `https://room.<host>` / `https://user.<host>` from the api host.
    pub fn with_endpoints(api_key: &str, room_base: String, user_base: String) -> ZdkClient {
        ZdkClient {
            http: reqwest::Client::new(),
            api_key: api_key.to_owned(),
            room_base,
            user_base,
        }
    }

    fn room_url(&self, service: &str, method: &str) -> String {
        format!("{}/room.{service}.private.v1.Service/{method}", self.room_base)
    }

    fn user_url(&self, service: &str, method: &str) -> String {
        format!("{}/user.{service}.private.v1.Service/{method}", self.user_base)
    }

    async fn post<A>(&self, url: String, argument: A) -> Result<reqwest::Response, ZdkError>
    where
        A: Serialize,
    {
        let res = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&Arguments { arguments: [argument] })
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            warn!(%status, %url, "zdk call rejected");
            return Err(ZdkError::Unauthorized { status });
        }

        Ok(res)
    }

    async fn call<A, R>(&self, url: String, argument: A) -> Result<R, ZdkError>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        Ok(self.post(url, argument).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_error_names_itself_and_the_status() {
        let err = ZdkError::Unauthorized {
            status: StatusCode::FORBIDDEN,
        };
        let text = err.to_string();
        assert!(text.contains("unauthorized"));
        assert!(text.contains("403"));
    }

    #[test]
    fn query_by_ids_skips_empty_condition_fields() {
        let query = Query::by_ids(&["r1".to_owned()]);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            serde_json::json!({"conditions": [{"ids": ["r1"]}]}),
        );
    }
}
