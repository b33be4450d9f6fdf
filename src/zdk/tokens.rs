use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ZdkClient, ZdkError};

/// Every token carries the same permission set; the demo frontend expects
/// a fully privileged user.
const FULL_PERMISSIONS: [u32; 8] = [100, 200, 300, 400, 500, 600, 700, 800];

#[derive(Serialize)]
struct CreateToken<'a> {
    id: &'a Uuid,
    avatar: &'a str,
    nickname: &'a str,
    fullname: &'a str,
    permissions: [u32; 8],
}

#[derive(Deserialize)]
struct TokensReply {
    #[serde(default)]
    tokens: Vec<String>,
}

impl ZdkClient {
    pub async fn issue_token(&self, user_id: &Uuid, nickname: &str) -> Result<String, ZdkError> {
        let body = CreateToken {
            id: user_id,
            avatar: "",
            nickname,
            fullname: "",
            permissions: FULL_PERMISSIONS,
        };

        let reply: TokensReply = self.call(self.user_url("tokens", "Create"), body).await?;
        reply
            .tokens
            .into_iter()
            .next()
            .ok_or(ZdkError::Malformed("no token in create reply"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_wire_shape() {
        let id = Uuid::nil();
        let body = CreateToken {
            id: &id,
            avatar: "",
            nickname: "Quick Fox",
            fullname: "",
            permissions: FULL_PERMISSIONS,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "avatar": "",
                "nickname": "Quick Fox",
                "fullname": "",
                "permissions": [100, 200, 300, 400, 500, 600, 700, 800],
            }),
        );
    }
}
