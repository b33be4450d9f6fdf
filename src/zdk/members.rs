use serde::Serialize;

use super::{Condition, Query, ZdkClient, ZdkError};

/// Selects the members a kick applies to. User and room conditions can be
/// combined: user ids alone remove those users from every room, room ids
/// alone empty those rooms.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub user_ids: Vec<String>,
    pub room_ids: Vec<String>,
}

impl MemberFilter {
    pub fn user(user_id: impl Into<String>) -> MemberFilter {
        MemberFilter {
            user_ids: vec![user_id.into()],
            ..MemberFilter::default()
        }
    }
}

#[derive(Serialize)]
struct KickMembers {
    query: Query,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ZdkClient {
    pub async fn kick_members(
        &self,
        filter: MemberFilter,
        reason: Option<&str>,
    ) -> Result<(), ZdkError> {
        let body = KickMembers {
            query: Query {
                conditions: vec![Condition {
                    user_ids: filter.user_ids,
                    room_ids: filter.room_ids,
                    ..Condition::default()
                }],
            },
            reason: reason.map(str::to_owned),
        };

        self.post(self.room_url("members", "Kick"), body).await?;
        Ok(())
    }
}
