use std::sync::{Arc, Mutex};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "session";
const SESSION_TTL_DAYS: i64 = 365;

/// Anonymous browser identity. The cookie is the only place it lives;
/// the server keeps no record of issued identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
}

const ADJECTIVES: [&str; 25] = [
    "Quick", "Lazy", "Mysterious", "Jolly", "Brave", "Silent", "Witty", "Fierce",
    "Clever", "Gentle", "Wild", "Calm", "Bold", "Shy", "Proud", "Happy", "Sad",
    "Eager", "Fancy", "Rusty", "Golden", "Silver", "Bright", "Dark", "Lucky",
];

const NOUNS: [&str; 24] = [
    "Fox", "Bear", "Eagle", "Wolf", "Dragon", "Tiger", "Lion", "Owl", "Rabbit",
    "Falcon", "Hawk", "Shark", "Panda", "Kitten", "Puppy", "Phoenix", "Griffin",
    "Unicorn", "Turtle", "Dolphin", "Whale", "Elephant", "Giraffe", "Zebra",
];

/// Issues anonymous identities. Constructed once at startup and carried in
/// `AppState`; the mutex covers only the name-synthesis draw on the shared
/// rng.
#[derive(Clone)]
pub struct Sessions {
    rng: Arc<Mutex<StdRng>>,
}

impl Sessions {
    pub fn new() -> Sessions {
        Sessions {
            rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
        }
    }

    pub fn issue(&self) -> Identity {
        let name = {
            let mut rng = self.rng.lock().expect("identity rng poisoned");
            format!(
                "{} {}",
                ADJECTIVES.choose(&mut *rng).unwrap(),
                NOUNS.choose(&mut *rng).unwrap(),
            )
        };

        Identity {
            id: Uuid::now_v7(),
            name,
        }
    }

    /// Decodes the `session` cookie when one is present, otherwise mints a
    /// fresh identity and adds its cookie to the jar. A cookie that fails to
    /// decode counts as absent and is replaced.
    pub fn resolve(&self, jar: CookieJar) -> (Identity, CookieJar) {
        if let Some(cookie) = jar.get(SESSION_COOKIE) {
            if let Some(identity) = decode_cookie(cookie.value()) {
                return (identity, jar);
            }
            debug!("replacing undecodable session cookie");
        }

        let identity = self.issue();
        debug!(id = %identity.id, name = %identity.name, "issued session");
        let jar = jar.add(session_cookie(&identity));
        (identity, jar)
    }
}

impl Default for Sessions {
    fn default() -> Sessions {
        Sessions::new()
    }
}

pub fn encode_cookie(identity: &Identity) -> String {
    URL_SAFE.encode(serde_json::to_vec(identity).expect("identity serializes"))
}

pub fn decode_cookie(value: &str) -> Option<Identity> {
    let data = URL_SAFE.decode(value).ok()?;
    serde_json::from_slice(&data).ok()
}

fn session_cookie(identity: &Identity) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, encode_cookie(identity)))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(SESSION_TTL_DAYS))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_round_trip() {
        let identity = Sessions::new().issue();
        let decoded = decode_cookie(&encode_cookie(&identity)).unwrap();
        assert_eq!(decoded, identity);
    }

    #[test]
    fn malformed_cookie_decodes_to_none() {
        assert_eq!(decode_cookie("not base64!"), None);
        // valid base64, not json
        assert_eq!(decode_cookie(&URL_SAFE.encode(b"hello")), None);
        // valid json, wrong shape
        assert_eq!(decode_cookie(&URL_SAFE.encode(b"{\"id\":42}")), None);
    }

    #[test]
    fn issued_identities_are_distinct() {
        let sessions = Sessions::new();
        let a = sessions.issue();
        let b = sessions.issue();
        assert_ne!(a.id, b.id);
        assert!(!a.name.is_empty());
    }

    #[test]
    fn resolve_keeps_existing_identity() {
        let sessions = Sessions::new();
        let identity = sessions.issue();
        let jar = CookieJar::new().add(session_cookie(&identity));

        let (resolved, jar) = sessions.resolve(jar);
        assert_eq!(resolved, identity);
        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(decode_cookie(cookie.value()).unwrap(), identity);
    }

    #[test]
    fn resolve_replaces_malformed_cookie() {
        let sessions = Sessions::new();
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "garbage"));

        let (resolved, jar) = sessions.resolve(jar);
        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(decode_cookie(cookie.value()).unwrap(), resolved);
    }

    #[test]
    fn session_cookie_lives_a_year() {
        let identity = Sessions::new().issue();
        let cookie = session_cookie(&identity);
        assert_eq!(cookie.max_age(), Some(time::Duration::days(365)));
        assert_eq!(cookie.path(), Some("/"));
    }
}
