use base64::{prelude::BASE64_STANDARD, Engine};
use uuid::Uuid;

/// Decoded form of a bearer token: the owner id plus the secret whose hash
/// is stored in `auth_token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParts {
    pub user_id: Uuid,
    pub secret: String,
}

impl TokenParts {
    pub fn encode(&self) -> String {
        construct_token(&self.user_id, &self.secret)
    }
}

pub fn construct_token(user_id: &Uuid, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{user_id}.{secret}"))
}

pub fn extract_token_parts(token: &str) -> Option<TokenParts> {
    let raw = BASE64_STANDARD.decode(token.trim()).ok()?;
    let raw = String::from_utf8(raw).ok()?;
    let (user_id, secret) = raw.split_once('.')?;
    if secret.is_empty() {
        return None;
    }
    Some(TokenParts {
        user_id: Uuid::parse_str(user_id).ok()?,
        secret: secret.to_string(),
    })
}
