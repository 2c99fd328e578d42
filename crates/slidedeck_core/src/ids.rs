//! Identifier generation for slides and ephemeral share tokens.

use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

const SHARE_TOKEN_LEN: usize = 8;

/// Generate a process-unique slide id. Opaque to callers; assigned once at
/// creation and immutable thereafter.
pub fn slide_id() -> String {
    format!("slide-{}", Uuid::new_v4())
}

/// Generate a short opaque token for share links. Generation only; tokens are
/// never resolved or stored by this crate.
pub fn share_token() -> String {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SHARE_TOKEN_LEN)
        .map(char::from)
        .collect();
    token.to_ascii_lowercase()
}
