//! Encode module: digest rendering
//!
//! Renders raw digest bytes as lowercase hex and standard padded base64.
//! Pure and total for well-formed input; case transformation for display
//! is a caller concern.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Encode a 32-byte digest as (lowercase hex, standard base64).
#[must_use]
pub fn encode_digest(digest: &[u8; 32]) -> (String, String) {
    (hex::encode(digest), BASE64.encode(digest))
}
