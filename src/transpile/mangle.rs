//! Deterministic renaming of identifiers Go cannot accept.

use std::borrow::Cow;

use sha1::{
    Digest,
    Sha1,
};

use crate::syntax::is_valid_host_ident;

/// Prefix of every mangled name. Upper case so the name stays exported.
pub const MANGLE_PREFIX: &str = "Bgo_";

/// Digest bytes kept in a mangled name.
const DIGEST_BYTES: usize = 8;

/// Replaces `ident` with [`MANGLE_PREFIX`] followed by the hex of the first eight bytes of
/// its SHA-1 digest.
#[must_use]
pub fn mangle_ident(ident: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(ident.as_bytes());
    let digest = hasher.finalize();
    let head = digest.get(..DIGEST_BYTES).unwrap_or_default();
    format!("{MANGLE_PREFIX}{}", hex::encode(head))
}

/// Returns `ident` unchanged when Go accepts it, otherwise its mangled form.
#[must_use]
pub fn host_safe(ident: &str) -> Cow<'_, str> {
    if is_valid_host_ident(ident) {
        Cow::Borrowed(ident)
    } else {
        let mangled = mangle_ident(ident);
        tracing::trace!(ident, mangled = %mangled, "Mangled identifier");
        Cow::Owned(mangled)
    }
}
