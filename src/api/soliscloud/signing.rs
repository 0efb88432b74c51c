//! Request signing for the SolisCloud API.
//!
//! Every request carries an HMAC-SHA1 signature over a canonical string built
//! from the method, the body digest, the content type, the date, and the
//! resource path. The server rebuilds the same string from the received
//! headers, so the values used here must be byte-identical to the ones sent.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Base64-encoded MD5 digest of the exact body bytes (the `Content-MD5` header).
pub fn content_md5(body: &[u8]) -> String {
    BASE64.encode(md5::compute(body).0)
}

/// RFC 1123 date with a literal `GMT` designator.
///
/// `chrono` always renders English weekday and month tokens, so the output
/// does not depend on the host locale.
pub fn http_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// The newline-joined string the signature is computed over.
///
/// The field set and their order are the wire contract: method, content
/// digest, content type, date, resource path. The path excludes host, scheme,
/// and query string.
pub fn canonical_string(
    method: &str,
    content_md5: &str,
    content_type: &str,
    date: &str,
    resource_path: &str,
) -> String {
    format!("{method}\n{content_md5}\n{content_type}\n{date}\n{resource_path}")
}

/// Base64-encoded HMAC-SHA1 of the canonical string, keyed by the raw secret.
pub fn sign(secret: &[u8], canonical: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(canonical.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}
