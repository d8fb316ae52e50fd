use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Decode a transport-encoded (standard base64) secret field.
///
/// Malformed input, bytes that are not UTF-8, and values containing a
/// NUL byte decode to an empty string instead of failing: one corrupted
/// field becomes an empty variable and the rest of the project still
/// resolves. Line breaks inside the encoded text are ignored.
pub fn decode(encoded: &str) -> String {
    let compact: String = encoded.chars().filter(|c| *c != '\n' && *c != '\r').collect();

    let bytes = match STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "secret field is not valid base64, using empty value");
            return String::new();
        }
    };

    let Ok(text) = String::from_utf8(bytes) else {
        tracing::warn!("secret field is not valid UTF-8, using empty value");
        return String::new();
    };

    // A NUL byte cannot be placed in a process environment.
    if text.contains('\0') {
        tracing::warn!("secret field contains a NUL byte, using empty value");
        return String::new();
    }

    text
}
