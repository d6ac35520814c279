//! Image payload normalization.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use raconteur_error::{RaconteurResult, RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};

/// Canonical mime type sent to the model.
///
/// The model tolerates common raster formats under a single declared type,
/// so the original subtype of a data URI is not preserved.
pub const CANONICAL_MIME_TYPE: &str = "image/jpeg";

/// Size ceiling for a decoded image payload (2 MiB).
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// A normalized binary image payload.
///
/// # Examples
///
/// ```
/// use raconteur_core::ImagePayload;
///
/// let payload = ImagePayload::from_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
/// assert_eq!(payload.mime_type, "image/jpeg");
/// assert!(!payload.bytes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Raw image bytes
    pub bytes: Vec<u8>,
    /// Declared mime type (canonicalized)
    pub mime_type: String,
}

impl ImagePayload {
    /// Wrap raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty.
    pub fn from_bytes(bytes: Vec<u8>) -> RaconteurResult<Self> {
        if bytes.is_empty() {
            return Err(RequestError::new(RequestErrorKind::EmptyImage).into());
        }
        Ok(Self {
            bytes,
            mime_type: CANONICAL_MIME_TYPE.to_string(),
        })
    }

    /// Decode a base64 payload, stripping a `data:image/<subtype>;base64,`
    /// prefix when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the base64 is invalid or decodes to zero bytes.
    pub fn from_data_uri(data: &str) -> RaconteurResult<Self> {
        let encoded = strip_data_uri_prefix(data);
        let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
            RequestError::new(RequestErrorKind::InvalidBase64(e.to_string()))
        })?;
        Self::from_bytes(bytes)
    }

    /// Re-encode the payload as base64 for the wire.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

/// Strip a `data:image/<subtype>;base64,` prefix, if present.
///
/// Anything that does not match the pattern is returned unchanged so that
/// bare base64 payloads pass through.
fn strip_data_uri_prefix(data: &str) -> &str {
    if let Some(rest) = data.strip_prefix("data:image/")
        && let Some(idx) = rest.find(";base64,")
    {
        return &rest[idx + ";base64,".len()..];
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG
    const PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn strips_data_uri_prefix() {
        let with_prefix = format!("data:image/png;base64,{PNG_B64}");
        let a = ImagePayload::from_data_uri(&with_prefix).unwrap();
        let b = ImagePayload::from_data_uri(PNG_B64).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mime_type_is_canonicalized() {
        let payload =
            ImagePayload::from_data_uri(&format!("data:image/webp;base64,{PNG_B64}")).unwrap();
        assert_eq!(payload.mime_type, CANONICAL_MIME_TYPE);
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert!(ImagePayload::from_bytes(Vec::new()).is_err());
        assert!(ImagePayload::from_data_uri("data:image/png;base64,").is_err());
    }

    #[test]
    fn invalid_base64_is_rejected() {
        assert!(ImagePayload::from_data_uri("not base64 at all!!!").is_err());
    }

    #[test]
    fn base64_round_trips() {
        let payload = ImagePayload::from_data_uri(PNG_B64).unwrap();
        assert_eq!(payload.to_base64(), PNG_B64);
    }
}
