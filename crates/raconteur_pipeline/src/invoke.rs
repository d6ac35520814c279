//! Timeout-bounded model invocation.

use raconteur_core::ImagePayload;
use raconteur_error::{GeminiError, GeminiErrorKind, RaconteurResult};
use raconteur_interface::VisionDriver;
use std::time::Duration;
use tracing::warn;

/// Wall-clock ceiling on a single generation call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Issue exactly one generation call, raced against a wall-clock timeout.
///
/// Whichever settles first determines the outcome. On timeout the pending
/// call is dropped, not cancelled at the transport level; a late-arriving
/// response is discarded unobserved.
///
/// # Errors
///
/// Returns `Timeout` when the window elapses first, or whatever error the
/// driver produced.
pub async fn invoke(
    driver: &dyn VisionDriver,
    prompt: &str,
    image: &ImagePayload,
    timeout: Duration,
) -> RaconteurResult<String> {
    match tokio::time::timeout(timeout, driver.generate(prompt, image)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                provider = driver.provider_name(),
                timeout_secs = timeout.as_secs(),
                "Generation call abandoned after timeout"
            );
            Err(GeminiError::new(GeminiErrorKind::Timeout(timeout.as_secs())).into())
        }
    }
}
