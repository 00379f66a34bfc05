// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kiosk_domain::RemoteError;
use std::time::Duration;
use tracing::warn;

/// Retries an idempotent operation with exponential backoff.
///
/// The operation is attempted up to `max_attempts` times. After each
/// retryable failure the caller sleeps for the current delay, which
/// starts at `base_delay` and doubles every attempt. Errors that are
/// not retryable (`Unauthorized`, `Rejected`) surface immediately; the
/// final attempt's error surfaces as the terminal error.
///
/// # Errors
///
/// Returns the last error once attempts are exhausted, or the first
/// non-retryable error.
pub async fn retry_with_backoff<T, F, Fut>(
    max_attempts: u32,
    base_delay: Duration,
    mut op: F,
) -> Result<T, RemoteError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RemoteError>>,
{
    let mut delay = base_delay;
    let mut attempt = 1u32;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts && e.is_retryable() => {
                warn!(attempt, ?delay, error = %e, "Attempt failed, backing off");
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
