// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use kiosk_session::SessionChannel;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, info};

/// Default interval between expiry checks.
pub const DEFAULT_GUARD_INTERVAL: Duration = Duration::from_secs(20);

/// Failure modes of [`decode_expiry`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token does not have the three dot-separated JWT parts.
    #[error("token is not a three-part JWT")]
    Malformed,
    /// The payload part is not valid URL-safe base64.
    #[error("token payload is not valid base64")]
    Encoding,
    /// The payload decoded but is not JSON or lacks a numeric `exp`.
    #[error("token payload has no usable exp claim")]
    MissingExpiry,
}

/// Extracts the expiry instant from a JWT's `exp` claim.
///
/// The payload is decoded without verifying the signature: this side
/// only consumes tokens the backend issued, and the backend rejects
/// tampered ones anyway. A token failing any stage of the decode is
/// treated the same as an expired one by the guard.
///
/// # Errors
///
/// Returns a [`TokenError`] naming the stage that failed.
pub fn decode_expiry(token: &str) -> Result<OffsetDateTime, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = parts.as_slice() else {
        return Err(TokenError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Encoding)?;
    let claims: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|_| TokenError::MissingExpiry)?;
    let exp = claims
        .get("exp")
        .and_then(serde_json::Value::as_i64)
        .ok_or(TokenError::MissingExpiry)?;
    OffsetDateTime::from_unix_timestamp(exp).map_err(|_| TokenError::MissingExpiry)
}

/// Outcome of one expiry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionVerdict {
    /// The token is valid until the given instant.
    Active(OffsetDateTime),
    /// The token was absent, malformed or past its expiry; the session
    /// has been cleared.
    Destroyed,
    /// There was no session to guard in the first place.
    Idle,
}

/// Watches the stored token and tears the session down when it lapses.
///
/// Teardown is idempotent, so a lapse detected on several checks in a
/// row, or simultaneously by several surfaces, converges on the same
/// cleared state.
pub struct AuthExpiryGuard {
    channel: Arc<SessionChannel>,
    interval: Duration,
    seen_session: bool,
}

impl AuthExpiryGuard {
    /// Creates a guard polling at the default interval.
    #[must_use]
    pub const fn new(channel: Arc<SessionChannel>) -> Self {
        Self::with_interval(channel, DEFAULT_GUARD_INTERVAL)
    }

    /// Creates a guard polling at the given interval.
    #[must_use]
    pub const fn with_interval(channel: Arc<SessionChannel>, interval: Duration) -> Self {
        Self {
            channel,
            interval,
            seen_session: false,
        }
    }

    /// Checks the stored token once.
    ///
    /// No token and no session ever seen means there is nothing to
    /// guard. A token that is absent after a session existed, or that
    /// is malformed or expired, destroys the session.
    pub fn check_now(&mut self) -> SessionVerdict {
        let Some(token) = self.channel.token() else {
            if self.seen_session {
                debug!("Session token gone, clearing session");
                self.channel.clear_session();
                return SessionVerdict::Destroyed;
            }
            return SessionVerdict::Idle;
        };
        self.seen_session = true;
        match decode_expiry(&token) {
            Ok(expiry) if expiry > OffsetDateTime::now_utc() => SessionVerdict::Active(expiry),
            Ok(expiry) => {
                info!(%expiry, "Session token expired, clearing session");
                self.channel.clear_session();
                SessionVerdict::Destroyed
            }
            Err(e) => {
                info!(error = %e, "Session token unusable, clearing session");
                self.channel.clear_session();
                SessionVerdict::Destroyed
            }
        }
    }

    /// Runs until the session is destroyed or found idle.
    ///
    /// Performs an immediate check, then re-checks on a fixed interval
    /// and additionally on every session event, so a logout performed
    /// by another surface is noticed without waiting out the interval.
    pub async fn run(mut self) -> SessionVerdict {
        match self.check_now() {
            SessionVerdict::Active(_) => {}
            verdict => return verdict,
        }
        let mut events = self.channel.subscribe();
        let mut ticker =
            tokio::time::interval_at(tokio::time::Instant::now() + self.interval, self.interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = events.recv() => {}
            }
            match self.check_now() {
                SessionVerdict::Active(_) => {}
                verdict => return verdict,
            }
        }
    }
}
