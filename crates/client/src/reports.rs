// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::ApiClient;
use crate::envelope::ApiEnvelope;
use kiosk_domain::RemoteError;
use reqwest::Method;
use serde::Deserialize;

/// Action count for one user in a daily report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserActionCount {
    /// Display name of the user.
    pub username: String,
    /// Number of actions performed on the report date.
    pub actions: u64,
}

/// One recent activity line in a daily report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecentActivity {
    /// Activity identifier.
    pub id: i64,
    /// When the activity happened (ISO 8601).
    pub timestamp: String,
    /// Display name of the acting user.
    pub username: String,
    /// Short action description.
    pub action: String,
    /// Free-form detail text.
    #[serde(default)]
    pub details: String,
}

/// The daily activity report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DailyReport {
    /// Per-user action counts.
    pub stats: Vec<UserActionCount>,
    /// Most recent activities, newest first.
    pub recent: Vec<RecentActivity>,
}

/// Incidence totals for one day in a date range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncidenceDay {
    /// The day, `YYYY-MM-DD`.
    pub date: String,
    /// Total changes recorded that day.
    pub total: u64,
    /// Changes flagged as needing correction.
    #[serde(default)]
    pub flagged: u64,
}

fn incidence_path(date_from: &str, date_to: &str) -> String {
    format!("/reports/incidence-by-day?date_from={date_from}&date_to={date_to}")
}

fn export_path(kind: &str, date_from: &str, date_to: &str) -> String {
    format!("/reports/export?type={kind}&date_from={date_from}&date_to={date_to}")
}

impl ApiClient {
    /// Fetches the activity report for one day.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for a rejected token, `Rejected` when the backend
    /// refuses, `Remote`/`Network` otherwise.
    pub async fn daily_report(&self, date: &str) -> Result<DailyReport, RemoteError> {
        let envelope: ApiEnvelope<DailyReport> =
            self.get_json(&format!("/reports/daily?date={date}")).await?;
        envelope.into_data()
    }

    /// Fetches per-day incidence totals for a date range.
    ///
    /// # Errors
    ///
    /// See [`Self::daily_report`].
    pub async fn incidence_by_day(
        &self,
        date_from: &str,
        date_to: &str,
    ) -> Result<Vec<IncidenceDay>, RemoteError> {
        let envelope: ApiEnvelope<Vec<IncidenceDay>> =
            self.get_json(&incidence_path(date_from, date_to)).await?;
        envelope.into_data()
    }

    /// Downloads a report as a binary spreadsheet.
    ///
    /// The bytes are passed through untouched; rendering the file is
    /// the backend's business.
    ///
    /// # Errors
    ///
    /// See [`Self::daily_report`].
    pub async fn export_report(
        &self,
        kind: &str,
        date_from: &str,
        date_to: &str,
    ) -> Result<Vec<u8>, RemoteError> {
        let path = export_path(kind, date_from, date_to);
        let response = self.send::<()>(Method::GET, &path, None).await?;
        let bytes = response.bytes().await.map_err(|e| RemoteError::Network {
            message: format!("Truncated export download: {e}"),
        })?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_incidence_path_names_the_by_day_endpoint() {
        assert_eq!(
            incidence_path("2026-08-01", "2026-08-27"),
            "/reports/incidence-by-day?date_from=2026-08-01&date_to=2026-08-27"
        );
    }

    #[test]
    fn test_export_path_sends_the_kind_as_type() {
        assert_eq!(
            export_path("daily", "2026-08-01", "2026-08-27"),
            "/reports/export?type=daily&date_from=2026-08-01&date_to=2026-08-27"
        );
    }
}
