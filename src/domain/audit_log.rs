//! AuditLog - Audit Trail Entries and Filters

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::format::truncate;

/// The user who performed an audited action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditUser {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub role: String,
}

/// An audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    /// Unique ID
    pub id: String,
    /// Action code, e.g. `PATIENT_CREATED`
    #[serde(rename = "acao")]
    pub action: String,
    /// Free text or a JSON document
    #[serde(rename = "detalhes", default)]
    pub details: Option<String>,
    /// When the action happened
    pub timestamp: DateTime<Utc>,
    /// Acting user; `None` for system actions
    #[serde(default)]
    pub user: Option<AuditUser>,
}

/// Coarse classification of an action code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Created,
    Updated,
    /// Deletions and failures
    Removed,
    Other,
}

/// Rendered form of the details field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsPreview {
    /// Details parsed as JSON
    Json { preview: String, pretty: String },
    /// Details kept as plain text
    Text(String),
}

impl DetailsPreview {
    /// Text shown in the table cell
    pub fn preview(&self) -> &str {
        match self {
            DetailsPreview::Json { preview, .. } => preview,
            DetailsPreview::Text(text) => text,
        }
    }

    /// Text shown in the details dialog
    pub fn full(&self) -> &str {
        match self {
            DetailsPreview::Json { pretty, .. } => pretty,
            DetailsPreview::Text(text) => text,
        }
    }
}

impl AuditLog {
    pub fn action_kind(&self) -> ActionKind {
        let action = self.action.as_str();
        if action.contains("CREATED") {
            ActionKind::Created
        } else if action.contains("DELETED") || action.contains("FAILED") {
            ActionKind::Removed
        } else if action.contains("UPDATED") {
            ActionKind::Updated
        } else {
            ActionKind::Other
        }
    }

    /// Action code with underscores shown as spaces
    pub fn action_label(&self) -> String {
        self.action.replace('_', " ")
    }

    /// Preview of the details field; `None` when there is nothing to show
    pub fn details_preview(&self, max_len: usize) -> Option<DetailsPreview> {
        let details = self.details.as_deref()?.trim();
        if details.is_empty() || details == "null" {
            return None;
        }

        match serde_json::from_str::<serde_json::Value>(details) {
            Ok(value) => {
                let compact = value.to_string();
                let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| compact.clone());
                Some(DetailsPreview::Json {
                    preview: truncate(&compact, max_len),
                    pretty,
                })
            }
            Err(_) => Some(DetailsPreview::Text(details.to_string())),
        }
    }
}

/// Time window of the audit query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditPeriod {
    Today,
    Week,
    #[default]
    Month,
    Quarter,
}

impl AuditPeriod {
    pub fn days(self) -> i64 {
        match self {
            AuditPeriod::Today => 1,
            AuditPeriod::Week => 7,
            AuditPeriod::Month => 30,
            AuditPeriod::Quarter => 90,
        }
    }

    pub fn all() -> &'static [AuditPeriod] {
        &[
            AuditPeriod::Today,
            AuditPeriod::Week,
            AuditPeriod::Month,
            AuditPeriod::Quarter,
        ]
    }

    /// Select value (number of days)
    pub fn value(self) -> String {
        self.days().to_string()
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.value() == value)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            AuditPeriod::Today => "audit-period-1",
            AuditPeriod::Week => "audit-period-7",
            AuditPeriod::Month => "audit-period-30",
            AuditPeriod::Quarter => "audit-period-90",
        }
    }
}

/// Action family filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionFilter {
    #[default]
    All,
    Users,
    Patients,
    Payments,
    Treatments,
}

impl ActionFilter {
    pub fn all() -> &'static [ActionFilter] {
        &[
            ActionFilter::All,
            ActionFilter::Users,
            ActionFilter::Patients,
            ActionFilter::Payments,
            ActionFilter::Treatments,
        ]
    }

    /// Action code prefix, `None` for all actions
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            ActionFilter::All => None,
            ActionFilter::Users => Some("USER_"),
            ActionFilter::Patients => Some("PATIENT_"),
            ActionFilter::Payments => Some("PAYMENT_"),
            ActionFilter::Treatments => Some("TREATMENT_"),
        }
    }

    /// Select value (the prefix, empty for all)
    pub fn value(self) -> &'static str {
        self.prefix().unwrap_or("")
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.value() == value)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ActionFilter::All => "audit-action-all",
            ActionFilter::Users => "audit-action-user",
            ActionFilter::Patients => "audit-action-patient",
            ActionFilter::Payments => "audit-action-payment",
            ActionFilter::Treatments => "audit-action-treatment",
        }
    }
}

/// Audit query filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuditFilter {
    pub period: AuditPeriod,
    pub action: ActionFilter,
}

impl AuditFilter {
    /// Whether `log` falls inside this filter as of `now`
    pub fn matches(&self, log: &AuditLog, now: DateTime<Utc>) -> bool {
        let since = now - Duration::days(self.period.days());
        let in_period = log.timestamp >= since && log.timestamp <= now;
        let in_family = self
            .action
            .prefix()
            .is_none_or(|prefix| log.action.starts_with(prefix));
        in_period && in_family
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log(action: &str, details: Option<&str>, days_ago: i64) -> AuditLog {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        AuditLog {
            id: "1".to_string(),
            action: action.to_string(),
            details: details.map(str::to_string),
            timestamp: now - Duration::days(days_ago),
            user: None,
        }
    }

    #[test]
    fn action_kind_classification() {
        assert_eq!(log("PATIENT_CREATED", None, 0).action_kind(), ActionKind::Created);
        assert_eq!(log("PAYMENT_DELETED", None, 0).action_kind(), ActionKind::Removed);
        assert_eq!(log("USER_LOGIN_FAILED", None, 0).action_kind(), ActionKind::Removed);
        assert_eq!(log("TREATMENT_UPDATED", None, 0).action_kind(), ActionKind::Updated);
        assert_eq!(log("USER_LOGIN", None, 0).action_kind(), ActionKind::Other);
        assert_eq!(log("USER_LOGIN", None, 0).action_label(), "USER LOGIN");
    }

    #[test]
    fn empty_details_have_no_preview() {
        assert_eq!(log("X", None, 0).details_preview(100), None);
        assert_eq!(log("X", Some(""), 0).details_preview(100), None);
        assert_eq!(log("X", Some("null"), 0).details_preview(100), None);
    }

    #[test]
    fn json_details_are_compacted_and_truncated() {
        let entry = log("X", Some(r#"{ "patient_id": "p-1",  "amount": 150 }"#), 0);
        let preview = entry.details_preview(100).unwrap();
        assert_eq!(preview.preview(), r#"{"amount":150,"patient_id":"p-1"}"#);
        assert!(preview.full().contains('\n'));

        let long = format!(r#"{{"note": "{}"}}"#, "a".repeat(200));
        let preview = log("X", Some(&long), 0).details_preview(100).unwrap();
        assert_eq!(preview.preview().chars().count(), 100);
        assert!(preview.preview().ends_with("..."));
    }

    #[test]
    fn plain_details_are_kept() {
        let preview = log("X", Some("manual adjustment"), 0).details_preview(100).unwrap();
        assert_eq!(preview, DetailsPreview::Text("manual adjustment".to_string()));
    }

    #[test]
    fn filter_by_period_and_family() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let week = AuditFilter {
            period: AuditPeriod::Week,
            action: ActionFilter::All,
        };
        assert!(week.matches(&log("USER_LOGIN", None, 3), now));
        assert!(!week.matches(&log("USER_LOGIN", None, 8), now));

        let patients = AuditFilter {
            period: AuditPeriod::Quarter,
            action: ActionFilter::Patients,
        };
        assert!(patients.matches(&log("PATIENT_UPDATED", None, 40), now));
        assert!(!patients.matches(&log("PAYMENT_CREATED", None, 1), now));
    }

    #[test]
    fn select_values_round_trip() {
        assert_eq!(AuditPeriod::from_value("90"), Some(AuditPeriod::Quarter));
        assert_eq!(AuditPeriod::from_value("2"), None);
        assert_eq!(ActionFilter::from_value(""), Some(ActionFilter::All));
        assert_eq!(ActionFilter::from_value("PAYMENT_"), Some(ActionFilter::Payments));
    }
}
