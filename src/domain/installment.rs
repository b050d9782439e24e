//! Installment - Overdue Payment Plan Installments

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THRESHOLD_DAYS;

/// An installment past its due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueInstallment {
    pub id: String,
    pub patient_name: String,
    /// Position of the installment in its payment plan, 1-based
    pub installment_number: u32,
    pub expected_amount: f64,
    pub due_date: NaiveDate,
    /// Registered as a default by the server
    pub is_default: bool,
    pub treatment_id: String,
}

impl OverdueInstallment {
    /// Days between the due date and `today` (negative if not yet due)
    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        (today - self.due_date).num_days()
    }

    /// Whether the server rule would flag this installment as a default
    pub fn exceeds_default_threshold(&self, today: NaiveDate) -> bool {
        self.days_overdue(today) > DEFAULT_THRESHOLD_DAYS
    }

    /// Translation key of the status badge
    pub fn status_key(&self) -> &'static str {
        if self.is_default {
            "overdue-status-default"
        } else {
            "overdue-status-late"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installment(due: NaiveDate, is_default: bool) -> OverdueInstallment {
        OverdueInstallment {
            id: "i-1".to_string(),
            patient_name: "Maria Souza".to_string(),
            installment_number: 2,
            expected_amount: 350.0,
            due_date: due,
            is_default,
            treatment_id: "t-1".to_string(),
        }
    }

    #[test]
    fn days_overdue_and_threshold() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let due = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let item = installment(due, true);
        assert_eq!(item.days_overdue(today), 89);
        assert!(item.exceeds_default_threshold(today));

        let recent = installment(NaiveDate::from_ymd_opt(2026, 4, 20).unwrap(), false);
        assert!(!recent.exceeds_default_threshold(today));
    }

    #[test]
    fn status_follows_server_flag() {
        let due = NaiveDate::from_ymd_opt(2026, 4, 20).unwrap();
        assert_eq!(installment(due, true).status_key(), "overdue-status-default");
        assert_eq!(installment(due, false).status_key(), "overdue-status-late");
    }
}
