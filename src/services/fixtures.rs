//! Fixtures - Deterministic Sample Data
//!
//! Sample clinic data for the in-memory row sources. Generated relative to a
//! reference time so period filters always have something to show.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde_json::json;

use crate::domain::audit_log::{AuditLog, AuditUser};
use crate::domain::installment::OverdueInstallment;

const AUDIT_LOG_COUNT: i64 = 180;
const OVERDUE_COUNT: i64 = 23;

const PATIENTS: &[&str] = &[
    "Maria Souza",
    "João Pereira",
    "Ana Oliveira",
    "Carlos Lima",
    "Fernanda Alves",
    "Rafael Gomes",
    "Beatriz Santos",
];

const ACTIONS: &[&str] = &[
    "USER_LOGIN",
    "PATIENT_CREATED",
    "PATIENT_UPDATED",
    "PAYMENT_CREATED",
    "TREATMENT_CREATED",
    "PAYMENT_FAILED",
    "TREATMENT_UPDATED",
    "PATIENT_DELETED",
    "USER_CREATED",
    "SYSTEM_BACKUP",
];

fn users() -> Vec<AuditUser> {
    vec![
        AuditUser {
            id: "u-1".to_string(),
            name: "Helena Costa".to_string(),
            email: "helena@easycore.com.br".to_string(),
            role: "admin".to_string(),
        },
        AuditUser {
            id: "u-2".to_string(),
            name: "Paulo Ribeiro".to_string(),
            email: "paulo@easycore.com.br".to_string(),
            role: "dentista".to_string(),
        },
        AuditUser {
            id: "u-3".to_string(),
            name: "Luana Martins".to_string(),
            email: "luana@easycore.com.br".to_string(),
            role: "recepcao".to_string(),
        },
    ]
}

fn details_for(action: &str, i: i64) -> Option<String> {
    let patient = PATIENTS[(i as usize) % PATIENTS.len()];
    match action {
        "PATIENT_CREATED" | "PATIENT_UPDATED" | "PATIENT_DELETED" => Some(
            json!({ "patient_id": format!("p-{}", i % 40), "nome": patient }).to_string(),
        ),
        "PAYMENT_CREATED" | "PAYMENT_FAILED" => Some(
            json!({
                "payment_id": format!("pay-{i}"),
                "valor": 150 + (i % 9) * 50,
                "metodo": if i % 2 == 0 { "pix" } else { "cartao" },
                "paciente": patient,
            })
            .to_string(),
        ),
        "TREATMENT_CREATED" | "TREATMENT_UPDATED" => Some(
            json!({
                "treatment_id": format!("t-{}", i % 25),
                "procedimentos": ["limpeza", "restauracao", "clareamento"],
                "observacoes": "Paciente relatou sensibilidade leve após a última sessão; reavaliar em 30 dias.",
            })
            .to_string(),
        ),
        "USER_LOGIN" if i % 3 == 0 => Some("null".to_string()),
        "USER_LOGIN" => None,
        "SYSTEM_BACKUP" => Some("Backup diário concluído".to_string()),
        _ => Some(json!({ "ref": i }).to_string()),
    }
}

/// Audit log entries spread over roughly the last 80 days before `now`
pub fn audit_logs(now: DateTime<Utc>) -> Vec<AuditLog> {
    let users = users();
    (0..AUDIT_LOG_COUNT)
        .map(|i| {
            let action = ACTIONS[(i as usize * 7) % ACTIONS.len()];
            let user = if action.starts_with("SYSTEM_") {
                None
            } else {
                Some(users[(i as usize) % users.len()].clone())
            };
            AuditLog {
                id: format!("log-{:04}", i + 1),
                action: action.to_string(),
                details: details_for(action, i),
                timestamp: now - Duration::hours(i * 11) - Duration::minutes((i * 7) % 60),
                user,
            }
        })
        .collect()
}

/// Overdue installments as of `today`
pub fn overdue_installments(today: NaiveDate) -> Vec<OverdueInstallment> {
    (0..OVERDUE_COUNT)
        .map(|i| {
            let mut item = OverdueInstallment {
                id: format!("inst-{:03}", i + 1),
                patient_name: PATIENTS[(i as usize) % PATIENTS.len()].to_string(),
                installment_number: (i % 6 + 1) as u32,
                expected_amount: 180.0 + (i % 5) as f64 * 95.5,
                due_date: today - Duration::days(5 + i * 4),
                is_default: false,
                treatment_id: format!("t-{}", i % 25),
            };
            item.is_default = item.exceeds_default_threshold(today);
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn audit_fixture_shape() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let logs = audit_logs(now);
        assert_eq!(logs.len(), AUDIT_LOG_COUNT as usize);
        assert!(logs.iter().all(|log| log.timestamp <= now));
        assert!(logs
            .iter()
            .filter(|log| log.action.starts_with("SYSTEM_"))
            .all(|log| log.user.is_none()));
    }

    #[test]
    fn overdue_fixture_flags_defaults() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let items = overdue_installments(today);
        assert_eq!(items.len(), OVERDUE_COUNT as usize);
        assert!(items.iter().any(|item| item.is_default));
        assert!(items.iter().any(|item| !item.is_default));
        for item in &items {
            assert_eq!(item.is_default, item.exceeds_default_threshold(today));
        }
    }
}
