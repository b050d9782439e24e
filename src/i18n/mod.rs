//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.
//! Translations may carry `{name}` placeholders, filled by `interpolate`.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Portuguese (Brazil)
    PtBR,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::PtBR => "Português",
        }
    }

    /// Language code stored in the config file
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::PtBR => "pt",
        }
    }

    /// Parse a language tag such as `pt`, `pt-BR` or `en_US`
    pub fn from_code(code: &str) -> Self {
        if code.trim().to_ascii_lowercase().starts_with("pt") {
            Locale::PtBR
        } else {
            Locale::EnUS
        }
    }

    /// The other supported locale
    pub fn toggled(&self) -> Self {
        match self {
            Locale::EnUS => Locale::PtBR,
            Locale::PtBR => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, pt))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("EasyCore Admin", "EasyCore Admin"));

    // Navigation
    map.insert("nav-audit-logs", ("Audit Logs", "Logs de Auditoria"));
    map.insert("nav-overdue", ("Overdue Installments", "Parcelas em Atraso"));

    // Actions
    map.insert("action-refresh", ("Refresh", "Atualizar"));
    map.insert("action-close", ("Close", "Fechar"));

    // Table
    map.insert("table-no-data", ("No records found.", "Nenhum registro encontrado."));
    map.insert("table-loading", ("Loading data...", "Carregando dados..."));
    map.insert("table-previous", ("Previous", "Anterior"));
    map.insert("table-next", ("Next", "Próximo"));
    map.insert("table-summary", ("Showing {shown} of {total} records", "Mostrando {shown} de {total} registros"));
    map.insert("table-summary-page", (" (Page {page} of {pages})", " (Página {page} de {pages})"));
    map.insert("table-position", ("{page} / {pages}", "{page} / {pages}"));

    // Audit logs page
    map.insert("audit-subtitle", (
        "Immutable history of actions performed in the system (admin only).",
        "Histórico imutável de ações realizadas no sistema (Admin only).",
    ));
    map.insert("audit-security-note", (
        "Security note: these records are immutable and support data-protection compliance. Any change or improper access is recorded automatically.",
        "Nota de Segurança: Estes registros são imutáveis e servem para conformidade com normas de segurança de dados. Qualquer alteração ou acesso indevido é registrado automaticamente.",
    ));
    map.insert("audit-period", ("Period", "Período"));
    map.insert("audit-period-1", ("Today", "Hoje"));
    map.insert("audit-period-7", ("Last 7 days", "Últimos 7 dias"));
    map.insert("audit-period-30", ("Last 30 days", "Últimos 30 dias"));
    map.insert("audit-period-90", ("Last 90 days", "Últimos 90 dias"));
    map.insert("audit-action", ("Action type", "Tipo de Ação"));
    map.insert("audit-action-all", ("All actions", "Todas as ações"));
    map.insert("audit-action-user", ("Users", "Usuários"));
    map.insert("audit-action-patient", ("Patients", "Pacientes"));
    map.insert("audit-action-payment", ("Payments", "Pagamentos"));
    map.insert("audit-action-treatment", ("Treatments", "Tratamentos"));
    map.insert("audit-load-error", ("Failed to load logs:", "Erro ao carregar logs:"));
    map.insert("audit-details-title", ("Log details", "Detalhes do log"));
    map.insert("audit-system-user", ("System", "Sistema"));
    map.insert("audit-system-role", ("system", "sistema"));

    // Overdue installments page
    map.insert("overdue-subtitle", (
        "Complete list of pending defaults.",
        "Listagem completa de inadimplência pendente.",
    ));
    map.insert("overdue-note", (
        "Note: these installments are updated automatically based on the server date.",
        "Nota: Estas parcelas são atualizadas automaticamente com base na data do servidor.",
    ));
    map.insert("overdue-load-error", ("Failed to load installments:", "Erro ao carregar parcelas:"));
    map.insert("overdue-status-default", ("Default registered (>60d)", "Calote Registrado (>60d)"));
    map.insert("overdue-status-late", ("Overdue", "Em Atraso"));

    // Table columns
    map.insert("col-timestamp", ("Date/Time", "Data/Hora"));
    map.insert("col-user", ("User", "Usuário"));
    map.insert("col-action", ("Action", "Ação"));
    map.insert("col-details", ("Details", "Detalhes"));
    map.insert("col-patient", ("Patient", "Paciente"));
    map.insert("col-installment", ("Installment", "Parcela"));
    map.insert("col-amount", ("Amount", "Valor"));
    map.insert("col-due-date", ("Due date", "Vencimento"));
    map.insert("col-status", ("Status", "Status"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, pt)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::PtBR => SharedString::from(pt),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Replace `{name}` placeholders in `template`. Unknown placeholders are kept.
pub fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_known_and_unknown_keys() {
        assert_eq!(t(Locale::EnUS, "table-next").as_ref(), "Next");
        assert_eq!(t(Locale::PtBR, "table-next").as_ref(), "Próximo");
        assert_eq!(t(Locale::PtBR, "no-such-key").as_ref(), "no-such-key");
    }

    #[test]
    fn placeholders_are_filled() {
        let text = interpolate(
            &t(Locale::PtBR, "table-summary"),
            &[("shown", "3".to_string()), ("total", "43".to_string())],
        );
        assert_eq!(text, "Mostrando 3 de 43 registros");
    }

    #[test]
    fn unknown_placeholders_are_kept() {
        assert_eq!(interpolate("{a} and {b}", &[("a", "x".to_string())]), "x and {b}");
    }

    #[test]
    fn locale_codes() {
        assert_eq!(Locale::from_code("pt-BR"), Locale::PtBR);
        assert_eq!(Locale::from_code("PT"), Locale::PtBR);
        assert_eq!(Locale::from_code("en_US"), Locale::EnUS);
        assert_eq!(Locale::from_code(""), Locale::EnUS);
        assert_eq!(Locale::PtBR.toggled().code(), "en");
    }
}
