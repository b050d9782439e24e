//! OverdueState - Overdue Installments Page State

use crate::domain::installment::OverdueInstallment;
use crate::error::Result;

/// State for the overdue installments page
#[derive(Debug, Clone, Default)]
pub struct OverdueState {
    /// Every overdue installment; the table pages them locally
    pub rows: Vec<OverdueInstallment>,
    pub loading: bool,
    pub error: Option<String>,
    /// Whether a fetch has completed at least once
    pub loaded: bool,
    request_seq: u64,
}

impl OverdueState {
    /// Mark a fetch as started and return its sequence number
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a fetch result; stale results are dropped and return `false`
    pub fn finish_fetch(&mut self, seq: u64, result: Result<Vec<OverdueInstallment>>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        self.loaded = true;
        match result {
            Ok(rows) => self.rows = rows,
            Err(err) => {
                self.rows.clear();
                self.error = Some(err.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn fetch_lifecycle() {
        let mut state = OverdueState::default();
        let stale = state.begin_fetch();
        let seq = state.begin_fetch();
        assert!(!state.finish_fetch(stale, Ok(Vec::new())));
        assert!(!state.loaded);

        let err = Error::Source {
            message: "offline".to_string(),
        };
        assert!(state.finish_fetch(seq, Err(err)));
        assert!(state.loaded);
        assert!(!state.loading);
        assert!(state.error.is_some());
    }
}
