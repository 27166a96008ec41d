use std::fmt;

/// The steps of one cycle, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleStep {
    Fetch,
    SaveRaw,
    Transform,
    SaveProcessed,
    LoadDb,
}

impl CycleStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleStep::Fetch => "fetch",
            CycleStep::SaveRaw => "raw_save",
            CycleStep::Transform => "transform",
            CycleStep::SaveProcessed => "processed_save",
            CycleStep::LoadDb => "db_load",
        }
    }
}

/// Result of a single step.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum StepResult {
    Succeeded,
    /// The step ran and failed; carries the cause.
    Failed(String),
    /// The step did not run because the fetch failed.
    #[default]
    Skipped,
}

impl StepResult {
    pub fn from_result<T, E: fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => StepResult::Succeeded,
            Err(e) => StepResult::Failed(e.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StepResult::Failed(_))
    }
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepResult::Succeeded => write!(f, "ok"),
            StepResult::Failed(_) => write!(f, "failed"),
            StepResult::Skipped => write!(f, "skipped"),
        }
    }
}

/// Which steps of one cycle succeeded or failed. Logged once at cycle end,
/// never stored.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CycleOutcome {
    pub fetch: StepResult,
    pub save_raw: StepResult,
    pub transform: StepResult,
    pub save_processed: StepResult,
    pub load_db: StepResult,
    /// Number of records transformed
    pub records: usize,
}

impl CycleOutcome {
    pub fn steps(&self) -> [(CycleStep, &StepResult); 5] {
        [
            (CycleStep::Fetch, &self.fetch),
            (CycleStep::SaveRaw, &self.save_raw),
            (CycleStep::Transform, &self.transform),
            (CycleStep::SaveProcessed, &self.save_processed),
            (CycleStep::LoadDb, &self.load_db),
        ]
    }

    pub fn failed_steps(&self) -> Vec<CycleStep> {
        self.steps()
            .into_iter()
            .filter(|(_, result)| result.is_failed())
            .map(|(step, _)| step)
            .collect()
    }

    /// True when every step ran and succeeded.
    pub fn is_success(&self) -> bool {
        self.steps()
            .iter()
            .all(|(_, result)| **result == StepResult::Succeeded)
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps = self
            .steps()
            .iter()
            .map(|(step, result)| format!("{}={}", step.as_str(), result))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_outcome_is_all_skipped() {
        let outcome = CycleOutcome::default();
        assert!(outcome.steps().iter().all(|(_, r)| **r == StepResult::Skipped));
        assert!(!outcome.is_success());
        assert!(outcome.failed_steps().is_empty());
    }

    #[test]
    fn test_failed_steps_in_order() {
        let outcome = CycleOutcome {
            fetch: StepResult::Succeeded,
            save_raw: StepResult::Failed("disk full".to_string()),
            transform: StepResult::Succeeded,
            save_processed: StepResult::Succeeded,
            load_db: StepResult::Failed("refused".to_string()),
            records: 2,
        };
        assert_eq!(
            outcome.failed_steps(),
            vec![CycleStep::SaveRaw, CycleStep::LoadDb]
        );
        assert!(!outcome.is_success());
        assert_eq!(
            outcome.to_string(),
            "fetch=ok raw_save=failed transform=ok processed_save=ok db_load=failed"
        );
    }

    #[test]
    fn test_from_result() {
        let ok: Result<(), String> = Ok(());
        let err: Result<(), String> = Err("boom".to_string());
        assert_eq!(StepResult::from_result(&ok), StepResult::Succeeded);
        assert_eq!(
            StepResult::from_result(&err),
            StepResult::Failed("boom".to_string())
        );
    }
}
