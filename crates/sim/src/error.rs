use thiserror::Error;

/// Validation failures for caller-supplied parameters.
///
/// The simulator has no external resources, so every error here is a local
/// input problem that should abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid action ordinal {0}: expected 0 (Allow), 1 (Alert), 2 (Block) or 3 (Isolate)")]
    InvalidAction(i64),
    #[error("invalid cloud provider ordinal {0}: expected 0 (AWS), 1 (Azure) or 2 (GCP)")]
    InvalidCloud(i64),
    #[error("invalid step budget {0}: step count must be non-negative")]
    InvalidStepBudget(i64),
    #[error("invalid action count {0}: must be between 1 and {max}", max = crate::Action::COUNT)]
    InvalidActionCount(usize),
    #[error("an ensemble needs at least one agent")]
    EmptyEnsemble,
}
