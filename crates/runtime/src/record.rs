use anyhow::{Context, Result};
use serde::Serialize;
use sim::{Action, CloudProvider, Severity, State, StepOutcome};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One observation emitted per drive-loop step.
///
/// This is the row shape the monitoring dashboard renders from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step: u64,
    pub time: String,
    pub cloud: CloudProvider,
    #[serde(flatten)]
    pub state: State,
    pub action: Action,
    pub decision: &'static str,
    pub severity: Severity,
    pub reward: i32,
    pub is_attack: bool,
}

impl StepRecord {
    /// Builds the record for step `step` (1-based) taken on `state`.
    #[must_use]
    pub fn new(step: u64, state: State, action: Action, outcome: &StepOutcome) -> Self {
        Self {
            step,
            time: chrono::Local::now().format("%H:%M:%S").to_string(),
            cloud: outcome.info.cloud,
            state,
            action,
            decision: action.label(),
            severity: action.severity(),
            reward: outcome.reward,
            is_attack: outcome.info.is_attack,
        }
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {} | Cloud: {} | Action: {} | Reward: {}",
            self.step,
            self.cloud,
            self.action.ordinal(),
            self.reward
        )
    }
}

/// Appends records as JSON lines.
pub struct RecordWriter<W: Write> {
    out: W,
}

/// Record writer backed by a buffered file.
pub type FileRecordWriter = RecordWriter<BufWriter<File>>;

impl FileRecordWriter {
    /// Creates (or truncates) `path` for writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create record file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    pub fn write(&mut self, record: &StepRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, record).context("failed to serialize step record")?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if flushing the underlying writer fails.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("failed to flush record stream")?;
        Ok(self.out)
    }
}
