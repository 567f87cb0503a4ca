use sim::State;
use std::io::{self, Write};

use crate::stats::RunStatistics;

pub fn write_initial_state<W: Write>(out: &mut W, state: &State) -> io::Result<()> {
    writeln!(out, "Initial State: {:?}", state.to_array())
}

/// Writes the end-of-run summary: accuracy, per-cloud traffic and the
/// executive counts.
pub fn write_summary<W: Write>(out: &mut W, stats: &RunStatistics) -> io::Result<()> {
    writeln!(out, "\nSystem Accuracy: {:.2}%", stats.accuracy())?;

    writeln!(out, "\nMulti-Cloud Traffic Summary:")?;
    for (cloud, counts) in stats.clouds() {
        writeln!(out, "{cloud} -> Total: {} | Attacks: {}", counts.total, counts.attacks)?;
    }

    writeln!(
        out,
        "\nExecutive Summary -> Total: {} | Normal: {} | Threats: {} | Critical: {}",
        stats.steps(),
        stats.normal(),
        stats.threats(),
        stats.critical()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_is_well_defined() {
        let mut out = Vec::new();
        write_summary(&mut out, &RunStatistics::new()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("System Accuracy: 0.00%"));
        assert!(text.contains("AWS -> Total: 0 | Attacks: 0"));
        assert!(text.contains("Azure -> Total: 0 | Attacks: 0"));
        assert!(text.contains("GCP -> Total: 0 | Attacks: 0"));
    }

    #[test]
    fn initial_state_lists_all_features() {
        let mut out = Vec::new();
        write_initial_state(&mut out, &State::new(0.5, 0.25, 0.125, 1.0)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Initial State: [0.5, 0.25, 0.125, 1.0]\n");
    }
}
