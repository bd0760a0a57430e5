//! Session log and operation statistics.
//!
//! The session log is a display-only audit trail of one evaluation; it is
//! cleared when the next evaluation starts. Statistics are read from the
//! handlers' invocation counters and outlive sessions.

use std::fmt;

/// Ordered, human-readable trace lines of the current evaluation.
#[derive(Debug, Default)]
pub struct SessionLog {
    lines: Vec<String>,
    mirror_to_tracing: bool,
}

impl SessionLog {
    /// Create a log; when `mirror_to_tracing` is set every line is also
    /// emitted as a `debug` event.
    pub fn new(mirror_to_tracing: bool) -> Self {
        SessionLog {
            lines: Vec::new(),
            mirror_to_tracing,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.mirror_to_tracing {
            tracing::debug!(target: "calc_eval::session", "{line}");
        }
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Snapshot of per-operation invocation counts, in registry order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statistics {
    entries: Vec<(&'static str, u64)>,
}

impl Statistics {
    pub(crate) fn new(entries: Vec<(&'static str, u64)>) -> Self {
        Statistics { entries }
    }

    /// Count for an operation name (`"addition"`, `"power"`, ...).
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const RULE_WIDTH: usize = 50;

/// Renders the statistics panel: one row per operation with its share of
/// the total as a bar (one block per 2%).
impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "═".repeat(RULE_WIDTH);
        let total = self.total();
        writeln!(f, "{rule}")?;
        writeln!(f, "  OPERATION STATISTICS")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        for (name, count) in self.iter() {
            let percentage = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "percentage is within 0..=100"
            )]
            let bar = "█".repeat((percentage / 2.0) as usize);
            writeln!(f, "  {name:20} : {count:3} [{bar}] {percentage:.1}%")?;
        }
        writeln!(f)?;
        writeln!(f, "  {:20} : {total:3}", "TOTAL")?;
        write!(f, "{rule}")
    }
}

/// Format a result for display: six decimals with trailing zeros (and a
/// trailing point) removed.
pub fn format_value(value: f64) -> String {
    let fixed = format!("{value:.6}");
    if !value.is_finite() {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests;
