//! Schedule expressions for the background job runner.
//!
//! A [`Schedule`] is parsed from a short textual expression and answers
//! "when is the next run due, given the last one?". The runner persists
//! the last-run timestamp per job and polls; a job fires once `now` passes
//! the computed due time, so two overlapping runs of the same entry are
//! never started.
//!
//! Supported expressions: `every 30s`, `every 5m`, `every 2h`, `hourly`,
//! `daily`.

use chrono::Duration;

use crate::types::Timestamp;

/// A parsed schedule expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    interval: Duration,
}

/// Error produced when a schedule expression cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("Invalid schedule expression '{0}'")]
pub struct ParseScheduleError(String);

impl Schedule {
    /// Fixed-interval schedule.
    pub fn every(interval: Duration) -> Self {
        Self { interval }
    }

    /// The interval between runs.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The next due time after a completed run at `last_run`.
    pub fn next_after(&self, last_run: Timestamp) -> Timestamp {
        last_run + self.interval
    }

    /// Whether a run is due at `now`. A job that has never run is due
    /// immediately.
    pub fn is_due(&self, last_run: Option<Timestamp>, now: Timestamp) -> bool {
        match last_run {
            None => true,
            Some(last) => now >= self.next_after(last),
        }
    }
}

impl std::str::FromStr for Schedule {
    type Err = ParseScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expr = s.trim().to_ascii_lowercase();
        match expr.as_str() {
            "hourly" => return Ok(Self::every(Duration::hours(1))),
            "daily" => return Ok(Self::every(Duration::days(1))),
            _ => {}
        }

        let spec = expr
            .strip_prefix("every ")
            .ok_or_else(|| ParseScheduleError(s.to_string()))?
            .trim();
        let (digits, unit) = spec.split_at(spec.len().saturating_sub(1));
        let count: i64 = digits
            .parse()
            .map_err(|_| ParseScheduleError(s.to_string()))?;
        if count <= 0 {
            return Err(ParseScheduleError(s.to_string()));
        }
        let interval = match unit {
            "s" => Duration::seconds(count),
            "m" => Duration::minutes(count),
            "h" => Duration::hours(count),
            _ => return Err(ParseScheduleError(s.to_string())),
        };
        Ok(Self::every(interval))
    }
}
