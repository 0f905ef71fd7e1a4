use super::{measure_strategy, Timing, Workload};
use crate::error::{Error, Result};
use crate::store::Strategy;
use serde::{Deserialize, Serialize};

/// Inclusive range of synthetic text lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            start: 1000,
            end: 10000,
            step: 1000,
        }
    }
}

impl LengthRange {
    pub fn lengths(&self) -> Result<Vec<usize>> {
        if self.step == 0 || self.start > self.end {
            return Err(Error::InvalidRange {
                start: self.start,
                end: self.end,
                step: self.step,
            });
        }
        Ok((self.start..=self.end).step_by(self.step).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Build,
    Check,
}

impl Phase {
    pub fn title(self) -> &'static str {
        match self {
            Phase::Build => "Dictionary Building Time vs. Text Length",
            Phase::Check => "Spell Checking Time vs. Text Length",
        }
    }
}

/// Time series of one strategy, aligned with [`SweepReport::lengths`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub strategy: Strategy,
    pub label: String,
    pub build_secs: Vec<f64>,
    pub check_secs: Vec<f64>,
    pub misspelled: Vec<usize>,
}

impl Series {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            label: strategy.label().to_string(),
            build_secs: Vec::new(),
            check_secs: Vec::new(),
            misspelled: Vec::new(),
        }
    }

    fn push(&mut self, timing: &Timing) {
        self.build_secs.push(timing.build_secs);
        self.check_secs.push(timing.check_secs);
        self.misspelled.push(timing.misspelled);
    }

    pub fn phase(&self, phase: Phase) -> &[f64] {
        match phase {
            Phase::Build => &self.build_secs,
            Phase::Check => &self.check_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub lengths: Vec<usize>,
    pub series: Vec<Series>,
}

impl SweepReport {
    #[cfg(test)]
    pub(crate) fn series(&self, strategy: Strategy) -> Option<&Series> {
        self.series.iter().find(|s| s.strategy == strategy)
    }
}

/// Measure every strategy at every length.
///
/// For each length the strategies run in [`Strategy::ALL`] order, each with
/// a fresh build. `on_sample` is called after every measurement.
pub fn run_sweep<F>(workload: &Workload<'_>, range: &LengthRange, mut on_sample: F) -> Result<SweepReport>
where
    F: FnMut(usize, Strategy, &Timing),
{
    let lengths = range.lengths()?;
    let mut series: Vec<Series> = Strategy::ALL.iter().copied().map(Series::new).collect();

    for &length in &lengths {
        for s in series.iter_mut() {
            let timing = measure_strategy(s.strategy, workload, length)?;
            on_sample(length, s.strategy, &timing);
            s.push(&timing);
        }
    }

    Ok(SweepReport { lengths, series })
}
