//! Per-run search statistics.

use std::time::Duration;

/// Counters accumulated over a single search run.
///
/// The caller owns the value and passes it by mutable reference; the engine
/// only ever adds to it. Create a fresh value per run, or call
/// [`reset`](AlgorithmStats::reset) between runs — counters are not zeroed
/// by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmStats {
    /// Search-loop iterations, including stale frontier pops.
    pub iterations: usize,
    /// Nodes expanded. Stale pops are excluded, so the number of stale
    /// pops is always `iterations - nodes_explored`.
    pub nodes_explored: usize,
    /// Frontier size at the most recent iteration.
    pub nodes_in_open: usize,
    /// Largest frontier size seen during the run. Non-decreasing while a
    /// run is in progress.
    pub max_open_size: usize,
    /// Cell count of the returned path; 0 when no path was found.
    pub path_length: usize,
    /// Total cost of the returned path; 0 when no path was found.
    pub path_cost: f64,
    /// Wall time of the run.
    pub execution_time: Duration,
}

impl AlgorithmStats {
    /// A zeroed stats record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter, making the value ready for another run.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_zeroes_everything() {
        let mut stats = AlgorithmStats {
            iterations: 10,
            nodes_explored: 7,
            nodes_in_open: 3,
            max_open_size: 5,
            path_length: 4,
            path_cost: 3.5,
            execution_time: Duration::from_millis(12),
        };
        stats.reset();
        assert_eq!(stats, AlgorithmStats::new());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let stats = AlgorithmStats {
            iterations: 42,
            nodes_explored: 40,
            nodes_in_open: 6,
            max_open_size: 9,
            path_length: 12,
            path_cost: 13.07,
            execution_time: Duration::from_micros(350),
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: AlgorithmStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
