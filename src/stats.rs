//! Empirical distribution and summary statistics

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Step counts from all trials, in trial order.
pub type RawResults = Vec<u64>;

/// One row of the distribution table: the fraction of trials that finished in
/// exactly `steps` steps, and the fraction that finished in `steps` or fewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub steps: u64,
    pub probability: f64,
    pub cumulative: f64,
}

/// Summary statistics over the raw step counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub trials: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: u64,
    pub max: u64,
}

/// Empirical PMF and CDF over observed step counts, ascending by `steps`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Distribution {
    pub entries: Vec<DistributionEntry>,
    pub summary: SummaryStats,
}

impl Distribution {
    /// Reduce raw trial outcomes into the distribution table.
    ///
    /// Groups by distinct step count, divides each group's size by the trial
    /// count, and accumulates the prefix sum for the cumulative column. The
    /// BTreeMap grouping gives ascending order directly.
    pub fn from_results(results: &RawResults) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let n = results.len() as f64;

        let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
        for &steps in results {
            *counts.entry(steps).or_insert(0) += 1;
        }

        let mut cumulative = 0.0;
        let entries: Vec<DistributionEntry> = counts
            .iter()
            .map(|(&steps, &count)| {
                let probability = count as f64 / n;
                cumulative += probability;
                DistributionEntry {
                    steps,
                    probability,
                    cumulative,
                }
            })
            .collect();

        let mean = results.iter().sum::<u64>() as f64 / n;
        let variance = results
            .iter()
            .map(|&s| (s as f64 - mean).powi(2))
            .sum::<f64>()
            / n;

        Self {
            entries,
            summary: SummaryStats {
                trials: results.len(),
                mean,
                std_dev: variance.sqrt(),
                min: *results.iter().min().unwrap_or(&0),
                max: *results.iter().max().unwrap_or(&0),
            },
        }
    }
}
