//! CSV rendering for the two output tables

use crate::error::{Result, SimError};
use crate::stats::{Distribution, RawResults};
use std::fmt::Write as _;

/// Render the raw results table: header `steps`, one integer per trial, in
/// trial order.
pub fn raw_csv(results: &RawResults) -> String {
    let mut out = String::with_capacity(6 + results.len() * 8);
    out.push_str("steps\n");
    for steps in results {
        let _ = writeln!(out, "{steps}");
    }
    out
}

/// Render the distribution table: header `steps,probability,cumulative`, one
/// row per distinct observed step count, ascending.
pub fn distribution_csv(dist: &Distribution) -> String {
    let mut out = String::with_capacity(28 + dist.entries.len() * 32);
    out.push_str("steps,probability,cumulative\n");
    for entry in &dist.entries {
        let _ = writeln!(
            out,
            "{},{},{}",
            entry.steps, entry.probability, entry.cumulative
        );
    }
    out
}

/// Parse a raw results table produced by [`raw_csv`], preserving trial order.
pub fn parse_raw_csv(input: &str) -> Result<RawResults> {
    let mut lines = input.lines().enumerate();

    match lines.next() {
        Some((_, "steps")) => {}
        Some((_, header)) => {
            return Err(SimError::Csv {
                line: 1,
                message: format!("expected header 'steps', got '{header}'"),
            })
        }
        None => {
            return Err(SimError::Csv {
                line: 1,
                message: "empty input".to_string(),
            })
        }
    }

    let mut results = RawResults::new();
    for (idx, line) in lines {
        if line.is_empty() {
            continue;
        }
        let steps = line.trim().parse::<u64>().map_err(|e| SimError::Csv {
            line: idx + 1,
            message: e.to_string(),
        })?;
        results.push(steps);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Distribution;

    #[test]
    fn raw_csv_round_trips() {
        let raw: RawResults = vec![14, 9, 9, 31, 22, 14, 57];
        let csv = raw_csv(&raw);
        let parsed = parse_raw_csv(&csv).expect("round trip should parse");
        assert_eq!(parsed, raw);
    }

    #[test]
    fn raw_csv_has_header_and_one_row_per_trial() {
        let raw: RawResults = vec![5, 6];
        assert_eq!(raw_csv(&raw), "steps\n5\n6\n");
    }

    #[test]
    fn distribution_csv_lists_entries_ascending() {
        let dist = Distribution::from_results(&vec![4, 2, 2, 4]);
        let csv = distribution_csv(&dist);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("steps,probability,cumulative"));
        assert_eq!(lines.next(), Some("2,0.5,0.5"));
        assert_eq!(lines.next(), Some("4,0.5,1"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn parse_rejects_bad_header_and_bad_rows() {
        assert!(matches!(
            parse_raw_csv("step\n1\n"),
            Err(SimError::Csv { line: 1, .. })
        ));
        assert!(matches!(
            parse_raw_csv("steps\n1\nabc\n"),
            Err(SimError::Csv { line: 3, .. })
        ));
    }
}
