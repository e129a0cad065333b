//! Walk simulator: one random-walk trial on the block ring

use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use rand::Rng;

/// Run a single trial to completion and return the number of steps taken.
///
/// The token starts on block 0 and each step advances by the sum of
/// `dice_count` uniform rolls in `[1, faces_per_die]`, modulo `block_count`.
/// The trial ends once every block has been visited at least once.
///
/// Note: the starting block is not marked visited before the first move. The
/// walk has to land on block 0 again for it to count, which shifts the step
/// distribution relative to a pre-visited start. This matches the original
/// behavior and is pinned by a test; do not "fix" it without revisiting the
/// recorded distributions.
///
/// A trial that takes more than `config.step_ceiling` steps aborts with
/// [`SimError::Timeout`]. Configurations where every possible roll is a
/// multiple of `block_count` keep the token pinned in place and would
/// otherwise never return.
pub fn run_trial(config: &SimulationConfig, rng: &mut impl Rng) -> Result<u64> {
    let blocks = config.block_count as usize;
    let mut visited = vec![false; blocks];
    let mut visited_count: usize = 0;
    let mut position: usize = 0;
    let mut steps: u64 = 0;

    while visited_count < blocks {
        if steps >= config.step_ceiling {
            return Err(SimError::Timeout {
                steps,
                ceiling: config.step_ceiling,
            });
        }

        let mut roll: usize = 0;
        for _ in 0..config.dice_count {
            roll += rng.gen_range(1..=config.faces_per_die) as usize;
        }

        position = (position + roll) % blocks;
        if !visited[position] {
            visited[position] = true;
            visited_count += 1;
        }
        steps += 1;
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn trial_takes_at_least_one_step() {
        let config = SimulationConfig {
            block_count: 2,
            faces_per_die: 2,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let steps = run_trial(&config, &mut rng).expect("trial should terminate");
            assert!(steps >= 1);
        }
    }

    #[test]
    fn seeded_trial_is_reproducible() {
        let config = SimulationConfig::default();
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        let first = run_trial(&config, &mut a).unwrap();
        let second = run_trial(&config, &mut b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn start_block_is_not_pre_visited() {
        // With one 2-faced die on a 2-block ring, coverage needs both block 1
        // and block 0 landed on. Were block 0 pre-visited, a first roll of 1
        // would finish the trial in a single step; since it is not, a trial
        // can never finish in one step (the first landing covers only one of
        // the two blocks).
        let config = SimulationConfig {
            block_count: 2,
            dice_count: 1,
            faces_per_die: 2,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..500 {
            let steps = run_trial(&config, &mut rng).unwrap();
            assert!(steps >= 2, "one step cannot cover both blocks, got {steps}");
        }
    }

    #[test]
    fn exceeding_step_ceiling_reports_timeout() {
        // A ring far too large to cover in 5 steps exercises the timeout
        // path deterministically.
        let config = SimulationConfig {
            block_count: 1000,
            trial_count: 1,
            step_ceiling: 5,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(3);
        match run_trial(&config, &mut rng) {
            Err(SimError::Timeout { steps, ceiling }) => {
                assert_eq!(steps, 5);
                assert_eq!(ceiling, 5);
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
