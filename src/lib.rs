//! Dice Map Sim - Monte-Carlo simulator for dice-driven coverage of a ring
//!
//! A token moves around a circular map of blocks, advancing each step by the
//! sum of one or more dice. Trials run until every block has been visited at
//! least once; repeated trials yield an empirical distribution of the number
//! of steps to full coverage.

pub mod config;
pub mod error;
pub mod export;
pub mod simulation;
pub mod stats;
pub mod walk;

pub use config::*;
pub use error::*;
pub use export::*;
pub use simulation::*;
pub use stats::*;
pub use walk::*;
