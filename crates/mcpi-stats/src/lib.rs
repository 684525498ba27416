//! Block-averaging statistics for Monte Carlo estimates.
//!
//! A Monte Carlo run is split into blocks of equal size, each block producing
//! one scalar estimate. This crate turns that block series into a cumulative
//! curve: the running mean after each block and its running statistical
//! uncertainty.
//!
//! # Modules
//!
//! - [`block`]: The block-averaging estimator and the cumulative curve it produces
//!
//! # Examples
//!
//! ```
//! use mcpi_stats::block::BlockStatistics;
//!
//! let series = [3.12, 3.18, 3.10, 3.15];
//! let curve = BlockStatistics::compute(&series).unwrap();
//!
//! let (estimate, error) = curve.final_estimate();
//! assert!((estimate - 3.1375).abs() < 1e-12);
//! assert!(error > 0.0);
//! assert_eq!(curve.error()[0], 0.0);
//! ```

pub mod block;
