//! Unit test modules.

mod achievement_test;
mod aggregator_test;
mod level_curve_test;
mod stats_test;
