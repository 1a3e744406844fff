//! Integration test modules.

mod store_test;
