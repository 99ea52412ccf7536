//! Test fixtures for integration testing
//!
//! This module provides the Kudu suite fixture: the support gate, the
//! per-suite database namespace, scoped ephemeral tables on the storage
//! side, and the scoped drop helper on the SQL side.

mod kudu_suite;
mod sql_table;

pub use kudu_suite::{FixtureError, KUDU_IS_SUPPORTED, KuduTestSuite, SuiteSetup, TempTableSpec};
pub use sql_table::with_table_dropped_after;
