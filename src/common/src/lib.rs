pub mod config;
pub mod cursor;
pub mod dimensions;
pub mod suite;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::Configuration;
pub use cursor::{QueryError, SqlCursor};
pub use dimensions::{TestDimension, TestMatrix, TestVector};
pub use suite::QueryTestSuite;
