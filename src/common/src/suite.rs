use crate::dimensions::{TestMatrix, create_batch_size_dimension, create_table_format_dimension};

/// Hooks every query-engine test suite provides to the driver.
///
/// The driver calls [`add_test_dimensions`](Self::add_test_dimensions) once
/// per suite to populate the matrix; suites that need a narrower or wider
/// matrix override it, usually calling [`add_base_dimensions`] first and
/// then adjusting individual axes.
pub trait QueryTestSuite {
    /// Workload this suite runs under.
    fn workload(&self) -> &'static str;

    /// Whether the driver should create (and later drop) the suite database
    /// before running any test.
    fn auto_create_db(&self) -> bool {
        false
    }

    fn add_test_dimensions(&self, matrix: &mut TestMatrix) {
        add_base_dimensions(self.workload(), matrix);
    }
}

/// Axes the base driver registers for every suite.
pub fn add_base_dimensions(workload: &str, matrix: &mut TestMatrix) {
    matrix.add_dimension(create_table_format_dimension(workload));
    matrix.add_dimension(create_batch_size_dimension(&[0]));
}
