//! Test-parameter axes and the matrix the suites are parameterized over.
//!
//! A [`TestDimension`] is one axis (table format, batch size, ...); the
//! [`TestMatrix`] holds the registered axes and expands them into the
//! cartesian product of [`TestVector`]s the runner iterates.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Text,
    Parquet,
    Avro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionCodec {
    None,
    Snappy,
    Gzip,
}

/// Storage format a test table is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    pub file_format: FileFormat,
    pub compression: CompressionCodec,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DimensionValue {
    TableFormat(TableFormat),
    BatchSize(u32),
}

#[derive(Debug, Clone)]
pub struct TestDimension {
    pub name: &'static str,
    pub values: Vec<DimensionValue>,
}

pub const TABLE_FORMAT_DIMENSION: &str = "table_format";
pub const BATCH_SIZE_DIMENSION: &str = "batch_size";

/// Table-format axis for a workload.
pub fn create_table_format_dimension(workload: &str) -> TestDimension {
    let values = match workload {
        "functional-query" => vec![
            DimensionValue::TableFormat(TableFormat {
                file_format: FileFormat::Text,
                compression: CompressionCodec::None,
            }),
            DimensionValue::TableFormat(TableFormat {
                file_format: FileFormat::Parquet,
                compression: CompressionCodec::Snappy,
            }),
            DimensionValue::TableFormat(TableFormat {
                file_format: FileFormat::Avro,
                compression: CompressionCodec::Gzip,
            }),
        ],
        // Workloads without a curated format list run on uncompressed text.
        _ => vec![DimensionValue::TableFormat(TableFormat {
            file_format: FileFormat::Text,
            compression: CompressionCodec::None,
        })],
    };

    TestDimension {
        name: TABLE_FORMAT_DIMENSION,
        values,
    }
}

/// Table-format axis narrowed to uncompressed text, whatever the workload.
pub fn create_uncompressed_text_dimension(_workload: &str) -> TestDimension {
    TestDimension {
        name: TABLE_FORMAT_DIMENSION,
        values: vec![DimensionValue::TableFormat(TableFormat {
            file_format: FileFormat::Text,
            compression: CompressionCodec::None,
        })],
    }
}

pub fn create_batch_size_dimension(sizes: &[u32]) -> TestDimension {
    TestDimension {
        name: BATCH_SIZE_DIMENSION,
        values: sizes.iter().copied().map(DimensionValue::BatchSize).collect(),
    }
}

/// Registered axes for one suite.
///
/// Adding a dimension whose name is already registered replaces that axis;
/// this is how a suite narrows an axis the base driver contributed.
#[derive(Debug, Clone, Default)]
pub struct TestMatrix {
    dimensions: Vec<TestDimension>,
}

impl TestMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dimension(&mut self, dimension: TestDimension) {
        match self
            .dimensions
            .iter_mut()
            .find(|existing| existing.name == dimension.name)
        {
            Some(existing) => *existing = dimension,
            None => self.dimensions.push(dimension),
        }
    }

    pub fn dimensions(&self) -> &[TestDimension] {
        &self.dimensions
    }

    /// Cartesian product of all registered axes, in registration order.
    pub fn vectors(&self) -> Vec<TestVector> {
        let mut vectors = vec![TestVector { values: Vec::new() }];
        for dimension in &self.dimensions {
            let mut expanded = Vec::with_capacity(vectors.len() * dimension.values.len());
            for vector in &vectors {
                for value in &dimension.values {
                    let mut next = vector.clone();
                    next.values.push((dimension.name, value.clone()));
                    expanded.push(next);
                }
            }
            vectors = expanded;
        }
        vectors
    }
}

/// One combination of dimension values a test runs under.
#[derive(Debug, Clone)]
pub struct TestVector {
    values: Vec<(&'static str, DimensionValue)>,
}

impl TestVector {
    pub fn get(&self, name: &str) -> Option<&DimensionValue> {
        self.values
            .iter()
            .find(|(dimension, _)| *dimension == name)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_dimension_replaces_same_named_axis() {
        let mut matrix = TestMatrix::new();
        matrix.add_dimension(create_table_format_dimension("functional-query"));
        matrix.add_dimension(create_batch_size_dimension(&[0]));
        assert_eq!(matrix.vectors().len(), 3);

        matrix.add_dimension(create_uncompressed_text_dimension("functional-query"));
        assert_eq!(matrix.dimensions().len(), 2);

        let vectors = matrix.vectors();
        assert_eq!(vectors.len(), 1);
        assert_eq!(
            vectors[0].get(TABLE_FORMAT_DIMENSION),
            Some(&DimensionValue::TableFormat(TableFormat {
                file_format: FileFormat::Text,
                compression: CompressionCodec::None,
            }))
        );
    }

    #[test]
    fn test_vectors_are_the_cartesian_product() {
        let mut matrix = TestMatrix::new();
        matrix.add_dimension(create_table_format_dimension("functional-query"));
        matrix.add_dimension(create_batch_size_dimension(&[0, 1024]));

        let vectors = matrix.vectors();
        assert_eq!(vectors.len(), 6);
        for vector in &vectors {
            assert!(vector.get(TABLE_FORMAT_DIMENSION).is_some());
            assert!(vector.get(BATCH_SIZE_DIMENSION).is_some());
            assert!(vector.get("no_such_axis").is_none());
        }
    }

    #[test]
    fn test_unknown_workload_gets_uncompressed_text_only() {
        let dimension = create_table_format_dimension("tpch");
        assert_eq!(dimension.values.len(), 1);
    }
}
