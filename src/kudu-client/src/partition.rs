#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashPartition {
    pub columns: Vec<String>,
    pub num_buckets: u32,
}

/// Partitioning spec handed to table creation.
///
/// Only hash partitioning is modeled; range partitioning is not part of
/// this client surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitioning {
    hash_partitions: Vec<HashPartition>,
}

impl Partitioning {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hash_partitions(mut self, columns: Vec<String>, num_buckets: u32) -> Self {
        self.hash_partitions.push(HashPartition {
            columns,
            num_buckets,
        });
        self
    }

    pub fn hash_partitions(&self) -> &[HashPartition] {
        &self.hash_partitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_hash_partitions() {
        let partitioning = Partitioning::new()
            .add_hash_partitions(vec!["a".to_string()], 2)
            .add_hash_partitions(vec!["b".to_string(), "c".to_string()], 4);

        assert_eq!(partitioning.hash_partitions().len(), 2);
        assert_eq!(partitioning.hash_partitions()[0].num_buckets, 2);
        assert_eq!(
            partitioning.hash_partitions()[1].columns,
            ["b".to_string(), "c".to_string()]
        );
    }
}
