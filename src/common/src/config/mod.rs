use serde::{Deserialize, Serialize};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

/// Connection settings for the Kudu storage service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KuduConfig {
    /// Client DSN. `memory://` selects the in-process client used by tests;
    /// anything else is handed to the client factory as-is.
    pub dsn: String,
}

impl Default for KuduConfig {
    fn default() -> Self {
        Self {
            dsn: String::from("memory://"),
        }
    }
}

/// Settings for the test driver itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestConfig {
    /// Workload whose dimension matrix the suites run under.
    pub workload: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            workload: String::from("functional-query"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Configuration {
    pub kudu: KuduConfig,
    pub test: TestConfig,
}

impl Configuration {
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config = Figment::from(Serialized::defaults(Configuration::default()))
            .merge(Toml::file("kudu-testkit.toml"))
            .merge(Env::prefixed("KUDU_TESTKIT__").split("__"))
            .extract()
            .map_err(Box::new)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_uses_in_memory_kudu() {
        let config = Configuration::default();

        assert_eq!(config.kudu.dsn, "memory://");
        assert_eq!(config.test.workload, "functional-query");
    }

    #[test]
    fn test_env_overrides_kudu_dsn() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("KUDU_TESTKIT__KUDU__DSN", "kudu://localhost:7051");

            let config = Configuration::load().expect("load config");
            assert_eq!(config.kudu.dsn, "kudu://localhost:7051");
            assert_eq!(config.test.workload, "functional-query");

            Ok(())
        });
    }

    #[test]
    fn test_toml_file_overrides_workload() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "kudu-testkit.toml",
                r#"
                [test]
                workload = "targeted-perf"
                "#,
            )?;

            let config = Configuration::load().expect("load config");
            assert_eq!(config.test.workload, "targeted-perf");
            assert_eq!(config.kudu.dsn, "memory://");

            Ok(())
        });
    }
}
