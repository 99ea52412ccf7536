use anyhow::Result;
use common::Configuration;
use common::dimensions::TestMatrix;
use common::suite::QueryTestSuite;
use kudu_client::create_client;
use tests_integration::{KuduTestSuite, SuiteSetup};

/// Preflight for the integration-test environment: load the configuration,
/// evaluate the support gate, and report what the suites would run with.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = Configuration::load()?;
    log::info!("kudu dsn: {}", config.kudu.dsn);

    match KuduTestSuite::setup()? {
        SuiteSetup::Skipped { reason } => {
            println!("suite skipped: {reason}");
        }
        SuiteSetup::Ready(suite) => {
            let client = create_client(&config.kudu.dsn)?;
            let tables = client.list_tables().await?;
            log::info!("client ready, {} tables visible", tables.len());

            let mut matrix = TestMatrix::new();
            suite.add_test_dimensions(&mut matrix);

            println!("workload: {}", suite.workload());
            println!("suite database: {}", suite.db_name());
            println!("test vectors: {}", matrix.vectors().len());
        }
    }

    Ok(())
}
