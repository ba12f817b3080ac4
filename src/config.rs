use anyhow::Error;
use confique::Config;
use std::sync::{Arc, Mutex, OnceLock};

#[derive(Debug, Config)]
pub struct ReportConfig {
    /// Label of the synthetic summary column appended after the intervals
    #[config(env = "CONNECT_REPORT_TOTAL_LABEL", default = "Total")]
    pub total_label: String,

    /// Decimal places used when rendering percentage and fixed-point rows
    #[config(env = "CONNECT_REPORT_DECIMALS", default = 2)]
    pub decimals: usize,
}

impl ReportConfig {
    pub fn load() -> Result<ReportConfig, Error> {
        let c = ReportConfig::builder().env().file("settings.toml").load()?;

        Ok(c)
    }
}

static REPORT_CONFIG: OnceLock<Arc<ReportConfig>> = OnceLock::new();

pub fn get() -> Result<Arc<ReportConfig>, Error> {
    REPORT_CONFIG.get().cloned().ok_or_else(|| {
        Error::msg(
            "Configuration not loaded. Please call load_configuration() before using the configuration",
        )
    })
}

pub fn load_configuration() -> Result<(), Error> {
    // Check if the configuration has already been loaded
    if REPORT_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = ReportConfig::load()?;
    REPORT_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}

// Used by integration tests - must be always available for test compilation
#[allow(dead_code)] // Used by integration tests, not visible in cargo check
static TEST_CONFIG_INIT: Mutex<()> = Mutex::new(());

/// Test-only function to ensure configuration is loaded exactly once per test run
/// Available for both unit tests and integration tests
#[allow(dead_code)] // Used by integration tests, not visible in cargo check
pub fn load_configuration_for_tests() -> Result<(), Error> {
    let _guard = TEST_CONFIG_INIT.lock().unwrap();

    // If config is already loaded, return success
    if REPORT_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = ReportConfig::load()?;
    REPORT_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let config = ReportConfig::load().unwrap();

        assert_eq!(config.total_label, "Total");
        assert_eq!(config.decimals, 2);

        temp_env::with_var("CONNECT_REPORT_TOTAL_LABEL", Some("Summary"), || {
            let config = ReportConfig::load().unwrap();
            assert_eq!(config.total_label, "Summary");
        });
    }
}
