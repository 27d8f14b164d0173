//! Configuration validation.
//!
//! Validates all config fields before an evaluation runs.

use crate::domain::error::EntrygaugeError;
use crate::ports::config_port::ConfigPort;

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    validate_base_path(config)?;
    validate_code(config)?;
    validate_lookback_months(config)?;
    Ok(())
}

pub fn validate_strategy_config(config: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    validate_momentum_period(config)?;
    validate_volatility_period(config)?;
    Ok(())
}

pub fn validate_evaluate_config(config: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    validate_cash_total(config)?;
    Ok(())
}

fn validate_base_path(config: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    match config.get_string("data", "base_path") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(EntrygaugeError::ConfigMissing {
            section: "data".to_string(),
            key: "base_path".to_string(),
        }),
    }
}

fn validate_code(config: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    // The code may also arrive via --code, so a missing key is fine; an
    // explicitly empty one is not.
    match config.get_string("data", "code") {
        Some(s) if s.trim().is_empty() => Err(EntrygaugeError::ConfigInvalid {
            section: "data".to_string(),
            key: "code".to_string(),
            reason: "code must not be empty".to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_lookback_months(config: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    let value = config.get_int("data", "lookback_months", 12);
    if value < 1 {
        return Err(EntrygaugeError::ConfigInvalid {
            section: "data".to_string(),
            key: "lookback_months".to_string(),
            reason: "lookback_months must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_momentum_period(config: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    let value = config.get_int("strategy", "momentum_period", 3);
    if value < 1 {
        return Err(EntrygaugeError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "momentum_period".to_string(),
            reason: "momentum_period must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_volatility_period(config: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    let value = config.get_int("strategy", "volatility_period", 2);
    if value < 2 {
        return Err(EntrygaugeError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "volatility_period".to_string(),
            reason: "volatility_period must be at least 2 (sample stddev needs two returns)"
                .to_string(),
        });
    }
    Ok(())
}

fn validate_cash_total(config: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    let value = config.get_double("evaluate", "cash_total", 100_000.0);
    if value <= 0.0 {
        return Err(EntrygaugeError::ConfigInvalid {
            section: "evaluate".to_string(),
            key: "cash_total".to_string(),
            reason: "cash_total must be positive".to_string(),
        });
    }
    Ok(())
}
