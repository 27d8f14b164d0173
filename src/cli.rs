//! CLI definition and dispatch.

use chrono::{Local, Months, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config_validation::{
    validate_data_config, validate_evaluate_config, validate_strategy_config,
};
use crate::domain::engine::{self, Evaluation};
use crate::domain::error::EntrygaugeError;
use crate::domain::normalize::normalize;
use crate::domain::params::{DEFAULT_MOMENTUM_PERIOD, DEFAULT_VOLATILITY_PERIOD, StrategyParams};
use crate::domain::report::EvaluationReport;
use crate::domain::series::PriceSeries;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

pub const DEFAULT_LOOKBACK_MONTHS: i64 = 12;
pub const DEFAULT_CASH_TOTAL: f64 = 100_000.0;

#[derive(Parser, Debug)]
#[command(
    name = "entrygauge",
    about = "Momentum/volatility cash-allocation advisor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate the allocation recommendation for a symbol
    Evaluate {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        code: Option<String>,
        /// What-if override for the latest price
        #[arg(long)]
        price: Option<f64>,
        /// Cash total to split between investment and reserve
        #[arg(long)]
        cash: Option<f64>,
        /// End of the lookback window (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List symbols available from the data directory
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show stored data range for symbol(s)
    Info {
        #[arg(long)]
        code: Option<String>,
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Evaluate {
            config,
            code,
            price,
            cash,
            as_of,
            json,
        } => run_evaluate(&config, code.as_deref(), price, cash, as_of.as_deref(), json),
        Command::ListSymbols { config } => run_list_symbols(&config),
        Command::Info { code, config } => run_info(code.as_deref(), &config),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = EntrygaugeError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_params(adapter: &dyn ConfigPort) -> StrategyParams {
    StrategyParams {
        momentum_period: adapter.get_int(
            "strategy",
            "momentum_period",
            DEFAULT_MOMENTUM_PERIOD as i64,
        ) as usize,
        volatility_period: adapter.get_int(
            "strategy",
            "volatility_period",
            DEFAULT_VOLATILITY_PERIOD as i64,
        ) as usize,
    }
}

pub fn resolve_code(code_override: Option<&str>, adapter: &dyn ConfigPort) -> Option<String> {
    code_override
        .map(str::to_string)
        .or_else(|| adapter.get_string("data", "code"))
        .filter(|c| !c.trim().is_empty())
}

fn validate_all(adapter: &dyn ConfigPort) -> Result<(), EntrygaugeError> {
    validate_data_config(adapter)?;
    validate_strategy_config(adapter)?;
    validate_evaluate_config(adapter)?;
    Ok(())
}

fn run_evaluate(
    config_path: &PathBuf,
    code_override: Option<&str>,
    price_override: Option<f64>,
    cash_override: Option<f64>,
    as_of: Option<&str>,
    json: bool,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_all(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Resolve code, window, and cash total
    let code = match resolve_code(code_override, &adapter) {
        Some(c) => c,
        None => {
            eprintln!("error: code is required (use --code or set [data] code)");
            return ExitCode::from(2);
        }
    };

    let end_date = match as_of {
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                eprintln!("error: invalid --as-of date (expected YYYY-MM-DD)");
                return ExitCode::from(2);
            }
        },
        None => Local::now().date_naive(),
    };
    let lookback = adapter.get_int("data", "lookback_months", DEFAULT_LOOKBACK_MONTHS);
    let start_date = end_date - Months::new(lookback as u32);

    let cash_total =
        cash_override.unwrap_or_else(|| adapter.get_double("evaluate", "cash_total", DEFAULT_CASH_TOTAL));
    if cash_total <= 0.0 {
        eprintln!("error: cash total must be positive");
        return ExitCode::from(2);
    }

    let params = build_params(&adapter);

    // Stage 3: Data port and report port
    let base_path = PathBuf::from(adapter.get_string("data", "base_path").unwrap_or_default());
    let data_port = CsvAdapter::new(base_path);
    let report_port: Box<dyn ReportPort> = if json {
        Box::new(JsonReportAdapter)
    } else {
        Box::new(TextReportAdapter)
    };

    run_evaluate_pipeline(
        &data_port,
        report_port.as_ref(),
        &params,
        &code,
        (start_date, end_date),
        price_override,
        cash_total,
    )
}

/// Stages 4-6: fetch, normalize, evaluate, render.
pub fn run_evaluate_pipeline(
    data_port: &dyn DataPort,
    report_port: &dyn ReportPort,
    params: &StrategyParams,
    code: &str,
    window: (NaiveDate, NaiveDate),
    price_override: Option<f64>,
    cash_total: f64,
) -> ExitCode {
    eprintln!("Evaluating {} from {} to {}", code, window.0, window.1);

    let (series, evaluation) =
        match evaluate_code(data_port, params, code, window, price_override) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

    eprintln!(
        "  {} usable months, {} eligible",
        series.len(),
        evaluation.rows.len()
    );
    if let Some(price) = price_override {
        eprintln!("  latest price overridden to {price:.2}");
    }

    let report = EvaluationReport::build(&series, &evaluation, cash_total);
    match report_port.render(&report) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Fetch, normalize, and evaluate one symbol: the full pipeline behind a
/// single recommendation.
pub fn evaluate_code(
    data_port: &dyn DataPort,
    params: &StrategyParams,
    code: &str,
    window: (NaiveDate, NaiveDate),
    price_override: Option<f64>,
) -> Result<(PriceSeries, Evaluation), EntrygaugeError> {
    let observations = data_port.fetch_monthly_closes(code, window.0, window.1)?;
    if observations.is_empty() {
        return Err(EntrygaugeError::NoData {
            code: code.to_string(),
        });
    }

    let series = normalize(code, &observations, price_override)?;
    let evaluation = engine::evaluate(&series, params)?;
    Ok((series, evaluation))
}

fn run_list_symbols(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_data_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let base_path = PathBuf::from(adapter.get_string("data", "base_path").unwrap_or_default());
    let data_port = CsvAdapter::new(base_path);

    let symbols = match data_port.list_symbols() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if symbols.is_empty() {
        eprintln!("No symbols found");
    } else {
        for symbol in &symbols {
            println!("{}", symbol);
        }
        eprintln!("{} symbols found", symbols.len());
    }
    ExitCode::SUCCESS
}

fn run_info(code_override: Option<&str>, config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_data_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let base_path = PathBuf::from(adapter.get_string("data", "base_path").unwrap_or_default());
    let data_port = CsvAdapter::new(base_path);

    let codes: Vec<String> = match resolve_code(code_override, &adapter) {
        Some(c) => vec![c],
        None => match data_port.list_symbols() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
    };

    if codes.is_empty() {
        eprintln!("No symbols found");
        return ExitCode::SUCCESS;
    }

    for code in &codes {
        match data_port.get_data_range(code) {
            Ok(Some((first, last, months))) => {
                println!("{}: {} to {} ({} months)", code, first, last, months);
            }
            Ok(None) => {
                println!("{}: no data", code);
            }
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_all(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let params = build_params(&adapter);
    eprintln!("Config validated successfully");
    eprintln!("\nStrategy parameters:");
    eprintln!("  momentum_period:   {}", params.momentum_period);
    eprintln!("  volatility_period: {}", params.volatility_period);
    eprintln!("  minimum history:   {} months", params.min_series_len());
    ExitCode::SUCCESS
}
