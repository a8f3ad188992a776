use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::cli::Cli;
use crate::core::{UsageBreakdown, UsageCounters, compute_breakdown};
use crate::error::AppError;
use crate::output::{
    BreakdownTableOptions, NumberFormat, output_breakdown_json, print_breakdown_table,
};
use crate::pricing::{ModelCatalog, PricingTable, load_pricing_file};
use crate::utils::{debug_log, set_debug};

const STDIN_LABEL: &str = "<stdin>";

/// Message envelope carrying the model id next to its usage
#[derive(Debug, Deserialize)]
struct UsageMessage {
    model: Option<String>,
    usage: UsageCounters,
}

/// Parse usage JSON: a `{model, usage}` envelope when a `usage` key is
/// present, bare counters otherwise.
fn parse_usage(content: &str, label: &str) -> Result<(Option<String>, UsageCounters), AppError> {
    let parse_err = |source| AppError::ParseInput {
        path: label.to_string(),
        source,
    };

    let value: serde_json::Value = serde_json::from_str(content).map_err(parse_err)?;
    if value.get("usage").is_some() {
        let message: UsageMessage = serde_json::from_str(content).map_err(parse_err)?;
        Ok((message.model, message.usage))
    } else {
        let usage: UsageCounters = serde_json::from_str(content).map_err(parse_err)?;
        Ok((None, usage))
    }
}

fn read_usage(path: Option<&Path>) -> Result<(Option<String>, UsageCounters), AppError> {
    let (content, label) = match path {
        Some(path) => {
            let label = path.display().to_string();
            let content = std::fs::read_to_string(path).map_err(|source| AppError::ReadInput {
                path: label.clone(),
                source,
            })?;
            (content, label)
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|source| AppError::ReadInput {
                    path: STDIN_LABEL.to_string(),
                    source,
                })?;
            (content, STDIN_LABEL.to_string())
        }
    };
    parse_usage(&content, &label)
}

/// Pricing precedence: explicit pricing file, then catalog lookup, then none.
fn resolve_pricing(cli: &Cli, model: Option<&str>) -> Result<Option<PricingTable>, AppError> {
    if let Some(path) = &cli.pricing {
        let pricing = load_pricing_file(path)?;
        debug_log(format!("pricing from {}: {pricing:?}", path.display()));
        return Ok(Some(pricing));
    }

    let Some(catalog_path) = &cli.catalog else {
        debug_log("no pricing source, all credits are 0");
        return Ok(None);
    };

    let catalog = ModelCatalog::load(catalog_path)?;
    debug_log(format!(
        "catalog {} has {} model entries",
        catalog_path.display(),
        catalog.len()
    ));

    let Some(model) = model else {
        eprintln!("Warning: no model given, catalog not used (pass --model)");
        return Ok(None);
    };

    match catalog.resolve(model) {
        Some(pricing) => {
            debug_log(format!("resolved {model}: {pricing:?}"));
            Ok(Some(*pricing))
        }
        None => {
            eprintln!("Warning: model \"{model}\" not found in catalog, using zero pricing");
            Ok(None)
        }
    }
}

fn log_breakdown(breakdown: &UsageBreakdown) {
    for (category, entry) in breakdown.entries() {
        debug_log(format!(
            "{}: token={} credit={}",
            category.key(),
            entry.token,
            entry.credit
        ));
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    set_debug(cli.debug);
    if let Some(path) = &cli.config_path {
        debug_log(format!("loaded config from {}", path.display()));
    }
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;

    let (envelope_model, usage) = read_usage(cli.usage_path().map(|p| p.as_path()))?;
    debug_log(format!("usage: {usage:?}"));

    let model = cli.model.clone().or(envelope_model);
    let pricing = resolve_pricing(cli, model.as_deref())?;

    let breakdown = compute_breakdown(&usage, pricing.as_ref());
    log_breakdown(&breakdown);

    if cli.json {
        println!("{}", output_breakdown_json(&breakdown));
    } else {
        print_breakdown_table(
            &breakdown,
            BreakdownTableOptions {
                use_color: cli.use_color(),
                compact: cli.compact,
                number_format,
                model: model.as_deref(),
            },
        );
    }

    Ok(())
}
