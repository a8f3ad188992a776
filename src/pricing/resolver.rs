use std::collections::HashMap;

use super::types::PricingTable;

const PROVIDER_PREFIXES: [&str; 3] = ["openai/", "anthropic/", "anthropic."];

/// Credits per USD (1 credit = $1 per million tokens, the model card unit)
const CREDITS_PER_USD: f64 = 1_000_000.0;

/// Convert a LiteLLM USD-per-token price into credits per token.
///
/// Trimmed to 6 decimals so `2.5e-6` becomes exactly `2.5`.
fn usd_to_credits(usd: f64) -> f64 {
    (usd * CREDITS_PER_USD * 1_000_000.0).round() / 1_000_000.0
}

fn price_field(value: &serde_json::Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|k| value.get(*k))
        .and_then(|v| v.as_f64())
        .map(usd_to_credits)
}

/// Parse one catalog entry, either a model card with a nested `pricing`
/// object (already in credits) or a flat LiteLLM-style entry (USD).
pub(super) fn parse_entry(value: &serde_json::Value) -> Option<PricingTable> {
    if let Some(card) = value.get("pricing") {
        let pricing: PricingTable = serde_json::from_value(card.clone()).ok()?;
        return (!pricing.is_empty()).then_some(pricing);
    }

    let pricing = PricingTable {
        input: price_field(value, &["input_cost_per_token"]),
        cached_input: price_field(value, &["cache_read_input_token_cost"]),
        write_cache_input: price_field(value, &["cache_creation_input_token_cost"]),
        output: price_field(value, &["output_cost_per_token"]),
        audio_input: price_field(
            value,
            &["input_cost_per_audio_token", "input_cost_per_audio_per_token"],
        ),
        audio_output: price_field(value, &["output_cost_per_audio_token"]),
    };
    (!pricing.is_empty()).then_some(pricing)
}

pub(super) fn parse_catalog_data(
    data: HashMap<String, serde_json::Value>,
) -> HashMap<String, PricingTable> {
    let mut models = HashMap::new();

    for (name, value) in data {
        let Some(pricing) = parse_entry(&value) else {
            continue;
        };

        // Also index without the provider prefix
        for prefix in PROVIDER_PREFIXES {
            if let Some(stripped) = name.strip_prefix(prefix) {
                models.entry(stripped.to_string()).or_insert(pricing);
            }
        }
        models.insert(name, pricing);
    }

    models
}

pub(super) fn resolve_pricing<'a>(
    model: &str,
    models: &'a HashMap<String, PricingTable>,
) -> Option<&'a PricingTable> {
    // Try exact match first
    if let Some(pricing) = models.get(model) {
        return Some(pricing);
    }

    let model_lower = model.to_lowercase();
    if let Some((_, pricing)) = models
        .iter()
        .find(|(name, _)| name.to_lowercase() == model_lower)
    {
        return Some(pricing);
    }

    // Try partial matching, longest name wins
    let mut candidates: Vec<(&String, &PricingTable)> = models
        .iter()
        .filter(|(name, _)| {
            let name_lower = name.to_lowercase();
            name_lower.contains(&model_lower) || model_lower.contains(&name_lower)
        })
        .collect();
    candidates.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    candidates.first().map(|(_, pricing)| *pricing)
}
