//! Usage breakdown calculator
//!
//! Splits overlapping raw counters into independently priced categories.
//! Output total includes reasoning and audio; uncached input is either
//! reported directly (cache-miss count) or derived as `input - cached`.

use crate::core::types::{TokenCredit, UsageBreakdown, UsageCounters};
use crate::pricing::PricingTable;

/// Credit for `tokens` at `unit_price`, rounded half away from zero.
///
/// An absent, zero or NaN price costs nothing.
pub(crate) fn credit_for(tokens: i64, unit_price: Option<f64>) -> i64 {
    match unit_price {
        Some(price) if price != 0.0 && !price.is_nan() => (tokens as f64 * price).round() as i64,
        _ => 0,
    }
}

fn present(source: i64, entry: TokenCredit) -> Option<TokenCredit> {
    (source != 0).then_some(entry)
}

/// Compute the per-category breakdown for one model call.
///
/// Derived counts and credit sums saturate at the `i64` bounds.
/// Total input credit is the sum of its three parts, while total output credit
/// and input text credit are priced from their raw counters independently.
pub(crate) fn compute_breakdown(
    usage: &UsageCounters,
    pricing: Option<&PricingTable>,
) -> UsageBreakdown {
    let p = pricing.copied().unwrap_or_default();
    let u = usage;

    let uncached_tokens = if u.input_cache_miss_tokens != 0 {
        u.input_cache_miss_tokens
    } else {
        u.input_tokens.saturating_sub(u.cached_tokens)
    };

    let uncached_credit = credit_for(uncached_tokens, p.input);
    let cached_credit = credit_for(u.cached_tokens, p.cached_input);
    let write_cache_credit = credit_for(u.input_write_cache_tokens, p.write_cache_input);
    let total_input_credit = uncached_credit
        .saturating_add(cached_credit)
        .saturating_add(write_cache_credit);

    let total_output_credit = credit_for(u.output_tokens, p.output);
    let total_credit = total_input_credit.saturating_add(total_output_credit);

    let input_text_tokens = u.input_tokens.saturating_sub(u.input_audio_tokens);
    let output_text_tokens = u
        .output_tokens
        .saturating_sub(u.reasoning_tokens)
        .saturating_sub(u.output_audio_tokens);

    UsageBreakdown {
        cached_input: present(
            u.cached_tokens,
            TokenCredit::new(u.cached_tokens, cached_credit),
        ),
        cached_write_input: present(
            u.input_write_cache_tokens,
            TokenCredit::new(u.input_write_cache_tokens, write_cache_credit),
        ),
        input_audio: present(
            u.input_audio_tokens,
            TokenCredit::new(
                u.input_audio_tokens,
                credit_for(u.input_audio_tokens, p.audio_input),
            ),
        ),
        input_text: present(
            u.input_tokens,
            TokenCredit::new(input_text_tokens, credit_for(input_text_tokens, p.input)),
        ),
        output_audio: present(
            u.output_audio_tokens,
            TokenCredit::new(
                u.output_audio_tokens,
                credit_for(u.output_audio_tokens, p.audio_output),
            ),
        ),
        output_reasoning: present(
            u.reasoning_tokens,
            TokenCredit::new(u.reasoning_tokens, credit_for(u.reasoning_tokens, p.output)),
        ),
        output_text: present(
            u.output_tokens,
            TokenCredit::new(output_text_tokens, credit_for(output_text_tokens, p.output)),
        ),
        total_input_tokens: present(
            u.input_tokens,
            TokenCredit::new(u.input_tokens, total_input_credit),
        ),
        total_output_tokens: present(
            u.output_tokens,
            TokenCredit::new(u.output_tokens, total_output_credit),
        ),
        total_tokens: present(u.total_tokens, TokenCredit::new(u.total_tokens, total_credit)),
        uncached_input: present(
            uncached_tokens,
            TokenCredit::new(uncached_tokens, uncached_credit),
        ),
    }
}
