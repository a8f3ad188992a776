//! Core data types for a single model invocation
//!
//! Raw usage counters go in, a per-category breakdown comes out.

use serde::{Deserialize, Serialize};

/// Raw token counters reported for one model call
///
/// Every field defaults to 0 when absent. Counters are signed so that derived
/// values (e.g. `input - cached`) pass through inconsistent input unclamped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct UsageCounters {
    #[serde(alias = "input_tokens")]
    pub(crate) input_tokens: i64,
    #[serde(alias = "input_cache_miss_tokens")]
    pub(crate) input_cache_miss_tokens: i64,
    #[serde(alias = "cached_tokens")]
    pub(crate) cached_tokens: i64,
    #[serde(alias = "input_write_cache_tokens")]
    pub(crate) input_write_cache_tokens: i64,
    #[serde(alias = "input_audio_tokens")]
    pub(crate) input_audio_tokens: i64,
    /// Includes reasoning and audio output
    #[serde(alias = "output_tokens")]
    pub(crate) output_tokens: i64,
    #[serde(alias = "output_audio_tokens")]
    pub(crate) output_audio_tokens: i64,
    #[serde(alias = "reasoning_tokens")]
    pub(crate) reasoning_tokens: i64,
    #[serde(alias = "total_tokens")]
    pub(crate) total_tokens: i64,
}

/// Token count and the credit it costs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TokenCredit {
    pub(crate) token: i64,
    pub(crate) credit: i64,
}

impl TokenCredit {
    pub(crate) fn new(token: i64, credit: i64) -> Self {
        Self { token, credit }
    }
}

/// Breakdown category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    UncachedInput,
    CachedInput,
    CachedWriteInput,
    InputText,
    InputAudio,
    OutputText,
    OutputReasoning,
    OutputAudio,
    TotalInputTokens,
    TotalOutputTokens,
    TotalTokens,
}

impl Category {
    /// Display order: input side, output side, totals
    pub(crate) const ALL: [Category; 11] = [
        Category::UncachedInput,
        Category::CachedInput,
        Category::CachedWriteInput,
        Category::InputText,
        Category::InputAudio,
        Category::OutputText,
        Category::OutputReasoning,
        Category::OutputAudio,
        Category::TotalInputTokens,
        Category::TotalOutputTokens,
        Category::TotalTokens,
    ];

    /// JSON key, matching the serialized `UsageBreakdown` field
    pub(crate) fn key(self) -> &'static str {
        match self {
            Category::UncachedInput => "uncachedInput",
            Category::CachedInput => "cachedInput",
            Category::CachedWriteInput => "cachedWriteInput",
            Category::InputText => "inputText",
            Category::InputAudio => "inputAudio",
            Category::OutputText => "outputText",
            Category::OutputReasoning => "outputReasoning",
            Category::OutputAudio => "outputAudio",
            Category::TotalInputTokens => "totalInputTokens",
            Category::TotalOutputTokens => "totalOutputTokens",
            Category::TotalTokens => "totalTokens",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Category::UncachedInput => "Uncached Input",
            Category::CachedInput => "Cached Input",
            Category::CachedWriteInput => "Cache Write Input",
            Category::InputText => "Input Text",
            Category::InputAudio => "Input Audio",
            Category::OutputText => "Output Text",
            Category::OutputReasoning => "Output Reasoning",
            Category::OutputAudio => "Output Audio",
            Category::TotalInputTokens => "Total Input",
            Category::TotalOutputTokens => "Total Output",
            Category::TotalTokens => "Total",
        }
    }

    pub(crate) fn short_label(self) -> &'static str {
        match self {
            Category::UncachedInput => "In",
            Category::CachedInput => "Cached",
            Category::CachedWriteInput => "CacheW",
            Category::InputText => "InText",
            Category::InputAudio => "InAudio",
            Category::OutputText => "OutText",
            Category::OutputReasoning => "Reason",
            Category::OutputAudio => "OutAudio",
            Category::TotalInputTokens => "TotIn",
            Category::TotalOutputTokens => "TotOut",
            Category::TotalTokens => "Total",
        }
    }

    pub(crate) fn is_total(self) -> bool {
        matches!(
            self,
            Category::TotalInputTokens | Category::TotalOutputTokens | Category::TotalTokens
        )
    }
}

/// Per-category breakdown of one model call
///
/// A category is `None` when its underlying raw counter is zero, so consumers
/// can tell "not applicable" apart from "free".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cached_input: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cached_write_input: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) input_audio: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) input_text: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) output_audio: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) output_reasoning: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) output_text: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) total_input_tokens: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) total_output_tokens: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) total_tokens: Option<TokenCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) uncached_input: Option<TokenCredit>,
}

impl UsageBreakdown {
    pub(crate) fn get(&self, category: Category) -> Option<TokenCredit> {
        match category {
            Category::UncachedInput => self.uncached_input,
            Category::CachedInput => self.cached_input,
            Category::CachedWriteInput => self.cached_write_input,
            Category::InputText => self.input_text,
            Category::InputAudio => self.input_audio,
            Category::OutputText => self.output_text,
            Category::OutputReasoning => self.output_reasoning,
            Category::OutputAudio => self.output_audio,
            Category::TotalInputTokens => self.total_input_tokens,
            Category::TotalOutputTokens => self.total_output_tokens,
            Category::TotalTokens => self.total_tokens,
        }
    }

    /// Present categories in display order
    pub(crate) fn entries(&self) -> Vec<(Category, TokenCredit)> {
        Category::ALL
            .iter()
            .filter_map(|&c| self.get(c).map(|tc| (c, tc)))
            .collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.get(c).is_none())
    }
}
