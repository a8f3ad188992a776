use serde::{Deserialize, Serialize};

/// Model pricing in credits per token (1 credit = $1 per million tokens)
///
/// An absent price means the category is free for this model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PricingTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) input: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cached_input: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) write_cache_input: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) output: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) audio_input: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) audio_output: Option<f64>,
}

impl PricingTable {
    pub(crate) fn is_empty(&self) -> bool {
        *self == PricingTable::default()
    }
}
