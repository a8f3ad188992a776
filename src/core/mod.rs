//! Core module - usage breakdown types and calculator

mod breakdown;
mod types;

pub(crate) use breakdown::compute_breakdown;
pub(crate) use types::{Category, TokenCredit, UsageBreakdown, UsageCounters};
