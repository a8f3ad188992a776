use crate::core::UsageBreakdown;

/// Breakdown as pretty JSON; absent categories are omitted.
pub(crate) fn output_breakdown_json(breakdown: &UsageBreakdown) -> String {
    serde_json::to_string_pretty(breakdown).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TokenCredit;

    #[test]
    fn empty_breakdown_is_empty_object() {
        assert_eq!(output_breakdown_json(&UsageBreakdown::default()), "{}");
    }

    #[test]
    fn present_categories_only() {
        let b = UsageBreakdown {
            output_reasoning: Some(TokenCredit::new(10, 2)),
            total_output_tokens: Some(TokenCredit::new(100, 20)),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::from_str(&output_breakdown_json(&b)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(json["outputReasoning"]["token"], 10);
        assert_eq!(json["totalOutputTokens"]["credit"], 20);
    }
}
