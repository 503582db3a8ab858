/// Outcome of the approval gate: whether the promotion proceeds, and why not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionDecision {
    pub proceed: bool,
    pub reason: String,
}

impl PromotionDecision {
    /// Decision to proceed with the promotion
    pub fn proceed() -> Self {
        PromotionDecision {
            proceed: true,
            reason: "approved and targeting the production branch".to_string(),
        }
    }

    /// Decision to skip the promotion, with the reason shown to the user
    pub fn skip(reason: impl Into<String>) -> Self {
        PromotionDecision {
            proceed: false,
            reason: reason.into(),
        }
    }
}
