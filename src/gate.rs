use crate::domain::{PromotionDecision, ReviewStatus};

/// Decides whether a promotion run proceeds.
///
/// Proceeds only when the review is approved AND the review targets the
/// production branch. Total: any unrecognized status is treated as
/// non-approved, never as an error. No side effects.
pub fn evaluate(
    review_status: &ReviewStatus,
    base_branch: &str,
    production_branch: &str,
) -> PromotionDecision {
    if !review_status.is_approved() {
        return PromotionDecision::skip(format!(
            "review status is '{}', not 'approved'",
            review_status
        ));
    }

    if base_branch != production_branch {
        return PromotionDecision::skip(format!(
            "review targets '{}', not the production branch '{}'",
            base_branch, production_branch
        ));
    }

    PromotionDecision::proceed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_on_production_proceeds() {
        let decision = evaluate(&ReviewStatus::Approved, "master", "master");
        assert!(decision.proceed);
    }

    #[test]
    fn test_pending_does_not_proceed() {
        let decision = evaluate(&ReviewStatus::Pending, "master", "master");
        assert!(!decision.proceed);
        assert!(decision.reason.contains("pending"));
    }

    #[test]
    fn test_changes_requested_does_not_proceed() {
        let decision = evaluate(&ReviewStatus::ChangesRequested, "master", "master");
        assert!(!decision.proceed);
    }

    #[test]
    fn test_wrong_base_branch_does_not_proceed() {
        let decision = evaluate(&ReviewStatus::Approved, "develop", "master");
        assert!(!decision.proceed);
        assert!(decision.reason.contains("develop"));
        assert!(decision.reason.contains("master"));
    }

    #[test]
    fn test_unknown_status_is_non_approved() {
        let status = ReviewStatus::parse("dismissed");
        let decision = evaluate(&status, "master", "master");
        assert!(!decision.proceed);
        assert!(decision.reason.contains("dismissed"));
    }

    #[test]
    fn test_both_conditions_must_hold() {
        let decision = evaluate(&ReviewStatus::Pending, "develop", "master");
        assert!(!decision.proceed);
    }
}
