use std::fmt;

/// Review state of the branch under promotion, as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    ChangesRequested,
    Pending,
    /// Any status string the host reports that we don't recognize.
    /// Treated as non-approved by the gate, never as an error.
    Unknown(String),
}

impl ReviewStatus {
    /// Parse a host-provided status string. Total: never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "approved" => ReviewStatus::Approved,
            "changes_requested" => ReviewStatus::ChangesRequested,
            "pending" => ReviewStatus::Pending,
            _ => ReviewStatus::Unknown(raw.trim().to_string()),
        }
    }

    /// Whether this status allows promotion to proceed
    pub fn is_approved(&self) -> bool {
        matches!(self, ReviewStatus::Approved)
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::ChangesRequested => write!(f, "changes_requested"),
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// Immutable input for one promotion run, built once from host metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionRequest {
    /// Branch under review (the release/hotfix branch to promote)
    pub source_branch: String,
    /// Branch the review targets
    pub base_branch: String,
    /// Review status reported by the host
    pub review_status: ReviewStatus,
}

impl PromotionRequest {
    /// Create a new request from raw host inputs
    pub fn new(
        source_branch: impl Into<String>,
        base_branch: impl Into<String>,
        review_status: ReviewStatus,
    ) -> Self {
        PromotionRequest {
            source_branch: source_branch.into(),
            base_branch: base_branch.into(),
            review_status,
        }
    }
}
