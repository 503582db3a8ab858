/// Steps of the promotion sequence, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CheckoutSource,
    MergeProduction,
    CreateTag,
    MergeDevelop,
    DeleteSource,
    Push,
}

impl Step {
    /// Get the step name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Step::CheckoutSource => "checkout-source",
            Step::MergeProduction => "merge-production",
            Step::CreateTag => "create-tag",
            Step::MergeDevelop => "merge-develop",
            Step::DeleteSource => "delete-branch",
            Step::Push => "push",
        }
    }

    /// All steps in the order the sequencer executes them
    pub fn sequence() -> [Step; 6] {
        [
            Step::CheckoutSource,
            Step::MergeProduction,
            Step::CreateTag,
            Step::MergeDevelop,
            Step::DeleteSource,
            Step::Push,
        ]
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Terminal state of one promotion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionOutcome {
    /// Gate decided not to proceed. Not a failure.
    Skipped { reason: String },
    /// All six steps completed
    Succeeded,
    /// A step failed; everything after it was not executed
    Failed { step: Step },
}

impl PromotionOutcome {
    /// Whether the run completed all steps
    pub fn succeeded(&self) -> bool {
        matches!(self, PromotionOutcome::Succeeded)
    }

    /// Whether the run was skipped by the gate
    pub fn skipped(&self) -> bool {
        matches!(self, PromotionOutcome::Skipped { .. })
    }

    /// The failed step, if any
    pub fn failed_step(&self) -> Option<Step> {
        match self {
            PromotionOutcome::Failed { step } => Some(*step),
            _ => None,
        }
    }
}
