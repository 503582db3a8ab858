pub mod decision;
pub mod outcome;
pub mod request;
pub mod tag;

pub use decision::PromotionDecision;
pub use outcome::{PromotionOutcome, Step};
pub use request::{PromotionRequest, ReviewStatus};
pub use tag::Tag;
