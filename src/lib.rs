pub mod changelog;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod git;
pub mod notify;
pub mod pipeline;
pub mod sequencer;
pub mod ui;

pub use error::{GitPromoteError, Result};
