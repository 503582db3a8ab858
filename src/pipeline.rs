//! Promotion run orchestration
//!
//! Glues the gate, changelog generator, sequencer, and notifier together
//! for one run, decoupled from clap so it can be driven programmatically
//! (and from tests, against a mock client).

use crate::changelog::{self, ChangelogTool};
use crate::config::Config;
use crate::domain::{PromotionOutcome, PromotionRequest, Tag};
use crate::error::Result;
use crate::gate;
use crate::git::VcsClient;
use crate::notify::{Notifier, NotifyContext, PromotionEvent};
use crate::sequencer;
use crate::ui;

/// Run one full promotion: gate, changelog, sequence, notifications.
///
/// The run is bracketed by a `Started` notification and exactly one
/// terminal notification (`Skipped`, `Succeeded`, or `Failed`). A negative
/// gate decision returns `Skipped` and is not an error; parse and
/// changelog failures notify `Failed` and propagate.
pub fn run_promotion(
    request: &PromotionRequest,
    config: &Config,
    client: &dyn VcsClient,
    tool: &dyn ChangelogTool,
    notifier: &Notifier,
) -> Result<PromotionOutcome> {
    let run = request.source_branch.clone();
    notifier.notify(&NotifyContext::new(PromotionEvent::Started, &run, None));

    let decision = gate::evaluate(
        &request.review_status,
        &request.base_branch,
        &config.branches.production,
    );
    if !decision.proceed {
        notifier.notify(&NotifyContext::new(
            PromotionEvent::Skipped,
            &run,
            Some(decision.reason.clone()),
        ));
        return Ok(PromotionOutcome::Skipped {
            reason: decision.reason,
        });
    }

    let tag = match Tag::from_branch(&request.source_branch) {
        Ok(tag) => tag,
        Err(e) => {
            notifier.notify(&NotifyContext::new(
                PromotionEvent::Failed,
                &run,
                Some(e.to_string()),
            ));
            return Err(e);
        }
    };

    match changelog::generate_and_commit(client, tool, &config.changelog) {
        Ok(changelog) => {
            ui::display_status(&format!(
                "Changelog generated since '{}' and committed to {}",
                changelog.since_tag, config.changelog.file
            ));
        }
        Err(e) => {
            notifier.notify(&NotifyContext::new(
                PromotionEvent::Failed,
                &run,
                Some(e.to_string()),
            ));
            return Err(e);
        }
    }

    let outcome = sequencer::promote(
        client,
        &request.source_branch,
        &tag,
        &config.branches,
        &config.remote,
    );

    match &outcome {
        PromotionOutcome::Succeeded => {
            notifier.notify(&NotifyContext::new(
                PromotionEvent::Succeeded,
                &run,
                Some(tag.name.clone()),
            ));
        }
        PromotionOutcome::Failed { step } => {
            notifier.notify(&NotifyContext::new(
                PromotionEvent::Failed,
                &run,
                Some(step.name().to_string()),
            ));
        }
        PromotionOutcome::Skipped { .. } => {
            // The sequencer never skips; the gate already returned above
        }
    }

    Ok(outcome)
}
