use crate::config::BranchesConfig;
use crate::domain::{PromotionOutcome, Step, Tag};
use crate::error::Result;
use crate::git::VcsClient;
use crate::ui;

/// Execute the promotion sequence against the repository.
///
/// Runs the six steps in strict order: checkout source, merge into
/// production (no fast-forward), create the annotated tag, merge into
/// develop, delete the source branch, push everything. The first failing
/// step halts the run immediately and becomes the outcome; no step is
/// retried or rolled back. Recovery is manual re-invocation, which is safe
/// because already-applied merges are no-ops.
pub fn promote(
    client: &dyn VcsClient,
    source_branch: &str,
    tag: &Tag,
    branches: &BranchesConfig,
    remote: &str,
) -> PromotionOutcome {
    for step in Step::sequence() {
        ui::display_status(&format!("Step: {}", step));
        if let Err(e) = run_step(client, step, source_branch, tag, branches, remote) {
            ui::display_error(&format!("Step '{}' failed: {}", step, e));
            return PromotionOutcome::Failed { step };
        }
    }

    PromotionOutcome::Succeeded
}

fn run_step(
    client: &dyn VcsClient,
    step: Step,
    source_branch: &str,
    tag: &Tag,
    branches: &BranchesConfig,
    remote: &str,
) -> Result<()> {
    match step {
        Step::CheckoutSource => client.checkout(source_branch),
        Step::MergeProduction => {
            client.checkout(&branches.production)?;
            client.merge_no_ff(source_branch)
        }
        Step::CreateTag => client.create_annotated_tag(&tag.name, tag.annotation()),
        Step::MergeDevelop => {
            client.checkout(&branches.develop)?;
            client.merge_no_ff(source_branch)
        }
        Step::DeleteSource => client.delete_branch(source_branch),
        Step::Push => {
            // Order matters: branches first, then tags, then the deletion
            client.push_branch(remote, &branches.production)?;
            client.push_branch(remote, &branches.develop)?;
            client.push_tags(remote)?;
            client.push_deletion(remote, source_branch)
        }
    }
}

/// Human-readable description of each step, for dry-run output
pub fn describe_plan(
    source_branch: &str,
    tag: &Tag,
    branches: &BranchesConfig,
    remote: &str,
) -> Vec<String> {
    vec![
        format!("checkout '{}'", source_branch),
        format!(
            "merge '{}' into '{}' (--no-ff)",
            source_branch, branches.production
        ),
        format!("create annotated tag '{}'", tag.name),
        format!(
            "merge '{}' into '{}' (--no-ff)",
            source_branch, branches.develop
        ),
        format!("delete local branch '{}'", source_branch),
        format!(
            "push '{}', '{}', all tags, and the deletion of '{}' to '{}'",
            branches.production, branches.develop, source_branch, remote
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockVcs;

    fn branches() -> BranchesConfig {
        BranchesConfig {
            production: "master".to_string(),
            develop: "develop".to_string(),
        }
    }

    #[test]
    fn test_success_runs_all_steps_in_order() {
        let vcs = MockVcs::new();
        let tag = Tag::new("1.2.3");

        let outcome = promote(&vcs, "release/1.2.3", &tag, &branches(), "origin");
        assert!(outcome.succeeded());

        let ops = vcs.operations();
        assert_eq!(
            ops,
            vec![
                "checkout release/1.2.3",
                "checkout master",
                "merge master <- release/1.2.3",
                "tag 1.2.3 -m 1.2.3",
                "checkout develop",
                "merge develop <- release/1.2.3",
                "delete-branch release/1.2.3",
                "push origin master",
                "push origin develop",
                "push origin --tags",
                "push origin --delete release/1.2.3",
            ]
        );
    }

    #[test]
    fn test_tag_failure_halts_before_develop_merge() {
        let vcs = MockVcs::new();
        vcs.set_fail_on("tag");
        let tag = Tag::new("1.2.3");

        let outcome = promote(&vcs, "release/1.2.3", &tag, &branches(), "origin");
        assert_eq!(outcome.failed_step(), Some(Step::CreateTag));

        // Production merge stays applied; develop was never touched
        assert_eq!(
            vcs.merge_commits(),
            vec![("master".to_string(), "release/1.2.3".to_string())]
        );
        assert!(!vcs.operations().iter().any(|op| op.contains("develop")));
    }

    #[test]
    fn test_push_failure_reports_push_step() {
        let vcs = MockVcs::new();
        vcs.set_fail_on("push");
        let tag = Tag::new("1.2.3");

        let outcome = promote(&vcs, "release/1.2.3", &tag, &branches(), "origin");
        assert_eq!(outcome.failed_step(), Some(Step::Push));

        // All local mutations before the push were applied
        assert_eq!(vcs.merge_commits().len(), 2);
        assert_eq!(vcs.tags(), vec!["1.2.3".to_string()]);
    }

    #[test]
    fn test_rerun_after_push_remediation_is_idempotent() {
        let vcs = MockVcs::new();
        vcs.set_fail_on("push");
        let tag = Tag::new("1.2.3");

        let first = promote(&vcs, "release/1.2.3", &tag, &branches(), "origin");
        assert_eq!(first.failed_step(), Some(Step::Push));

        vcs.clear_fail();
        let second = promote(&vcs, "release/1.2.3", &tag, &branches(), "origin");
        assert!(second.succeeded());

        // Re-applied merges were no-ops: still exactly one per target
        assert_eq!(
            vcs.merge_commits(),
            vec![
                ("master".to_string(), "release/1.2.3".to_string()),
                ("develop".to_string(), "release/1.2.3".to_string()),
            ]
        );
    }

    #[test]
    fn test_first_step_failure_leaves_repository_untouched() {
        let vcs = MockVcs::new();
        vcs.set_fail_on("checkout release/1.2.3");
        let tag = Tag::new("1.2.3");

        let outcome = promote(&vcs, "release/1.2.3", &tag, &branches(), "origin");
        assert_eq!(outcome.failed_step(), Some(Step::CheckoutSource));
        assert!(vcs.merge_commits().is_empty());
        assert!(vcs.tags().is_empty());
    }

    #[test]
    fn test_describe_plan_matches_sequence_length() {
        let tag = Tag::new("1.2.3");
        let plan = describe_plan("release/1.2.3", &tag, &branches(), "origin");
        assert_eq!(plan.len(), Step::sequence().len());
        assert!(plan[2].contains("1.2.3"));
    }
}
