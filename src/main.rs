use anyhow::Result;
use clap::Parser;
use std::path::Path;

use git_promote::changelog::CommandChangelog;
use git_promote::config;
use git_promote::domain::{PromotionOutcome, PromotionRequest, ReviewStatus, Tag};
use git_promote::git::SystemGit;
use git_promote::notify::Notifier;
use git_promote::{gate, pipeline, sequencer, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-promote",
    about = "Promote an approved release or hotfix branch into production"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        env = "GIT_PROMOTE_SOURCE_BRANCH",
        help = "Release/hotfix branch under review"
    )]
    source_branch: Option<String>,

    #[arg(
        long,
        env = "GIT_PROMOTE_BASE_BRANCH",
        help = "Branch the review targets"
    )]
    base_branch: Option<String>,

    #[arg(
        long,
        env = "GIT_PROMOTE_REVIEW_STATUS",
        help = "Review status reported by the host (e.g. approved, pending)"
    )]
    review_status: Option<String>,

    #[arg(long, help = "Override the configured production branch")]
    production_branch: Option<String>,

    #[arg(long, help = "Override the configured develop branch")]
    develop_branch: Option<String>,

    #[arg(long, help = "Override the configured remote")]
    remote: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-promote {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(production) = args.production_branch {
        config.branches.production = production;
    }
    if let Some(develop) = args.develop_branch {
        config.branches.develop = develop;
    }
    if let Some(remote) = args.remote {
        config.remote = remote;
    }

    let (Some(source_branch), Some(base_branch), Some(review_status)) =
        (args.source_branch, args.base_branch, args.review_status)
    else {
        ui::display_error(
            "Missing promotion inputs: --source-branch, --base-branch and --review-status \
             are required (or GIT_PROMOTE_* environment variables)",
        );
        std::process::exit(1);
    };

    let request = PromotionRequest::new(
        source_branch,
        base_branch,
        ReviewStatus::parse(&review_status),
    );

    if args.dry_run {
        return dry_run(&request, &config);
    }

    // Initialize the repository client
    let client = match SystemGit::open(Path::new(".")) {
        Ok(client) => client,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let tool = CommandChangelog::from_config(&config.changelog);
    let notifier = Notifier::from_config(&config.notify);

    match pipeline::run_promotion(&request, &config, &client, &tool, &notifier) {
        Ok(PromotionOutcome::Succeeded) | Ok(PromotionOutcome::Skipped { .. }) => Ok(()),
        Ok(PromotionOutcome::Failed { .. }) => std::process::exit(1),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Evaluate the gate and print the step plan without touching the repository
fn dry_run(request: &PromotionRequest, config: &git_promote::config::Config) -> Result<()> {
    let decision = gate::evaluate(
        &request.review_status,
        &request.base_branch,
        &config.branches.production,
    );

    if !decision.proceed {
        ui::display_skip(&format!("Would skip: {}", decision.reason));
        return Ok(());
    }

    let tag = match Tag::from_branch(&request.source_branch) {
        Ok(tag) => tag,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_status(&format!(
        "Would generate changelog, commit it to {}, then promote '{}' as tag '{}'",
        config.changelog.file, request.source_branch, tag
    ));
    ui::display_plan(&sequencer::describe_plan(
        &request.source_branch,
        &tag,
        &config.branches,
        &config.remote,
    ));
    Ok(())
}
