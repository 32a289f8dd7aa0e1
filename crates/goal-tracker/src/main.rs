//! `goal-tracker` command line: sample dashboard and one-shot goal submission.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use goal_intake::Submission;
use goal_model::IdStrategy;
use goal_tracker::{GoalTracker, TrackerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Command::new("goal-tracker")
        .version(goal_tracker::VERSION)
        .about("Track personal goals, milestones and comments")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("TOML configuration file"),
        )
        .subcommand(
            Command::new("demo")
                .about("Load sample goals and print the dashboard as JSON")
                .arg(
                    Arg::new("sequential")
                        .long("sequential")
                        .action(ArgAction::SetTrue)
                        .help("Use sequential ids so sample comments attach"),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Submit one goal and print the dashboard as JSON")
                .arg(Arg::new("title").long("title").required(true).help("Goal title"))
                .arg(
                    Arg::new("progress")
                        .long("progress")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Percent complete (clamped to 0..=100 by default)"),
                )
                .arg(
                    Arg::new("milestones")
                        .long("milestones")
                        .default_value("")
                        .help("Comma-separated milestones"),
                )
                .arg(
                    Arg::new("comments")
                        .long("comments")
                        .default_value("")
                        .help("Comma-separated comments"),
                )
                .arg(Arg::new("description").long("description").help("Longer description"))
                .arg(
                    Arg::new("samples")
                        .long("samples")
                        .action(ArgAction::SetTrue)
                        .help("Load sample goals first"),
                ),
        );

    let matches = cli.get_matches();
    let config = load_config(&matches)?;

    match matches.subcommand() {
        Some(("demo", sub)) => {
            let config = if sub.get_flag("sequential") {
                config.with_id_strategy(IdStrategy::Sequential)
            } else {
                config
            };
            let mut tracker = GoalTracker::new(config);
            tracker.seed_samples()?;
            print_dashboard(&tracker)
        }
        Some(("add", sub)) => {
            let mut tracker = GoalTracker::new(config);
            if sub.get_flag("samples") {
                tracker.seed_samples()?;
            }
            let submission = submission_from(sub);
            let goal = tracker.submit(&submission).context("goal was not added")?;
            tracing::info!(goal_id = %goal.id, "submission accepted");
            print_dashboard(&tracker)
        }
        _ => {
            println!("No command specified. Use --help for usage.");
            Ok(())
        }
    }
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<TrackerConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => TrackerConfig::from_path(path)
            .with_context(|| format!("failed to load config from {path}")),
        None => Ok(TrackerConfig::default()),
    }
}

fn submission_from(sub: &ArgMatches) -> Submission {
    let field = |name: &str| sub.get_one::<String>(name).cloned().unwrap_or_default();
    let submission = Submission::new(field("title"), field("progress"))
        .with_milestones(field("milestones"))
        .with_comments(field("comments"));
    match sub.get_one::<String>("description") {
        Some(description) => submission.with_description(description.clone()),
        None => submission,
    }
}

fn print_dashboard(tracker: &GoalTracker) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&tracker.dashboard())?;
    println!("{json}");
    Ok(())
}
