use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use sn_graph::SocialNetwork;
use sn_scenario::{ApplyReport, Scenario, ScenarioResult};

#[derive(Parser)]
#[command(name = "sn-cli")]
#[command(about = "socnet CLI - build and print small social networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the built-in demo scenario and print the network
    Demo {
        /// Validate network invariants after applying
        #[arg(long)]
        check: bool,
    },
    /// Apply a scenario file and print the network
    Run {
        /// Path to the scenario file (YAML, or JSON with a .json extension)
        scenario_path: PathBuf,
        /// Validate network invariants after applying
        #[arg(long)]
        check: bool,
    },
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario file
        scenario_path: PathBuf,
    },
    /// Print the line for a single member
    Show {
        /// Path to the scenario file
        scenario_path: PathBuf,
        /// Member name
        member: String,
    },
}

fn main() -> ScenarioResult<()> {
    // Initialize tracing; logs go to stderr so stdout carries only the network
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { check } => cmd_run(&sn_scenario::demo(), check),
        Commands::Run {
            scenario_path,
            check,
        } => {
            let scenario = load(&scenario_path)?;
            cmd_run(&scenario, check)
        }
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Show {
            scenario_path,
            member,
        } => cmd_show(&scenario_path, &member),
    }
}

fn load(scenario_path: &Path) -> ScenarioResult<Scenario> {
    tracing::debug!(path = %scenario_path.display(), "loading scenario");
    sn_scenario::load(scenario_path)
}

fn build(scenario: &Scenario, check: bool) -> ScenarioResult<(SocialNetwork, ApplyReport)> {
    let mut network = SocialNetwork::new();
    let report = sn_scenario::apply(scenario, &mut network);
    if check {
        network.validate()?;
    }
    Ok((network, report))
}

fn cmd_run(scenario: &Scenario, check: bool) -> ScenarioResult<()> {
    let (network, report) = build(scenario, check)?;

    for issue in &report.issues {
        if issue.error().is_informational() {
            println!("note: {}", issue);
        } else {
            println!("error: {}", issue);
        }
    }
    if !report.issues.is_empty() {
        println!();
    }

    println!("{}", network);
    println!(
        "\n{} members, {} friendships",
        network.len(),
        network.friendship_count()
    );
    if check {
        println!("✓ Network invariants hold");
    }
    Ok(())
}

fn cmd_validate(scenario_path: &Path) -> ScenarioResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load(scenario_path)?;
    println!(
        "✓ Scenario '{}' is valid ({} members, {} friendships)",
        scenario.name,
        scenario.members.len(),
        scenario.friendships.len()
    );
    Ok(())
}

fn cmd_show(scenario_path: &Path, member: &str) -> ScenarioResult<()> {
    let scenario = load(scenario_path)?;
    let (network, _report) = build(&scenario, false)?;

    match network.render_member(member) {
        Some(line) => println!("{}", line),
        None => println!("{} does not exist in the network", member),
    }
    Ok(())
}
