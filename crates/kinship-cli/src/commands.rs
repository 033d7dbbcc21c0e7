//! CLI command implementations.

use crate::config::Config;
use crate::render;
use crate::shell::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use kinship_core::normalize_name;
use kinship_graph::{
    common_friends, friends_of, load_network, mutual_friends, popularity_ranking, resolve,
    LabeledGraph,
};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize Kinship in a directory.
pub fn init(path: &Path) -> Result<()> {
    let config_path = Config::path(path);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    Config::default().save(path)?;

    println!("{} Initialized Kinship in {}", "✓".green(), path.display());
    println!(
        "  Edit {} to point at your roster and friendship files",
        config_path.display().to_string().cyan()
    );

    Ok(())
}

/// Loads the network named by the config, with a spinner while it reads.
fn load(config: &Config) -> Result<LabeledGraph> {
    debug!(
        roster = %config.roster.display(),
        friends = %config.friends.display(),
        "loading network"
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Reading network files...");

    let result = load_network(&config.roster, &config.friends);

    spinner.finish_and_clear();
    Ok(result?)
}

fn print_names(names: &[String], empty: &str) {
    if names.is_empty() {
        println!("{}", empty.yellow());
        return;
    }
    for name in names {
        println!("  {}", name.cyan());
    }
}

/// Display all the friends of a member.
pub fn friends(config: &Config, name: &str, json_output: bool) -> Result<()> {
    let graph = load(config)?;
    let name = normalize_name(name);
    let friends = friends_of(&graph, &name)?;

    if json_output {
        let output = serde_json::json!({ "member": name, "friends": friends });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Friends of".bold(), name.cyan().bold());
        print_names(&friends, "No friends found!");
    }

    Ok(())
}

/// Display all the friends and friends of the friends of a member.
pub fn mutual(config: &Config, name: &str, json_output: bool) -> Result<()> {
    let graph = load(config)?;
    let name = normalize_name(name);
    let reach = mutual_friends(&graph, &name)?;

    if json_output {
        let output = serde_json::json!({ "member": name, "friends_and_friends_of_friends": reach });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {}",
            "Friends and friends of friends of".bold(),
            name.cyan().bold()
        );
        print_names(&reach, "No friends found!");
    }

    Ok(())
}

/// Display all the common friends of two members.
pub fn common(config: &Config, first: &str, second: &str, json_output: bool) -> Result<()> {
    let graph = load(config)?;
    let first = normalize_name(first);
    let second = normalize_name(second);
    let shared: Vec<String> = common_friends(&graph, &first, &second)?
        .into_iter()
        .collect();

    if json_output {
        let output = serde_json::json!({ "members": [first, second], "common_friends": shared });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} {} {}",
            "Common friends of".bold(),
            first.cyan().bold(),
            "and".bold(),
            second.cyan().bold()
        );
        print_names(&shared, "There is no common friend");
    }

    Ok(())
}

/// Display all members sorted by popularity, then by name.
pub fn popular(config: &Config, json_output: bool) -> Result<()> {
    let graph = load(config)?;
    let ranking = popularity_ranking(&graph);

    if json_output {
        let output = serde_json::json!({
            "ranking": ranking.iter().enumerate().map(|(i, p)| serde_json::json!({
                "rank": i + 1,
                "name": p.name,
                "friend_count": p.friend_count
            })).collect::<Vec<_>>()
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render::ranking_table(&ranking));
    }

    Ok(())
}

/// List every member reachable from a member, depth first.
pub fn traverse(config: &Config, name: &str, json_output: bool) -> Result<()> {
    let graph = load(config)?;
    let name = normalize_name(name);
    let start = resolve(&graph, &name)?;
    let order = graph.depth_first_labels(start)?;

    if json_output {
        let output = serde_json::json!({ "start": name, "order": order });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Reachable from".bold(), name.cyan().bold());
        for (depth_rank, label) in order.iter().enumerate() {
            println!("  {} {}", format!("{:>3}.", depth_rank + 1).dimmed(), label);
        }
    }

    Ok(())
}

/// Show network statistics.
pub fn status(config: &Config, json_output: bool) -> Result<()> {
    let graph = load(config)?;
    let stats = graph.stats();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Kinship Status".cyan().bold());
    println!();
    println!("  {} {}", "Roster:".dimmed(), config.roster.display());
    println!("  {} {}", "Friends:".dimmed(), config.friends.display());
    println!("  {} {}", "Members:".dimmed(), stats.members);
    println!("  {} {}", "Friendships:".dimmed(), stats.friendships);
    println!("  {} {}", "Without friends:".dimmed(), stats.isolated);

    Ok(())
}

/// Run the interactive menu on stdin/stdout.
pub fn shell(config: &Config) -> Result<()> {
    // A missing network is not fatal here; the menu can reload one.
    let graph = match load(config) {
        Ok(graph) => graph,
        Err(e) => {
            warn!("starting with an empty network: {}", e);
            eprintln!("{} {}", "⚠".yellow(), e);
            LabeledGraph::default()
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(graph, stdin.lock(), io::stdout());
    shell.run()?;

    Ok(())
}
