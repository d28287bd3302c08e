//! CLI entry point for sixdeg.
//!
//! Designed for subprocess invocation: `search` and `separation` read a JSON
//! request from stdin and write a JSON result to stdout. Logs go to stderr.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use sixdeg_search::{sample, Criterion, SearchConfig, SearchEngine, SocialGraph};

#[derive(Parser)]
#[command(name = "sixdeg")]
#[command(about = "Find the nearest matching node in a directed graph by breadth-first search")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file prefix (default: sixdeg).
    #[arg(short, long, default_value = "sixdeg", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Find the nearest node matching a criterion (reads JSON from stdin).
    Search,
    /// Count hops between two nodes (reads JSON from stdin).
    Separation,
    /// Run a search over a built-in example network.
    Demo {
        /// Which example network to search.
        #[arg(long, value_enum, default_value_t = Network::Jobs)]
        network: Network,
        /// Role to look for (jobs network only). Defaults to config `demo_role`.
        #[arg(long)]
        role: Option<String>,
        /// Start node. Defaults to config `demo_start` (jobs) or "me" (mango).
        #[arg(long)]
        start: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Network {
    /// Eight people with jobs; search by role.
    Jobs,
    /// Nine friends; a mango seller's name ends in "m".
    Mango,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SearchConfig::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Falling back to default config: {e}");
        SearchConfig::default()
    });

    init_tracing(&config);

    let engine = SearchEngine::new(config);

    match cli.command {
        Command::Search => {
            let result = engine.search_from_reader(std::io::stdin().lock())?;
            println!("{}", serde_json::to_string(&result)?);
        }
        Command::Separation => {
            let result = engine.separation_from_reader(std::io::stdin().lock())?;
            println!("{}", serde_json::to_string(&result)?);
        }
        Command::Demo {
            network,
            role,
            start,
        } => run_demo(&engine, network, role, start),
    }

    Ok(())
}

fn init_tracing(config: &SearchConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_demo(engine: &SearchEngine, network: Network, role: Option<String>, start: Option<String>) {
    let (graph, start, criterion, label): (SocialGraph, String, Criterion, String) = match network {
        Network::Jobs => {
            let role = role.unwrap_or_else(|| engine.config().demo_role.clone());
            let start = start.unwrap_or_else(|| engine.config().demo_start.clone());
            (sample::job_network(), start, Criterion::has_role(&role), role)
        }
        Network::Mango => {
            let start = start.unwrap_or_else(|| "me".to_string());
            let criterion = Criterion::IdEndsWith {
                suffix: "m".to_string(),
            };
            (sample::mango_network(), start, criterion, "mango seller".to_string())
        }
    };

    let result = engine.search_graph(&graph, &start, &criterion, false);
    match result.found {
        Some(found) => {
            let path: Vec<&str> = found.path.iter().map(|id| id.as_str()).collect();
            println!("{} is a {label}!", found.id);
            println!("{} hop(s): {}", found.depth, path.join(" -> "));
        }
        None => println!("No {label} found."),
    }
}
