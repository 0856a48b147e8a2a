mod probe;
mod remote;

use anyhow::{Context, Result};
use beastrealm_core::{GameConfigSource, ManualScheduler, OverlayStore, RouteGuard};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::rc::Rc;

use probe::{RouteStatus, check_routes, load_config, load_index, resolve_all, variants_with_hits};
use remote::{HttpConfigSource, game_config_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored, human-readable lines
    Console,
    /// One JSON document on stdout
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "beastrealm-tester", version)]
#[command(about = "QA probes for the Beastrealm client - asset resolution and route gating")]
struct Args {
    /// Game server origin used for route probes
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    base_url: String,

    /// Asset manifest (JSON array of bundle paths); defaults to the bundled one
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Client config JSON; defaults to the bundled one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, global = true, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve image references against the asset manifest (`-` for none)
    Resolve {
        #[arg(required = true)]
        images: Vec<String>,
        /// Placeholder for misses; defaults to the client config's
        #[arg(long)]
        fallback: Option<String>,
    },
    /// Show the aliases tried for a local key and which paths they hit
    Variants { key: String },
    /// List every indexed asset path
    Assets,
    /// Ask the game server whether it is in test mode
    GameConfig,
    /// Run the navigation guard against the game server
    CheckRoute {
        #[arg(required = true)]
        paths: Vec<String>,
        /// Exit non-zero when any route is blocked
        #[arg(long)]
        fail_on_blocked: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.command {
        Command::Resolve { images, fallback } => run_resolve(&args, images, fallback.as_deref()),
        Command::Variants { key } => run_variants(&args, key),
        Command::Assets => run_assets(&args),
        Command::GameConfig => run_game_config(&args).await,
        Command::CheckRoute {
            paths,
            fail_on_blocked,
        } => run_check_route(&args, paths, *fail_on_blocked).await,
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn announce_banner(args: &Args) {
    if args.report == ReportFormat::Console {
        println!("{}", "🐉 Beastrealm Client Tester".bright_cyan().bold());
        println!("{}", "================================".cyan());
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing report")?;
    println!("{out}");
    Ok(())
}

fn run_resolve(args: &Args, images: &[String], fallback: Option<&str>) -> Result<()> {
    let index = load_index(args.manifest.as_deref())?;
    let config = load_config(args.config.as_deref())?;
    let fallback = fallback.unwrap_or(&config.fallback_image);
    let rows = resolve_all(&index, images, fallback);

    if args.report == ReportFormat::Json {
        return print_json(&rows);
    }
    announce_banner(args);
    for row in &rows {
        if row.fallback {
            println!("⚠️  {} -> {}", row.input.yellow(), row.resolved.yellow());
        } else {
            println!("✅ {} -> {}", row.input, row.resolved.green());
        }
    }
    Ok(())
}

fn run_variants(args: &Args, key: &str) -> Result<()> {
    let index = load_index(args.manifest.as_deref())?;
    let rows = variants_with_hits(&index, key);

    if args.report == ReportFormat::Json {
        return print_json(&rows);
    }
    announce_banner(args);
    if rows.is_empty() {
        println!("{}", "(empty key has no variants)".dimmed());
    }
    for row in &rows {
        if row.hits.is_empty() {
            println!("  {:20} {}", row.variant, "no match".dimmed());
        } else {
            println!("  {:20} {}", row.variant, row.hits.join(", ").green());
        }
    }
    Ok(())
}

fn run_assets(args: &Args) -> Result<()> {
    let index = load_index(args.manifest.as_deref())?;
    let paths: Vec<&str> = index.paths().collect();

    if args.report == ReportFormat::Json {
        return print_json(&paths);
    }
    announce_banner(args);
    println!("Indexed assets ({}):", paths.len());
    for path in paths {
        println!("  {path}");
    }
    Ok(())
}

async fn run_game_config(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let url = game_config_url(&args.base_url, &config);
    let source = HttpConfigSource::new(url).context("building HTTP client")?;
    let game_config = source
        .fetch_game_config()
        .await
        .with_context(|| format!("fetching {}", source.url()))?;

    if args.report == ReportFormat::Json {
        return print_json(&game_config);
    }
    announce_banner(args);
    let mode = if game_config.is_test_mode {
        "test mode".yellow().bold()
    } else {
        "live".green().bold()
    };
    println!("🌐 {} is {mode}", source.url());
    Ok(())
}

async fn run_check_route(args: &Args, paths: &[String], fail_on_blocked: bool) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let url = game_config_url(&args.base_url, &config);
    let source = HttpConfigSource::new(url).context("building HTTP client")?;
    let overlay = OverlayStore::new(Rc::new(ManualScheduler::new()), &config);
    let guard = RouteGuard::new(source, overlay.clone(), &config);

    let rows = check_routes(&guard, &overlay, paths).await;

    if args.report == ReportFormat::Json {
        print_json(&rows)?;
    } else {
        announce_banner(args);
        for row in &rows {
            match row.status {
                RouteStatus::Open => println!("⚪ {} {}", row.path, "open".dimmed()),
                RouteStatus::Allowed => println!("✅ {} {}", row.path, "allowed".green()),
                RouteStatus::Blocked => println!(
                    "⛔ {} {} {}",
                    row.path,
                    "blocked".red().bold(),
                    row.toast.as_deref().unwrap_or_default()
                ),
            }
        }
    }

    if fail_on_blocked && rows.iter().any(|row| row.status == RouteStatus::Blocked) {
        std::process::exit(1);
    }
    Ok(())
}
