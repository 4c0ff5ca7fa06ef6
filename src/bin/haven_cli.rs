//! Haven Command Line Interface
//!
//! Drives the browser controllers against a live catalog backend.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a shared link and list what it points at
//! haven browse --link '?reality=Normal&galaxy=Euclid&rx=5&ry=-3&rz=12'
//!
//! # Drill down explicitly, filtered to one community
//! haven browse --reality Normal --galaxy Euclid --view-all --tag Haven
//!
//! # Debounced search (waits out the quiet period, then prints hits)
//! haven search "Odyalutai"
//!
//! # What the configured role may do
//! HAVEN_ROLE=sub_admin haven features
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use haven_nav::{Breadcrumb, CommunityTag, Feature, Region};
use haven_ui::{
    telemetry, BrowserKind, HavenApi, HavenConfig, HttpClient, Listing, SearchController,
    SystemsBrowser,
};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "haven")]
#[command(version = "0.1.0")]
#[command(about = "Browse and search the Haven star-system catalog")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// Show breadcrumbs and the listing for a drill-down position
    Browse {
        /// Shared link query string (e.g. "?reality=Normal&galaxy=Euclid")
        #[arg(long)]
        link: Option<String>,

        #[arg(long)]
        reality: Option<String>,

        #[arg(long)]
        galaxy: Option<String>,

        /// Region coordinates as X,Y,Z
        #[arg(long, value_parser = parse_region, allow_hyphen_values = true)]
        region: Option<Region>,

        /// List every system in the galaxy instead of one region
        #[arg(long, conflicts_with = "region")]
        view_all: bool,

        /// Community filter: all, untagged, personal or a tag
        #[arg(long)]
        tag: Option<String>,

        /// Page of the systems list (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Browse discoveries instead of systems
        #[arg(long)]
        discoveries: bool,
    },

    /// Free-text system search
    Search {
        query: String,
    },

    /// List community tags
    Tags,

    /// Show the capability set of the configured role
    Features,
}

fn parse_region(s: &str) -> Result<Region, String> {
    Region::parse_coords(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = HavenConfig::from_env().context("Failed to load configuration")?;
    let format = cli.format;

    match cli.command {
        Commands::Features => {
            let features = config.session.role.features();
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&features)?),
                OutputFormat::Pretty => {
                    println!("{} {}", "Role:".bold(), config.session.role);
                    for feature in Feature::ALL {
                        let mark = if features.contains(&feature) {
                            "✓".green()
                        } else {
                            "✗".dimmed()
                        };
                        println!("  {} {:?}", mark, feature);
                    }
                }
            }
            Ok(())
        }

        Commands::Tags => {
            let api = connect(&config)?;
            let tags = api.discord_tags().await.context("Failed to fetch community tags")?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tags)?),
                OutputFormat::Pretty => {
                    for tag in &tags {
                        println!("  {:<16} {}", tag.tag.cyan(), tag.name);
                    }
                    println!("{} tags", tags.len());
                }
            }
            Ok(())
        }

        Commands::Search { query } => {
            let api = connect(&config)?;
            let mut search = SearchController::new(api, config.search);
            search.set_query(query);
            search.flush().await;

            let state = search.state();
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state.results)?),
                OutputFormat::Pretty => {
                    if state.results.is_empty() {
                        println!("{}", "No results".dimmed());
                    }
                    for hit in &state.results {
                        println!(
                            "  {} {} {}",
                            hit.name.bold(),
                            hit.galaxy.as_deref().unwrap_or("?").cyan(),
                            hit.glyph_code.as_deref().unwrap_or("").dimmed()
                        );
                    }
                }
            }
            Ok(())
        }

        Commands::Browse {
            link,
            reality,
            galaxy,
            region,
            view_all,
            tag,
            page,
            discoveries,
        } => {
            let api = connect(&config)?;
            let kind = if discoveries {
                BrowserKind::Discoveries
            } else {
                BrowserKind::Systems
            };
            let mut browser = SystemsBrowser::mount(
                kind,
                api,
                config.session.clone(),
                config.search,
                link.as_deref().unwrap_or(""),
            )?;

            if reality.is_some() {
                browser.select_reality(reality);
            }
            if galaxy.is_some() {
                browser.select_galaxy(galaxy);
            }
            if let Some(region) = region {
                browser.select_region(region);
            }
            if view_all {
                browser.enter_view_all_systems();
            }
            if let Some(tag) = tag {
                browser.set_community_tag(CommunityTag::from(tag));
            }

            let listing = browser.load_current_level().await;
            browser.set_page(page);

            match format {
                OutputFormat::Json => {
                    let out = serde_json::json!({
                        "level": browser.current_level(),
                        "breadcrumbs": browser.breadcrumbs(),
                        "query": browser.query_string(),
                        "listing": listing,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                OutputFormat::Pretty => {
                    println!("{}", render_breadcrumbs(&browser.breadcrumbs()));
                    println!(
                        "{} {}   {} ?{}",
                        "Level:".bold(),
                        browser.current_level(),
                        "Link:".bold(),
                        browser.query_string()
                    );
                    print_listing(&browser, &listing);
                }
            }
            Ok(())
        }
    }
}

fn connect(config: &HavenConfig) -> Result<Arc<dyn HavenApi>> {
    let client = HttpClient::new(config.api.clone()).context("Failed to create HTTP client")?;
    Ok(Arc::new(client))
}

fn render_breadcrumbs(crumbs: &[Breadcrumb]) -> String {
    crumbs
        .iter()
        .map(|c| {
            if c.active {
                c.label.bold().to_string()
            } else {
                c.label.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" › ")
}

fn print_listing(browser: &SystemsBrowser, listing: &Listing) {
    match listing {
        Listing::Realities(rows) => {
            for r in rows {
                println!("  {:<24} {:>6}", r.reality.cyan(), r.system_count);
            }
        }
        Listing::Galaxies(rows) => {
            for g in rows {
                println!("  {:<24} {:>6}", g.galaxy.cyan(), g.system_count);
            }
        }
        Listing::Regions(rows) => {
            for r in rows {
                let region = Region::from(r);
                println!(
                    "  {:<32} [{}, {}, {}] {:>6}",
                    region.label().cyan(),
                    r.region_x,
                    r.region_y,
                    r.region_z,
                    r.system_count
                );
            }
        }
        Listing::Systems(rows) => {
            let pagination = browser.pagination();
            for s in browser.page_of_systems(rows) {
                println!(
                    "  {:<32} {:<12} {}",
                    s.name.bold(),
                    s.discord_tag.as_deref().unwrap_or("-"),
                    s.glyph_code.as_deref().unwrap_or("").dimmed()
                );
            }
            println!(
                "{}",
                format!(
                    "page {}/{} ({} systems)",
                    pagination.page(),
                    pagination.page_count(),
                    pagination.total()
                )
                .dimmed()
            );
        }
    }
    if listing.is_empty() {
        println!("{}", "Nothing here".dimmed());
    }
}
