mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod gateway;
mod logging;
mod scan;
mod session;
mod snapshot;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::gateway::{Gateway, GatewayClient};
use crate::scan::{ScanOrchestrator, StatusTone, submit_scan};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::dashboard::views::{DocumentTable, ScanPanel, StatsPanel, TableRow};
use crate::ui::dashboard::views::{render_documents, render_stats};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Watch the classification service in a live dashboard
    Dashboard {
        /// Base URL of the classification service
        #[arg(long, value_name = "URL")]
        server: Option<String>,

        /// Refresh interval in milliseconds
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// Print events to the console instead of drawing the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Disable background colour in the dashboard
        #[arg(long = "no-background", action = clap::ArgAction::SetTrue)]
        no_background: bool,
    },
    /// Start a scan of a directory known to the service
    Scan {
        /// Directory to scan, as listed by `locations`
        path: String,

        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },
    /// Print the current statistics and documents
    Status {
        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },
    /// List the directories the service can scan
    Locations {
        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },
    /// Save the classification results as CSV
    Export {
        /// Destination file
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,

        #[arg(long, value_name = "URL")]
        server: Option<String>,
    },
    /// Manage the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Save the default server URL
    SetServer {
        /// Base URL of the classification service
        url: String,
    },
    /// Show the effective configuration
    Show,
    /// Remove the configuration file
    Clear,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(e) = run(args).await {
        print_cmd_error!("Command failed", "{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path)?;

    match args.command {
        Command::Dashboard {
            server,
            interval_ms,
            headless,
            no_background,
        } => {
            let environment = config.environment_from(server.as_deref())?;
            let poll_interval = config.poll_interval(interval_ms);
            let session = setup_session(&environment, poll_interval)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background).await
            }
        }
        Command::Scan { path, server } => {
            logging::init_console_logger();
            let environment = config.environment_from(server.as_deref())?;
            let gateway: Arc<dyn Gateway> = Arc::new(GatewayClient::new(&environment)?);
            run_scan(gateway, &path).await
        }
        Command::Status { server } => {
            logging::init_console_logger();
            let gateway = client_for(&config, server.as_deref())?;
            print_status(&gateway).await
        }
        Command::Locations { server } => {
            logging::init_console_logger();
            let gateway = client_for(&config, server.as_deref())?;
            let mut panel = ScanPanel::default();
            let result = gateway.fetch_scan_locations().await;
            panel.apply_locations(&result.as_ref().map(Vec::clone).map_err(|e| e.to_string()));
            for option in panel.selector.options() {
                if option.value.is_some() {
                    println!("{}", option.label);
                } else {
                    print_cmd_warn!("Scan locations", "{}", option.label);
                }
            }
            result?;
            Ok(())
        }
        Command::Export { output, server } => {
            logging::init_console_logger();
            let gateway = client_for(&config, server.as_deref())?;
            let csv = gateway.export_csv().await?;
            tokio::fs::write(&output, csv).await?;
            print_cmd_success!("Export complete", "{}", output.display());
            Ok(())
        }
        Command::Config { action } => match action {
            ConfigAction::SetServer { url } => {
                let environment = url.parse::<Environment>()?;
                let mut updated = config;
                updated.server_url = environment.server_url();
                updated
                    .save(&config_path)
                    .map_err(|e| format!("Failed to save config: {}", e))?;
                print_cmd_success!("Server saved", "{}", updated.server_url);
                Ok(())
            }
            ConfigAction::Show => {
                let environment = config.environment_from(None)?;
                print_cmd_info!("Config file", "{}", config_path.display());
                print_cmd_info!("Server", "{} ({})", environment.server_url(), environment);
                print_cmd_info!(
                    "Refresh interval",
                    "{} ms",
                    config.poll_interval(None).as_millis()
                );
                Ok(())
            }
            ConfigAction::Clear => {
                Config::clear(&config_path)?;
                print_cmd_success!("Configuration cleared", "{}", config_path.display());
                Ok(())
            }
        },
    }
}

fn client_for(config: &Config, server: Option<&str>) -> Result<GatewayClient, Box<dyn Error>> {
    let environment = config.environment_from(server)?;
    Ok(GatewayClient::new(&environment)?)
}

/// Runs one pass of the scan state machine and prints the resulting status line.
async fn run_scan(gateway: Arc<dyn Gateway>, path: &str) -> Result<(), Box<dyn Error>> {
    let mut panel = ScanPanel::default();
    panel.apply_locations(&Ok(vec![path.to_string()]));

    let mut orchestrator = ScanOrchestrator::new(Arc::clone(&gateway));
    if let Some(path) = orchestrator.activate(&mut panel) {
        print_cmd_info!("Scan", "{}", panel.status.text);
        let outcome = submit_scan(gateway.as_ref(), &path).await;
        orchestrator.settle(outcome, &mut panel);
    }

    match panel.status.tone {
        StatusTone::Neutral => {
            print_cmd_success!("Scan", "{}", panel.status.text);
            Ok(())
        }
        StatusTone::Error => Err(panel.status.text.into()),
    }
}

async fn print_status(gateway: &GatewayClient) -> Result<(), Box<dyn Error>> {
    let (stats, documents) =
        futures::try_join!(gateway.fetch_stats(), gateway.fetch_documents())?;

    let mut stats_panel = StatsPanel::default();
    render_stats(&mut stats_panel, &stats);
    let mut table = DocumentTable::default();
    render_documents(&mut table, &documents);

    print_cmd_info!("Total documents", "{}", stats_panel.total_label());
    if let Some(chart) = &stats_panel.chart {
        for entry in chart.bars() {
            println!("  {:<24} {}", entry.category, entry.count);
        }
    }

    for row in table.rows() {
        match row {
            TableRow::Placeholder(text) => println!("{}", text),
            TableRow::Document(doc) => println!(
                "{:<32} {:<16} {:>7} [{}] {:<4} {}",
                doc.name,
                doc.category,
                doc.confidence.label,
                doc.confidence.severity,
                doc.language,
                doc.modified
            ),
        }
    }
    Ok(())
}
