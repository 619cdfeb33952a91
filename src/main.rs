use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use actor_showcase::{
    api::{ApiClient, ApiError},
    cli::{self, Cli, Commands},
    config::Config,
    models::{ActorFilter, ActorStats},
    showcase_tui::{self, app::Screen, ActorsFetch, App},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?
        .with_overrides(cli.api_url.as_deref(), cli.theme);
    config.validate()?;

    let print_mode = cli.is_print_mode();
    let _guard = init_logging(&config, print_mode)?;

    info!("Using API at {}", config.api_base_url);
    let client = ApiClient::new(&config).context("Failed to build HTTP client")?;

    if print_mode {
        let command = cli.command.unwrap_or(Commands::List {
            country: None,
            winners: false,
        });
        if let Err(e) = handle_cli_command(command, &client).await {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    match run_interactive(config, client, cli.command).await {
        Ok(()) => info!("TUI exited successfully"),
        Err(e) => {
            error!("TUI failed: {:#}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Log to a file always, and to stderr in print mode so the TUI stays clean
fn init_logging(config: &Config, print_mode: bool) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let directory = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = config
        .log_file
        .file_name()
        .context("Log file path has no file name")?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("actor_showcase=info"))
    };

    let stderr_layer = print_mode.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(filter())
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(filter()),
        )
        .init();

    Ok(guard)
}

async fn run_interactive(config: Config, client: ApiClient, command: Option<Commands>) -> Result<()> {
    showcase_tui::run_tui(config, Arc::new(client), |app| {
        if let Some(ref command) = command {
            handle_startup_command(app, command);
        }
    })
    .await
}

/// Apply command line arguments to a freshly started TUI
fn handle_startup_command(app: &mut App, command: &Commands) {
    match command {
        Commands::List { .. } => {
            app.actors.filter = command.filter();
            if let Some(description) = app.actors.filter.describe() {
                info!("Starting with filter: {}", description);
            }
        }
        Commands::Stats => app.navigate_to_screen(Screen::Stats),
        Commands::Show { .. } | Commands::Status => {}
    }
}

/// Handle CLI mode commands - print output and exit
async fn handle_cli_command(command: Commands, client: &ApiClient) -> Result<()> {
    match command {
        Commands::List { .. } | Commands::Stats => {
            let filter = command.filter();
            let mut fetch = ActorsFetch::mount(Arc::new(client.clone()));
            fetch.settle().await;

            if command == Commands::Stats {
                if let Some(message) = fetch.error_message() {
                    anyhow::bail!("{}", message);
                }
                print!("{}", cli::render_stats(&ActorStats::from_actors(fetch.records())));
            } else {
                print_listing(&fetch, &filter)?;
            }
        }

        Commands::Show { id } => match client.fetch_actor(id).await {
            Ok(actor) => {
                let card = showcase_tui::components::ActorCard::new(&actor);
                for line in card.text_lines() {
                    println!("{}", line);
                }
            }
            Err(ApiError::NotFound(id)) => anyhow::bail!("Actor {} not found", id),
            Err(e) => return Err(e.into()),
        },

        Commands::Status => {
            let status = client
                .check_status()
                .await
                .with_context(|| format!("API not reachable at {}", client.base_url()))?;
            println!("✓ API reachable at {}", client.base_url());
            if let Some(message) = status.message {
                println!("  {}", message);
            }
            if let Some(docs) = status.docs {
                println!("  Docs: {}", docs);
            }
        }
    }

    Ok(())
}

fn print_listing(fetch: &ActorsFetch, filter: &ActorFilter) -> Result<()> {
    let text = cli::render_actor_list(fetch.records(), fetch.error_message(), filter)?;
    println!("{}", text);
    Ok(())
}
