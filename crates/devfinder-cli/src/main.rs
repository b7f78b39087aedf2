mod app;
mod logging;
mod navigation;
mod search;
mod status;
mod theme;
mod view;

use clap::{Parser, Subcommand};
use devfinder_core::Theme;

use crate::search::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "devfinder")]
#[command(about = "Look up public developer profiles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for a profile handle
    Search {
        /// Handle to look up (surrounding whitespace is ignored)
        handle: String,
        /// Print the view state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load the profile named by a page URL's `user` parameter
    Open {
        /// Page URL, e.g. https://devfinder.local/?user=octocat
        url: String,
        /// Print the view state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read handles from stdin and render the latest result
    Interactive,
    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ThemeCommands {
    /// Show the displayed theme and where it comes from
    Show,
    /// Flip between light and dark
    Toggle,
    /// Simulate a change of the system color scheme
    System {
        /// New system preference: light or dark
        theme: Theme,
    },
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = devfinder_core::load_app_config()?;
    logging::init_logging(config.env, &config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search { handle, json }) => {
            search::run_search(&config, &handle, output_format(json)).await?;
        }
        Some(Commands::Open { url, json }) => {
            search::run_open(&config, &url, output_format(json)).await?;
        }
        Some(Commands::Interactive) => search::run_interactive(&config).await?,
        Some(Commands::Theme { command }) => match command {
            ThemeCommands::Show => theme::run_theme_show(&config)?,
            ThemeCommands::Toggle => theme::run_theme_toggle(&config)?,
            ThemeCommands::System { theme: system } => {
                theme::run_theme_system(&config, system)?;
            }
        },
        None => {
            println!("devfinder: no profile loaded; try `devfinder search <HANDLE>`");
            theme::run_theme_show(&config)?;
        }
    }

    Ok(())
}
