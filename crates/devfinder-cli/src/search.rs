//! Handlers for `search`, `open` and `interactive`.

use devfinder_core::AppConfig;
use devfinder_github::ProfileFetcher;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::{App, Applied};
use crate::navigation::NavigationSync;
use crate::theme;
use crate::view::{format_view, ViewConfig};

/// How a settled view is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn build_app(config: &AppConfig, page_url: &str) -> anyhow::Result<App> {
    let fetcher = ProfileFetcher::from_config(config)?;
    let navigation = NavigationSync::parse(page_url)?;
    Ok(App::new(fetcher, ViewConfig::default(), navigation))
}

/// Submits `input` as if typed into the search box and prints the result.
///
/// # Errors
///
/// Returns an error if the client cannot be built or output fails to
/// serialize. Lookup failures are shown in the status line, not returned.
pub(crate) async fn run_search(
    config: &AppConfig,
    input: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut app = build_app(config, &config.page_url)?;
    if let Some(token) = app.submit(input) {
        app.settle(token).await;
    }
    print_app(&app, format)
}

/// Loads the profile named by the `user` parameter of `url`, without
/// adding a history entry.
///
/// # Errors
///
/// Returns an error if `url` is not absolute or the client cannot be built.
pub(crate) async fn run_open(
    config: &AppConfig,
    url: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut app = build_app(config, url)?;
    match app.load_from_location() {
        Some(token) => {
            app.settle(token).await;
        }
        None if app.status().message().is_none() => {
            println!("no user parameter in {url}");
            return Ok(());
        }
        None => {}
    }
    print_app(&app, format)
}

/// Reads one handle per line from stdin. Lookups overlap freely; only the
/// newest one ever reaches the display. `:theme` toggles the theme and
/// `:quit` exits.
///
/// # Errors
///
/// Returns an error if the client cannot be built or stdin fails.
pub(crate) async fn run_interactive(config: &AppConfig) -> anyhow::Result<()> {
    let mut app = build_app(config, &config.page_url)?;
    if let Some(notice) = load_location_notice(&mut app) {
        println!("{notice}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("enter a handle, :theme to toggle the theme, :quit to exit");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "" => {}
                    ":quit" | ":q" => break,
                    ":theme" => theme::run_theme_toggle(config)?,
                    input => {
                        if app.submit(input).is_none() {
                            print_status(&app);
                        }
                    }
                }
            }
            Some(completion) = app.next_completion() => {
                match app.apply(completion) {
                    Applied::Rendered => {
                        print!("{}", format_view(app.view(), &app.view_config().unavailable_class));
                        println!("{}", app.navigation().location());
                    }
                    Applied::Reported(_) => print_status(&app),
                    Applied::Discarded => {}
                }
            }
        }
    }

    Ok(())
}

/// Runs the location load and returns the line to show for it: either
/// the handle being loaded or the status message it produced.
fn load_location_notice(app: &mut App) -> Option<String> {
    if app.load_from_location().is_some() {
        Some(format!("loading {}", app.search_input()))
    } else {
        status_line(app)
    }
}

fn status_line(app: &App) -> Option<String> {
    app.status().message().map(|message| format!("! {message}"))
}

fn print_status(app: &App) {
    if let Some(line) = status_line(app) {
        println!("{line}");
    }
}

fn print_app(app: &App, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "view": app.view(),
                "status": app.status().message(),
                "location": app.navigation().location().as_str(),
                "history": app
                    .navigation()
                    .history()
                    .iter()
                    .map(reqwest::Url::as_str)
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            print!(
                "{}",
                format_view(app.view(), &app.view_config().unavailable_class)
            );
            print_status(app);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use devfinder_github::GithubClient;
    use wiremock::MockServer;

    use super::*;

    async fn app_at(page_url: &str) -> (MockServer, App) {
        let api = MockServer::start().await;
        let client =
            GithubClient::with_base_urls(&api.uri(), &api.uri(), None, 5, "devfinder-test/0.1")
                .expect("client construction should not fail");
        let app = App::new(
            ProfileFetcher::new(client, false),
            ViewConfig::default(),
            NavigationSync::parse(page_url).expect("valid page URL"),
        );
        (api, app)
    }

    #[tokio::test]
    async fn location_notice_shows_invalid_user_message() {
        let (_api, mut app) = app_at("https://devfinder.local/?user=not_valid").await;
        assert_eq!(
            load_location_notice(&mut app).as_deref(),
            Some("! Invalid username")
        );
    }

    #[tokio::test]
    async fn location_notice_shows_blank_user_message() {
        let (_api, mut app) = app_at("https://devfinder.local/?user=%20").await;
        assert_eq!(
            load_location_notice(&mut app).as_deref(),
            Some("! Invalid username")
        );
    }

    #[tokio::test]
    async fn location_notice_names_dispatched_handle() {
        let (_api, mut app) = app_at("https://devfinder.local/?user=%20octocat").await;
        assert_eq!(
            load_location_notice(&mut app).as_deref(),
            Some("loading octocat")
        );
    }

    #[tokio::test]
    async fn location_notice_is_silent_without_user() {
        let (_api, mut app) = app_at("https://devfinder.local/").await;
        assert_eq!(load_location_notice(&mut app), None);
    }
}
