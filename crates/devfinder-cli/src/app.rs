//! Search and location-load flows tying the fetcher to the display.
//!
//! Lookups run as spawned tasks and report back over a channel. Each one
//! carries the generation token taken at dispatch; a completion whose token
//! is no longer current is dropped without touching the view or status.

use devfinder_core::{Handle, Profile};
use devfinder_github::{Generation, LookupError, LookupGeneration, ProfileFetcher};
use tokio::sync::mpsc;

use crate::navigation::NavigationSync;
use crate::status::{StatusRegion, INVALID_HANDLE_MESSAGE};
use crate::view::{Renderer, ViewConfig, ViewState};

/// Result of one dispatched lookup, tagged with its generation.
#[derive(Debug)]
pub struct Completion {
    pub generation: Generation,
    pub handle: Handle,
    pub result: Result<Profile, LookupError>,
}

/// What [`App::apply`] did with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    Reported(String),
    Discarded,
}

pub struct App {
    fetcher: ProfileFetcher,
    renderer: Renderer,
    status: StatusRegion,
    navigation: NavigationSync,
    search_input: String,
    generation: LookupGeneration,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl App {
    #[must_use]
    pub fn new(fetcher: ProfileFetcher, view_config: ViewConfig, navigation: NavigationSync) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            fetcher,
            renderer: Renderer::new(view_config),
            status: StatusRegion::default(),
            navigation,
            search_input: String::new(),
            generation: LookupGeneration::new(),
            tx,
            rx,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        self.renderer.view()
    }

    #[must_use]
    pub fn view_config(&self) -> &ViewConfig {
        self.renderer.config()
    }

    #[must_use]
    pub fn status(&self) -> &StatusRegion {
        &self.status
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationSync {
        &self.navigation
    }

    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Search-box submission: clears the status, validates, records the
    /// handle in the location and dispatches a lookup.
    ///
    /// Returns the dispatched generation, or `None` when the input was
    /// rejected. A rejection still starts a new generation so that older
    /// in-flight lookups cannot render over the error.
    pub fn submit(&mut self, input: &str) -> Option<Generation> {
        self.status.clear();
        self.search_input = input.to_owned();
        match Handle::parse(input) {
            Ok(handle) => {
                self.navigation.push_user(&handle);
                Some(self.dispatch(handle))
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejected search input");
                self.generation.begin();
                self.status.report(INVALID_HANDLE_MESSAGE);
                None
            }
        }
    }

    /// Initial load from the page location. Fills the search box from the
    /// `user` parameter and dispatches without pushing history. The status
    /// region is left as it is.
    pub fn load_from_location(&mut self) -> Option<Generation> {
        let requested = self.navigation.requested_user()?;
        self.search_input.clone_from(&requested);
        match Handle::parse(&requested) {
            Ok(handle) => Some(self.dispatch(handle)),
            Err(e) => {
                tracing::debug!(error = %e, "rejected user parameter");
                self.generation.begin();
                self.status.report(INVALID_HANDLE_MESSAGE);
                None
            }
        }
    }

    fn dispatch(&mut self, handle: Handle) -> Generation {
        let generation = self.generation.begin();
        let fetcher = self.fetcher.clone();
        let tx = self.tx.clone();
        tracing::debug!(%handle, generation = generation.get(), "dispatching lookup");
        tokio::spawn(async move {
            let result = fetcher.lookup(&handle).await;
            // The receiver lives as long as the app; a send error only
            // happens during shutdown.
            let _ = tx.send(Completion {
                generation,
                handle,
                result,
            });
        });
        generation
    }

    /// Waits for the next completion from any in-flight lookup.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.rx.recv().await
    }

    /// Applies a completion to the view or the status region, unless a
    /// newer lookup has been dispatched since.
    pub fn apply(&mut self, completion: Completion) -> Applied {
        if !self.generation.is_current(completion.generation) {
            tracing::debug!(
                handle = %completion.handle,
                generation = completion.generation.get(),
                current = self.generation.current().get(),
                "discarding stale lookup result"
            );
            return Applied::Discarded;
        }

        match completion.result {
            Ok(profile) => {
                self.renderer.render(&profile);
                tracing::info!(handle = %profile.handle, "rendered profile");
                Applied::Rendered
            }
            Err(e) => {
                let message = e.user_message();
                tracing::info!(handle = %completion.handle, error = %e, "lookup failed");
                self.status.report(message.clone());
                Applied::Reported(message)
            }
        }
    }

    /// Applies completions, stale ones included, until the one for
    /// `target` arrives, and returns what happened to it.
    pub async fn settle(&mut self, target: Generation) -> Option<Applied> {
        loop {
            let completion = self.next_completion().await?;
            let is_target = completion.generation == target;
            let applied = self.apply(completion);
            if is_target {
                return Some(applied);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
