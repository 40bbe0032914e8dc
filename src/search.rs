//! Search page controller
//!
//! `on_search` and `on_clear` are the only entry points that change what the
//! results area shows. A search walks
//! `Classifying -> Loading -> Presenting` and ends in exactly one visible
//! outcome; the area is cleared before anything else happens.
//!
//! Searches may overlap (each one awaits its own dataset load). The latest
//! started search or clear wins: a search whose load finishes after a newer
//! action began discards its outcome instead of overwriting the newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::TravelRecError;
use crate::classifier::classify;
use crate::display::ResultsArea;
use crate::loader::DatasetLoader;
use crate::presenter::{Presenter, RenderOutcome};

/// How a search action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Empty or unrecognized input, message shown
    NoCategory,
    /// Dataset could not be fetched or decoded, message shown
    LoadError,
    /// Too few items in the category, message shown
    Insufficient,
    /// Cards shown
    Rendered,
    /// A newer search or clear started while this one was loading
    Superseded,
}

/// Search box, results container and the pipeline between them
pub struct SearchPage {
    loader: Box<dyn DatasetLoader>,
    presenter: Presenter,
    input: Mutex<String>,
    results: Mutex<ResultsArea>,
    generation: AtomicU64,
}

impl SearchPage {
    pub fn new(loader: Box<dyn DatasetLoader>, presenter: Presenter) -> Self {
        Self {
            loader,
            presenter,
            input: Mutex::new(String::new()),
            results: Mutex::new(ResultsArea::Empty),
            generation: AtomicU64::new(0),
        }
    }

    /// Replace the search box text
    pub async fn set_input(&self, text: impl Into<String>) {
        *self.input.lock().await = text.into();
    }

    pub async fn input(&self) -> String {
        self.input.lock().await.clone()
    }

    /// Snapshot of the results container
    pub async fn results(&self) -> ResultsArea {
        self.results.lock().await.clone()
    }

    /// Run the search pipeline for the current input text
    pub async fn on_search(&self) -> SearchState {
        let ticket = self.next_generation();
        let raw_input = self.input().await;

        // Stale content must never stay visible while the dataset loads.
        if !self.clear_for(ticket).await {
            return SearchState::Superseded;
        }

        let category = match classify(&raw_input).into_category() {
            Ok(category) => category,
            Err(e) => return self.report(ticket, &e, SearchState::NoCategory).await,
        };
        info!("Searching {} recommendations", category);

        let dataset = match self.loader.load().await {
            Ok(dataset) => dataset,
            Err(e) => return self.report(ticket, &e, SearchState::LoadError).await,
        };

        let cards = match self.presenter.cards(category, &dataset) {
            Ok(cards) => cards,
            Err(e) => return self.report(ticket, &e, SearchState::Insufficient).await,
        };
        info!("Rendering {} {} cards", cards.len(), category);

        if self.show(ticket, RenderOutcome::Cards(cards)).await {
            SearchState::Rendered
        } else {
            SearchState::Superseded
        }
    }

    /// Empty the results area, and the search box when `clear_input` is set
    pub async fn on_clear(&self, clear_input: bool) {
        self.next_generation();
        self.results.lock().await.clear();
        if clear_input {
            self.input.lock().await.clear();
        }
    }

    /// An image of the card at `index` failed to load
    pub async fn on_image_error(&self, index: usize) -> bool {
        self.results.lock().await.on_image_error(index)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Show the message for `error`, logging load failures for the operator
    async fn report(&self, ticket: u64, error: &TravelRecError, state: SearchState) -> SearchState {
        if error.is_load_failure() {
            error!("Loading dataset from {} failed: {}", self.loader.location(), error);
        } else {
            debug!("Search ended without cards: {}", error);
        }

        if self.show(ticket, RenderOutcome::from_error(error)).await {
            state
        } else {
            SearchState::Superseded
        }
    }

    /// Empty the results area unless a newer action has started since `ticket`
    async fn clear_for(&self, ticket: u64) -> bool {
        let mut results = self.results.lock().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!("Search #{} superseded before it started", ticket);
            return false;
        }
        results.clear();
        true
    }

    /// Apply an outcome unless a newer action has started since `ticket`
    async fn show(&self, ticket: u64, outcome: RenderOutcome) -> bool {
        let mut results = self.results.lock().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            warn!("Discarding outcome of superseded search #{}", ticket);
            return false;
        }
        results.apply(outcome);
        true
    }
}
