//! Recommendation presentation
//!
//! Turns a category and a loaded dataset into a [`RenderOutcome`]: either a
//! list of cards or a single message. Nothing here touches the display; the
//! outcome is applied by [`crate::display::ResultsArea`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TravelRecError;
use crate::classifier::Category;
use crate::config::TravelRecConfig;
use crate::error::DEFAULT_MIN_RESULTS;
use crate::models::{Dataset, RecommendationItem};

/// Image shown when a recommendation image fails to load
pub const DEFAULT_FALLBACK_IMAGE: &str = "nueva-york.jpg";

/// Image part of a card, with its load-failure fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
    pub fallback: String,
    fallback_applied: bool,
}

impl CardImage {
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            fallback: fallback.into(),
            fallback_applied: false,
        }
    }

    /// Swap in the fallback after the current source failed to load.
    ///
    /// Returns `false` once the fallback is already showing, so a broken
    /// fallback does not keep re-triggering.
    pub fn on_load_error(&mut self) -> bool {
        if self.fallback_applied {
            return false;
        }
        self.src = self.fallback.clone();
        self.fallback_applied = true;
        true
    }
}

/// One rendered recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub image: CardImage,
    pub title: String,
    pub description: String,
}

impl Card {
    #[must_use]
    pub fn from_item(item: &RecommendationItem, fallback_image: &str) -> Self {
        Self {
            image: CardImage::new(&item.image_url, &item.name, fallback_image),
            title: item.name.clone(),
            description: item.description.clone(),
        }
    }
}

/// What a finished search shows: cards or one message, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderOutcome {
    Cards(Vec<Card>),
    Message(String),
}

impl RenderOutcome {
    #[must_use]
    pub fn from_error(error: &TravelRecError) -> Self {
        RenderOutcome::Message(error.user_message())
    }
}

/// Select the display items for a category.
///
/// Countries contribute their cities, in country order and then city order.
/// Items without a name are skipped.
#[must_use]
pub fn select(category: Category, dataset: &Dataset) -> Vec<RecommendationItem> {
    let items: Box<dyn Iterator<Item = &RecommendationItem>> = match category {
        Category::Beaches => Box::new(dataset.beaches.iter()),
        Category::Temples => Box::new(dataset.temples.iter()),
        Category::Countries => Box::new(
            dataset
                .countries
                .iter()
                .flat_map(|country| country.cities.iter()),
        ),
    };

    items
        .filter(|item| !item.name.trim().is_empty())
        .cloned()
        .collect()
}

/// Builds render outcomes under a minimum-result policy
#[derive(Debug, Clone)]
pub struct Presenter {
    min_results: usize,
    fallback_image: String,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_RESULTS, DEFAULT_FALLBACK_IMAGE)
    }
}

impl Presenter {
    /// A minimum below two is raised to two: a lone card is never shown.
    #[must_use]
    pub fn new(min_results: usize, fallback_image: impl Into<String>) -> Self {
        Self {
            min_results: min_results.max(DEFAULT_MIN_RESULTS),
            fallback_image: fallback_image.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &TravelRecConfig) -> Self {
        Self::new(config.display.min_results, config.display.fallback_image.clone())
    }

    /// Cards for the category, or an error when there are too few to show
    pub fn cards(&self, category: Category, dataset: &Dataset) -> crate::Result<Vec<Card>> {
        let items = select(category, dataset);
        debug!("Selected {} {} items", items.len(), category);

        if items.len() < self.min_results {
            return Err(TravelRecError::InsufficientResults {
                found: items.len(),
                required: self.min_results,
            });
        }

        Ok(items
            .iter()
            .map(|item| Card::from_item(item, &self.fallback_image))
            .collect())
    }

    #[must_use]
    pub fn present(&self, category: Category, dataset: &Dataset) -> RenderOutcome {
        match self.cards(category, dataset) {
            Ok(cards) => RenderOutcome::Cards(cards),
            Err(e) => RenderOutcome::from_error(&e),
        }
    }
}

/// Present with the default policy: at least two items, default fallback image
#[must_use]
pub fn present(category: Category, dataset: &Dataset) -> RenderOutcome {
    Presenter::default().present(category, dataset)
}
