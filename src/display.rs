//! Results area
//!
//! The only mutable display state: what the results container currently
//! holds. Every outcome replaces the previous contents wholesale.

use std::fmt::Display;

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::presenter::{Card, RenderOutcome};

/// Contents of the results container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultsArea {
    #[default]
    Empty,
    Cards(Vec<Card>),
    Message(String),
}

impl ResultsArea {
    /// Drop whatever is shown
    pub fn clear(&mut self) {
        *self = ResultsArea::Empty;
    }

    /// Replace the contents with a finished outcome
    pub fn apply(&mut self, outcome: RenderOutcome) {
        *self = match outcome {
            RenderOutcome::Cards(cards) => ResultsArea::Cards(cards),
            RenderOutcome::Message(message) => ResultsArea::Message(message),
        };
    }

    /// An image of the card at `index` failed to load.
    ///
    /// Returns whether the card switched to its fallback image.
    pub fn on_image_error(&mut self, index: usize) -> bool {
        let ResultsArea::Cards(cards) = self else {
            return false;
        };
        match cards.get_mut(index) {
            Some(card) => {
                let swapped = card.image.on_load_error();
                if swapped {
                    debug!("Image for '{}' replaced by {}", card.title, card.image.src);
                }
                swapped
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, ResultsArea::Empty)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            ResultsArea::Cards(cards) => cards,
            _ => &[],
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            ResultsArea::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Markup for the results container's inner HTML
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            ResultsArea::Empty => String::new(),
            ResultsArea::Message(message) => {
                format!(r#"<p class="results-message">{}</p>"#, encode_text(message))
            }
            ResultsArea::Cards(cards) => cards.iter().map(card_html).collect::<Vec<_>>().join("\n"),
        }
    }
}

fn card_html(card: &Card) -> String {
    // The page swaps to the fallback itself; clearing onerror stops a loop on a broken fallback.
    let onerror = format!(
        "this.onerror=null;this.src='{}';",
        card.image.fallback.replace('\\', "\\\\").replace('\'', "\\'")
    );
    format!(
        concat!(
            r#"<div class="rec-card">"#,
            r#"<div class="rec-image"><img src="{src}" alt="{alt}" onerror="{onerror}"></div>"#,
            r#"<div class="rec-content"><h3>{title}</h3><p>{description}</p></div>"#,
            "</div>"
        ),
        src = encode_double_quoted_attribute(&card.image.src),
        alt = encode_double_quoted_attribute(&card.image.alt),
        onerror = encode_double_quoted_attribute(&onerror),
        title = encode_text(&card.title),
        description = encode_text(&card.description),
    )
}

impl Display for ResultsArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultsArea::Empty => Ok(()),
            ResultsArea::Message(message) => writeln!(f, "{message}"),
            ResultsArea::Cards(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}. {}", index + 1, card.title)?;
                    writeln!(f, "   🖼️ {}", card.image.src)?;
                    writeln!(f, "   {}", card.description)?;
                }
                Ok(())
            }
        }
    }
}
