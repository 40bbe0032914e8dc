//! Recommendation dataset model
//!
//! Mirrors the JSON document served as the recommendation dataset. Decoding is
//! tolerant of missing or `null` fields: an absent category is simply empty.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Result, TravelRecError};

/// A single displayable recommendation: a beach, a temple or a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    /// Empty when the document has no usable name; such items are never shown
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Image location, may be unreachable at display time
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl RecommendationItem {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            description: description.into(),
        }
    }
}

/// A country only contributes its cities to recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cities: Vec<RecommendationItem>,
}

/// The whole recommendation dataset, loaded once per search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub beaches: Vec<RecommendationItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub temples: Vec<RecommendationItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<Country>,
}

impl Dataset {
    /// Decode a dataset document.
    ///
    /// Anything that is not a JSON object at the top level, or whose present
    /// fields have the wrong shape, is a [`TravelRecError::Parse`].
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| TravelRecError::parse(e.to_string()))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_document() {
        let json = br#"{
            "countries": [
                {
                    "id": 1,
                    "name": "Australia",
                    "cities": [
                        {"name": "Sydney, Australia", "imageUrl": "sydney.jpg", "description": "Harbour city."},
                        {"name": "Melbourne, Australia", "imageUrl": "melbourne.jpg", "description": "Culture."}
                    ]
                }
            ],
            "temples": [
                {"id": 1, "name": "Angkor Wat, Cambodia", "imageUrl": "angkor.jpg", "description": "Khmer."}
            ],
            "beaches": []
        }"#;

        let dataset = Dataset::from_json(json).unwrap();
        assert!(dataset.beaches.is_empty());
        assert_eq!(dataset.temples.len(), 1);
        assert_eq!(dataset.temples[0].image_url, "angkor.jpg");
        assert_eq!(dataset.countries[0].name, "Australia");
        assert_eq!(dataset.countries[0].cities.len(), 2);
    }

    #[test]
    fn test_missing_and_null_collections_are_empty() {
        let dataset = Dataset::from_json(br#"{"temples": null, "countries": [{"name": "Japan"}]}"#)
            .unwrap();
        assert!(dataset.beaches.is_empty());
        assert!(dataset.temples.is_empty());
        assert_eq!(dataset.countries.len(), 1);
        assert!(dataset.countries[0].cities.is_empty());

        assert_eq!(Dataset::from_json(b"{}").unwrap(), Dataset::default());
    }

    #[test]
    fn test_optional_item_fields_default_to_empty() {
        let dataset = Dataset::from_json(br#"{"beaches": [{"name": "Bora Bora"}]}"#).unwrap();
        assert_eq!(dataset.beaches[0], RecommendationItem::new("Bora Bora", "", ""));
    }

    #[test]
    fn test_nameless_item_does_not_fail_the_document() {
        let dataset = Dataset::from_json(
            br#"{
                "beaches": [{"name": "A"}, {"name": "B"}],
                "temples": [{"imageUrl": "t.jpg"}, {"name": null, "description": "d"}]
            }"#,
        )
        .unwrap();
        assert_eq!(dataset.beaches.len(), 2);
        assert_eq!(dataset.temples.len(), 2);
        assert!(dataset.temples.iter().all(|t| t.name.is_empty()));
    }

    #[test]
    fn test_undecodable_payload_is_parse_error() {
        for payload in [&b"not json"[..], &b"[1, 2]"[..], &b"{\"beaches\": 5}"[..], &b""[..]] {
            let err = Dataset::from_json(payload).unwrap_err();
            assert!(matches!(err, TravelRecError::Parse { .. }), "payload {payload:?}");
        }
    }
}
