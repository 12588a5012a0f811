//! Payloads exchanged with the classification service.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Aggregate counts reported by `/api/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Statistics {
    pub total_documents: u64,
    /// Category counts in the order the server emitted them.
    #[serde(deserialize_with = "ordered_counts")]
    pub by_category: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

impl CategoryCount {
    pub fn new(category: impl Into<String>, count: u64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// A single classified document as listed by `/api/documents`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DocumentRecord {
    pub filename: String,
    pub predicted_category: String,
    pub confidence_score: f64,
    pub language: String,
    pub modified_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRequest<'a> {
    pub path: &'a str,
}

/// Successful reply to `POST /api/scan`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanAccepted {
    pub message: String,
}

/// Error body the service attaches to rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Reads a JSON object into a list without losing key order.
fn ordered_counts<'de, D>(deserializer: D) -> Result<Vec<CategoryCount>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedCounts;

    impl<'de> Visitor<'de> for OrderedCounts {
        type Value = Vec<CategoryCount>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of category names to document counts")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut counts = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((category, count)) = map.next_entry::<String, u64>()? {
                counts.push(CategoryCount { category, count });
            }
            Ok(counts)
        }
    }

    deserializer.deserialize_map(OrderedCounts)
}
