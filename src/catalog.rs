//! Artwork dataset loading.
//!
//! The catalog is a JSON array of records, read once at startup and never
//! mutated afterwards:
//!
//! ```json
//! [
//!   {
//!     "id": "1",
//!     "title": "Grandmother",
//!     "description": "Charcoal study",
//!     "imagePath": "/images/grandmother.jpg",
//!     "category": "Drawing",
//!     "tags": ["portrait", "charcoal"],
//!     "date": "2024-02-11",
//!     "width": 1200,
//!     "height": 1600
//!   }
//! ]
//! ```
//!
//! ## Validation
//!
//! Bad records are skipped, not fatal, so one typo in the dataset does not
//! take the whole gallery down:
//!
//! - A record missing any of `id`, `title`, `description`, `imagePath`,
//!   `category`, `tags` or `date` is skipped.
//! - A record whose `id` was already seen is skipped (first one wins).
//! - A record that is not an object at all is skipped.
//!
//! Every skip is logged and listed in the returned [`LoadReport`]. Only an
//! unreadable file or a document that is not a JSON array is an error.

use crate::types::ArtworkItem;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Record shape before validation: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtwork {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    image_path: Option<String>,
    category: Option<String>,
    tags: Option<Vec<String>>,
    date: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

impl RawArtwork {
    /// Promote to an [`ArtworkItem`], or name the first missing field.
    fn into_item(self) -> Result<ArtworkItem, SkipReason> {
        let missing = SkipReason::MissingField;
        Ok(ArtworkItem {
            id: self.id.ok_or(missing("id"))?,
            title: self.title.ok_or(missing("title"))?,
            description: self.description.ok_or(missing("description"))?,
            image_path: self.image_path.ok_or(missing("imagePath"))?,
            category: self.category.ok_or(missing("category"))?,
            tags: self.tags.ok_or(missing("tags"))?,
            date: self.date.ok_or(missing("date"))?,
            width: self.width,
            height: self.height,
        })
    }
}

/// Why a record was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingField(&'static str),
    DuplicateId(String),
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingField(field) => write!(f, "missing field '{field}'"),
            SkipReason::DuplicateId(id) => write!(f, "duplicate id '{id}'"),
            SkipReason::Malformed(msg) => write!(f, "malformed record: {msg}"),
        }
    }
}

/// A record that did not make it into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 0-based position in the source array
    pub position: usize,
    pub reason: SkipReason,
}

/// Outcome of a load besides the catalog itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records in the source document
    pub records: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn loaded(&self) -> usize {
        self.records - self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// The in-memory artwork collection, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ArtworkItem>,
}

impl Catalog {
    /// Build from already-validated items.
    pub fn new(items: Vec<ArtworkItem>) -> Self {
        Self { items }
    }

    /// Read and validate a dataset file.
    pub fn load(path: &Path) -> Result<(Self, LoadReport), CatalogError> {
        let content = fs::read_to_string(path)?;
        let (catalog, report) = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            loaded = report.loaded(),
            skipped = report.skipped.len(),
            "catalog loaded"
        );
        Ok((catalog, report))
    }

    /// Parse and validate a dataset document.
    pub fn from_json(json: &str) -> Result<(Self, LoadReport), CatalogError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let mut report = LoadReport {
            records: records.len(),
            skipped: Vec::new(),
        };
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(records.len());

        for (position, record) in records.into_iter().enumerate() {
            match validate(record, &seen) {
                Ok(item) => {
                    seen.insert(item.id.clone());
                    items.push(item);
                }
                Err(reason) => {
                    tracing::warn!(position, "skipping record: {reason}");
                    report.skipped.push(SkippedRecord { position, reason });
                }
            }
        }

        Ok((Self { items }, report))
    }

    pub fn items(&self) -> &[ArtworkItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ArtworkItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

fn validate(record: serde_json::Value, seen: &HashSet<String>) -> Result<ArtworkItem, SkipReason> {
    let raw: RawArtwork =
        serde_json::from_value(record).map_err(|e| SkipReason::Malformed(e.to_string()))?;
    let item = raw.into_item()?;
    if seen.contains(&item.id) {
        return Err(SkipReason::DuplicateId(item.id));
    }
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    const TWO_RECORDS: &str = r#"[
        {"id": "1", "title": "A", "description": "", "imagePath": "a.jpg",
         "category": "Drawing", "tags": ["ink"], "date": "2024-01-01"},
        {"id": "2", "title": "B", "description": "d", "imagePath": "b.jpg",
         "category": "Painting", "tags": [], "date": "2024-01-02", "height": 900}
    ]"#;

    #[test]
    fn loads_valid_records_in_order() {
        let (catalog, report) = Catalog::from_json(TWO_RECORDS).unwrap();
        assert_eq!(ids(catalog.items()), vec!["1", "2"]);
        assert_eq!(catalog.items()[1].height, Some(900));
        assert!(report.is_clean());
        assert_eq!(report.loaded(), 2);
    }

    #[test]
    fn missing_mandatory_field_is_skipped() {
        let json = r#"[
            {"id": "1", "title": "A", "description": "", "imagePath": "a.jpg",
             "category": "Drawing", "date": "2024-01-01"},
            {"id": "2", "title": "B", "description": "", "imagePath": "b.jpg",
             "category": "Drawing", "tags": [], "date": "2024-01-01"}
        ]"#;
        let (catalog, report) = Catalog::from_json(json).unwrap();
        assert_eq!(ids(catalog.items()), vec!["2"]);
        assert_eq!(
            report.skipped,
            vec![SkippedRecord {
                position: 0,
                reason: SkipReason::MissingField("tags"),
            }]
        );
    }

    #[test]
    fn duplicate_id_keeps_first() {
        let json = r#"[
            {"id": "1", "title": "First", "description": "", "imagePath": "a.jpg",
             "category": "Drawing", "tags": [], "date": "2024-01-01"},
            {"id": "1", "title": "Second", "description": "", "imagePath": "b.jpg",
             "category": "Drawing", "tags": [], "date": "2024-01-01"}
        ]"#;
        let (catalog, report) = Catalog::from_json(json).unwrap();
        assert_eq!(titles(catalog.items()), vec!["First"]);
        assert_eq!(report.skipped[0].reason, SkipReason::DuplicateId("1".into()));
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        let json = r#"[
            {"id": 7, "title": "A", "description": "", "imagePath": "a.jpg",
             "category": "Drawing", "tags": [], "date": "2024-01-01"},
            "not an object"
        ]"#;
        let (catalog, report) = Catalog::from_json(json).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(report.skipped.len(), 2);
        assert!(matches!(report.skipped[0].reason, SkipReason::Malformed(_)));
    }

    #[test]
    fn non_array_document_is_error() {
        assert!(matches!(
            Catalog::from_json(r#"{"id": "1"}"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let tmp = temp_file("portfolio.json", TWO_RECORDS);
        let (catalog, _) = Catalog::load(&tmp.path().join("portfolio.json")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("2").map(|i| i.title.as_str()), Some("B"));
        assert!(catalog.get("3").is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = Catalog::load(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn fixture_dataset_is_clean() {
        let (catalog, report) = Catalog::load(&fixture_dataset()).unwrap();
        assert!(report.is_clean(), "{:?}", report.skipped);
        assert!(catalog.len() > 8);
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(
            SkipReason::MissingField("imagePath").to_string(),
            "missing field 'imagePath'"
        );
        assert_eq!(
            SkipReason::DuplicateId("4".into()).to_string(),
            "duplicate id '4'"
        );
    }
}
