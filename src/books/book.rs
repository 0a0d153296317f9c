//! Book record

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single entry in the reading list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    /// Title as entered by the user
    pub name: String,

    /// Whether the book has been finished
    #[serde(default)]
    pub done: bool,

    /// When the book was added; never changes afterwards
    pub added: DateTime<Local>,

    /// When the book was finished, unset while pending
    #[serde(default, with = "unset_time")]
    pub completed_at: Option<DateTime<Local>>,
}

impl Book {
    /// Create a pending book stamped with the current time
    pub fn new(name: impl Into<String>) -> Self {
        Self::added_at(name, Local::now())
    }

    /// Create a pending book with an explicit creation time
    pub fn added_at(name: impl Into<String>, added: DateTime<Local>) -> Self {
        Book {
            name: name.into(),
            done: false,
            added,
            completed_at: None,
        }
    }

    /// Mark the book as finished at `at`.
    ///
    /// Completing a finished book again moves its completion time to `at`;
    /// it never becomes pending again.
    pub fn complete_at(&mut self, at: DateTime<Local>) {
        self.done = true;
        self.completed_at = Some(at);
    }
}

/// Codec for an optional timestamp stored as the zero instant when unset.
///
/// Files written by earlier versions of the tool carry
/// `0001-01-01T00:00:00Z` for books that were never finished.
mod unset_time {
    use chrono::{DateTime, Datelike, FixedOffset, Local};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) const ZERO_TIME: &str = "0001-01-01T00:00:00Z";

    pub fn serialize<S>(value: &Option<DateTime<Local>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => at.serialize(serializer),
            None => serializer.serialize_str(ZERO_TIME),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Local>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let at: Option<DateTime<FixedOffset>> = Option::deserialize(deserializer)?;
        Ok(at
            .filter(|at| at.year() > 1)
            .map(|at| at.with_timezone(&Local)))
    }
}
