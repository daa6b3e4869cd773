//! Core domain types for boxoffice-client

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a movie
///
/// The remote service keys movies by an opaque string code, so this is a
/// string newtype rather than a numeric one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl MovieId {
    /// Create a new MovieId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a movie is new to the ranking or carried over from the previous day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RankChange {
    /// First appearance in the ranking
    New,
    /// Present in the previous day's ranking
    Old,
}

impl RankChange {
    /// Parse the wire-format indicator ("NEW" / "OLD")
    ///
    /// Anything other than the NEW tag is treated as a carry-over; the remote
    /// only ever emits the two tags, but an unrecognized one must not fail
    /// the mapping.
    pub fn from_wire(tag: &str) -> Self {
        match tag.trim() {
            "NEW" => RankChange::New,
            _ => RankChange::Old,
        }
    }

    /// Wire-format tag for this indicator
    pub fn as_str(&self) -> &'static str {
        match self {
            RankChange::New => "NEW",
            RankChange::Old => "OLD",
        }
    }
}

/// A single entry of the daily box-office ranking
///
/// The UI-agnostic domain form of one raw ranked-list record, derived
/// one-to-one from exactly one wire record. Immutable value; the orchestration
/// call that produced it hands ownership to the consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoxOfficeMovie {
    /// Movie identifier, used to request per-movie detail
    pub id: MovieId,
    /// Position in the ranking, 1-based
    pub rank: u32,
    /// Signed rank movement versus the previous day
    pub rank_delta: i32,
    /// New-entry indicator
    pub rank_change: RankChange,
    /// Display title
    pub title: String,
    /// Audience count for the target day
    pub audience_count: u64,
    /// Cumulative audience count since release
    pub audience_total: u64,
}

/// Supplementary per-movie detail
///
/// Fields beyond id and title are optional on the wire and stay optional
/// here; absence is not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MovieDetail {
    /// Movie identifier
    pub id: MovieId,
    /// Display title
    pub title: String,
    /// Runtime in minutes, if published
    pub runtime_minutes: Option<u32>,
    /// Theatrical release date, if published
    pub open_date: Option<NaiveDate>,
    /// Genre names
    pub genres: Vec<String>,
    /// Director names
    pub directors: Vec<String>,
    /// Production nation names
    pub nations: Vec<String>,
}

/// Lifecycle state of a fetch run
///
/// A run moves `Idle → Running → {Completed, Cancelled}`. Terminal states are
/// never reused; re-activating allocates a fresh run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// No run has been started yet
    Idle,
    /// A run is in flight
    Running,
    /// The run delivered both phase outcomes and terminated normally
    Completed,
    /// The run was cancelled before delivering its remaining outcomes
    Cancelled,
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_display_and_conversions() {
        let id = MovieId::from("20236051");
        assert_eq!(id.to_string(), "20236051");
        assert_eq!(id.as_str(), "20236051");
        assert_eq!(MovieId::new(String::from("20236051")), id);
    }

    #[test]
    fn rank_change_parses_wire_tags() {
        assert_eq!(RankChange::from_wire("NEW"), RankChange::New);
        assert_eq!(RankChange::from_wire("OLD"), RankChange::Old);
        assert_eq!(RankChange::from_wire(" NEW "), RankChange::New);
    }

    #[test]
    fn rank_change_unrecognized_tag_is_a_carry_over() {
        assert_eq!(RankChange::from_wire(""), RankChange::Old);
        assert_eq!(RankChange::from_wire("RE-ENTRY"), RankChange::Old);
    }

    #[test]
    fn rank_change_round_trips_through_wire_tag() {
        for change in [RankChange::New, RankChange::Old] {
            assert_eq!(RankChange::from_wire(change.as_str()), change);
        }
    }
}
