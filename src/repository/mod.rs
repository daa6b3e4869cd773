//! Repository boundary — wire payloads and the fetch contract.
//!
//! The raw payload structs mirror the remote service's JSON exactly
//! (camelCase names, string-typed numerics). They are owned by this boundary;
//! the rest of the crate works with the domain entities in [`crate::types`],
//! produced by the pure `to_entity` mappers below.

mod http;

pub use http::HttpMovieRepository;

use crate::error::{EntityError, TransportError};
use crate::types::{BoxOfficeMovie, MovieDetail, MovieId, RankChange};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;

/// Top-level daily box-office payload
#[derive(Clone, Debug, Deserialize)]
pub struct BoxOfficePayload {
    /// The result envelope
    #[serde(rename = "boxOfficeResult")]
    pub box_office_result: BoxOfficeResult,
}

/// Result envelope of the daily box-office payload
#[derive(Clone, Debug, Deserialize)]
pub struct BoxOfficeResult {
    /// Ranking type label (e.g., "일별 박스오피스")
    #[serde(rename = "boxofficeType", default)]
    pub boxoffice_type: String,

    /// Date range the ranking covers, as reported by the service
    #[serde(rename = "showRange", default)]
    pub show_range: String,

    /// The ranked records, in ranking order
    #[serde(rename = "dailyBoxOfficeList")]
    pub daily_box_office_list: Vec<RankedListItem>,
}

/// One raw record of the ranked list
///
/// All numeric fields arrive as strings on the wire.
#[derive(Clone, Debug, Deserialize)]
pub struct RankedListItem {
    /// Movie code
    #[serde(rename = "movieCd")]
    pub movie_cd: String,

    /// Movie title
    #[serde(rename = "movieNm")]
    pub movie_nm: String,

    /// Rank, 1-based
    pub rank: String,

    /// Signed rank movement versus the previous day
    #[serde(rename = "rankInten")]
    pub rank_inten: String,

    /// "NEW" or "OLD" new-entry indicator
    #[serde(rename = "rankOldAndNew")]
    pub rank_old_and_new: String,

    /// Audience count for the target day
    #[serde(rename = "audiCnt")]
    pub audi_cnt: String,

    /// Cumulative audience count
    #[serde(rename = "audiAcc")]
    pub audi_acc: String,
}

impl RankedListItem {
    /// Map this raw record to its domain entity
    ///
    /// Pure, no I/O. Field fidelity: rank, title, and audience figures pass
    /// through parsed but otherwise unmodified.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] naming the offending field when a
    /// string-typed numeric does not parse.
    pub fn to_entity(&self) -> Result<BoxOfficeMovie, EntityError> {
        Ok(BoxOfficeMovie {
            id: MovieId::from(self.movie_cd.as_str()),
            rank: parse_field("rank", &self.rank)?,
            rank_delta: parse_field("rankInten", &self.rank_inten)?,
            rank_change: RankChange::from_wire(&self.rank_old_and_new),
            title: self.movie_nm.clone(),
            audience_count: parse_field("audiCnt", &self.audi_cnt)?,
            audience_total: parse_field("audiAcc", &self.audi_acc)?,
        })
    }
}

/// Top-level movie detail payload
#[derive(Clone, Debug, Deserialize)]
pub struct MovieInfoPayload {
    /// The result envelope
    #[serde(rename = "movieInfoResult")]
    pub movie_info_result: MovieInfoResult,
}

/// Result envelope of the movie detail payload
#[derive(Clone, Debug, Deserialize)]
pub struct MovieInfoResult {
    /// The detail record
    #[serde(rename = "movieInfo")]
    pub movie_info: MovieInfo,
}

/// Raw per-movie detail record
#[derive(Clone, Debug, Deserialize)]
pub struct MovieInfo {
    /// Movie code
    #[serde(rename = "movieCd")]
    pub movie_cd: String,

    /// Movie title
    #[serde(rename = "movieNm")]
    pub movie_nm: String,

    /// Runtime in minutes, empty string when unpublished
    #[serde(rename = "showTm", default)]
    pub show_tm: String,

    /// Release date as "YYYYMMDD", empty string when unpublished
    #[serde(rename = "openDt", default)]
    pub open_dt: String,

    /// Genre entries
    #[serde(default)]
    pub genres: Vec<NamedGenre>,

    /// Director entries
    #[serde(default)]
    pub directors: Vec<NamedPerson>,

    /// Production nation entries
    #[serde(default)]
    pub nations: Vec<NamedNation>,
}

/// Genre wrapper object on the wire
#[derive(Clone, Debug, Deserialize)]
pub struct NamedGenre {
    /// Genre name
    #[serde(rename = "genreNm")]
    pub genre_nm: String,
}

/// Person wrapper object on the wire
#[derive(Clone, Debug, Deserialize)]
pub struct NamedPerson {
    /// Person name
    #[serde(rename = "peopleNm")]
    pub people_nm: String,
}

/// Nation wrapper object on the wire
#[derive(Clone, Debug, Deserialize)]
pub struct NamedNation {
    /// Nation name
    #[serde(rename = "nationNm")]
    pub nation_nm: String,
}

impl MovieInfo {
    /// Map this raw detail record to its domain entity
    ///
    /// Pure and total: the optional fields (runtime, release date) are
    /// published inconsistently by the service, so a value that does not
    /// parse maps to `None` rather than failing the record.
    pub fn to_entity(&self) -> MovieDetail {
        MovieDetail {
            id: MovieId::from(self.movie_cd.as_str()),
            title: self.movie_nm.clone(),
            runtime_minutes: self.show_tm.trim().parse().ok(),
            open_date: NaiveDate::parse_from_str(self.open_dt.trim(), "%Y%m%d").ok(),
            genres: self.genres.iter().map(|g| g.genre_nm.clone()).collect(),
            directors: self.directors.iter().map(|d| d.people_nm.clone()).collect(),
            nations: self.nations.iter().map(|n| n.nation_nm.clone()).collect(),
        }
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, EntityError> {
    value.trim().parse().map_err(|_| EntityError {
        field,
        value: value.to_string(),
    })
}

/// The "get ranked list" / "get detail" capability the orchestrator depends on
///
/// Both operations are independent; no ordering is guaranteed or required by
/// this boundary itself. Ordering (list before detail) is imposed by the
/// caller. Implementations classify their failures into [`TransportError`]
/// and never into the domain taxonomy.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Fetch the daily ranked list
    async fn get_ranked_list(&self) -> Result<BoxOfficePayload, TransportError>;

    /// Fetch supplementary detail for one movie
    async fn get_detail(&self, id: &MovieId) -> Result<MovieInfoPayload, TransportError>;
}
