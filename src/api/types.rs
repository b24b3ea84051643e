//! Art Institute of Chicago API response types.
//!
//! These types model the subset of the artworks collection endpoint that the
//! browser displays. Decoding happens once at the API boundary; any field the
//! schema does not name is dropped there, so a decoded [`Artwork`] is already
//! the seven-field display projection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single artwork record.
///
/// Returned as part of `GET /api/v1/artworks`. The `inscriptions` and date
/// fields are frequently absent or null in the live dataset; they decode to
/// `None` and render blank, never a substituted default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique artwork identifier; the table's row key.
    pub id: u64,
    /// The artwork title.
    #[serde(default)]
    pub title: String,
    /// Where the work was made.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Free-text artist attribution, possibly multi-line in the source data.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscriptions on the work, if any were recorded.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Year the work was begun. May be negative (BCE).
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Year the work was completed. May be negative (BCE).
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// The public web page for this artwork.
    pub fn web_url(&self) -> String {
        format!("https://www.artic.edu/artworks/{}", self.id)
    }
}

impl fmt::Display for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.title)
    }
}

/// Pagination metadata reported by the collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of records matching the request.
    pub total: u64,
    /// Records per page, as the server sees it.
    #[serde(default)]
    pub limit: u32,
    /// The 1-based page this response answers.
    #[serde(default)]
    pub current_page: u32,
    /// Total number of pages available.
    #[serde(default)]
    pub total_pages: u32,
}

/// One page of artwork records plus pagination metadata.
///
/// This is the full decoded body of `GET /api/v1/artworks?page=N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPage {
    /// The records on this page, in server order.
    #[serde(default)]
    pub data: Vec<Artwork>,
    /// Server-authoritative pagination counts.
    pub pagination: Pagination,
}

impl ArtworkPage {
    /// Total records in the collection, per the server.
    pub fn total(&self) -> u64 {
        self.pagination.total
    }
}
