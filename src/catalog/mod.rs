//! Consuming-side catalog: the in-memory session cache of game records, the
//! filter/sort/paginate pipeline and the admin CRUD mediator.
//!
//! The store speaks snake_case on the wire; everything in this module uses
//! the camelCase model produced by [`keys::keys_to_camel`].

/// Admin CRUD mediator orchestrating uploads and record mutations.
pub mod admin;
/// Session-scoped cache of the full game list.
pub mod client;
/// Pure filter/sort/paginate pipeline.
pub mod filter;
/// Recursive snake_case/camelCase JSON key mapping.
pub mod keys;

use serde::{Deserialize, Serialize};

/// A catalog entry as seen by consumers, with camelCase wire naming.
///
/// `players` and `duration` are display strings encoding numeric ranges;
/// every consumer re-parses them (see [`filter::parse_range`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    /// Store-assigned identifier, unique and stable.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Relative public path of the cover image.
    pub image: Option<String>,
    /// Player count range string, e.g. `"2-4"`.
    pub players: String,
    /// Minimum recommended age in years.
    pub min_age: i32,
    /// Play time range string, e.g. `"30-45 min"`.
    pub duration: String,
    /// Categories in display order; empty means none, never null.
    pub categories: Vec<String>,
    /// Difficulty label ("Fácil", "Medio" or "Difícil").
    pub difficulty: String,
    /// Editorial rating in [0, 5], absent when unreviewed.
    pub rating: Option<f64>,
    /// Editorial review text.
    pub review: String,
    /// Optional external shop/publisher link.
    pub external_link: Option<String>,
    /// Highlights, one entry per bullet.
    pub pros: Vec<String>,
    /// Drawbacks, one entry per bullet.
    pub cons: Vec<String>,
    /// Whether the game is featured on the home page.
    pub featured: bool,
    /// Free-text rules summary.
    pub rules_summary: Option<String>,
    /// Relative public path of the rules PDF.
    pub rules_file: Option<String>,
}
