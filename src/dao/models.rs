use serde::{Deserialize, Serialize};

/// Game record persisted by the storage layer.
///
/// Field names double as the wire naming: the REST boundary serializes games
/// with these snake_case keys, and consumers convert them to camelCase on
/// their side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "postgres-store", derive(sqlx::FromRow))]
pub struct GameEntity {
    /// Primary key, assigned by the store on creation.
    pub id: i64,
    /// Display name of the game.
    pub name: String,
    /// Long-form description shown on the detail page.
    pub description: String,
    /// Relative public path of the cover image, when one was uploaded.
    pub image: Option<String>,
    /// Player count range as a display string, e.g. `"2-4"`.
    pub players: String,
    /// Minimum recommended age in years.
    pub min_age: i32,
    /// Play time range as a display string, e.g. `"30-45 min"`.
    pub duration: String,
    /// Categories the game belongs to, in display order.
    pub categories: Vec<String>,
    /// Difficulty label ("Fácil", "Medio" or "Difícil"), stored as free text.
    pub difficulty: String,
    /// Editorial rating in [0, 5], absent when the game was not yet reviewed.
    pub rating: Option<f64>,
    /// Editorial review text.
    pub review: String,
    /// Optional link to an external shop or publisher page.
    pub external_link: Option<String>,
    /// Highlights, one entry per bullet.
    pub pros: Vec<String>,
    /// Drawbacks, one entry per bullet.
    pub cons: Vec<String>,
    /// Whether the game is featured on the home page.
    pub featured: bool,
    /// Free-text summary of the rules.
    pub rules_summary: Option<String>,
    /// Relative public path of the uploaded rules PDF.
    pub rules_file: Option<String>,
}

/// Game fields without an identifier, used for creation and full-replace
/// updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameDraft {
    /// Display name of the game.
    pub name: String,
    /// Long-form description shown on the detail page.
    pub description: String,
    /// Relative public path of the cover image.
    pub image: Option<String>,
    /// Player count range as a display string.
    pub players: String,
    /// Minimum recommended age in years.
    pub min_age: i32,
    /// Play time range as a display string.
    pub duration: String,
    /// Categories the game belongs to.
    pub categories: Vec<String>,
    /// Difficulty label, stored as free text.
    pub difficulty: String,
    /// Editorial rating in [0, 5].
    pub rating: Option<f64>,
    /// Editorial review text.
    pub review: String,
    /// Optional external link.
    pub external_link: Option<String>,
    /// Highlights, one entry per bullet.
    pub pros: Vec<String>,
    /// Drawbacks, one entry per bullet.
    pub cons: Vec<String>,
    /// Whether the game is featured on the home page.
    pub featured: bool,
    /// Free-text summary of the rules.
    pub rules_summary: Option<String>,
    /// Relative public path of the uploaded rules PDF.
    pub rules_file: Option<String>,
}

impl GameDraft {
    /// Attach a store-assigned identifier to the draft.
    pub fn into_entity(self, id: i64) -> GameEntity {
        GameEntity {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
            players: self.players,
            min_age: self.min_age,
            duration: self.duration,
            categories: self.categories,
            difficulty: self.difficulty,
            rating: self.rating,
            review: self.review,
            external_link: self.external_link,
            pros: self.pros,
            cons: self.cons,
            featured: self.featured,
            rules_summary: self.rules_summary,
            rules_file: self.rules_file,
        }
    }
}
