use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::models::{GameDraft, GameEntity};

/// Game fields submitted on create and full-replace update.
///
/// Every field except `name` is optional on the wire; the defaults match what
/// the store would persist for an absent column.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct GamePayload {
    /// Display name; must not be blank.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Relative public path of the cover image.
    #[serde(default)]
    pub image: Option<String>,
    /// Player count range as a display string, e.g. `"2-4"`.
    #[serde(default)]
    pub players: String,
    /// Minimum recommended age in years.
    #[serde(default)]
    #[validate(range(min = 0, message = "min_age must not be negative"))]
    pub min_age: i32,
    /// Play time range as a display string, e.g. `"30-45 min"`.
    #[serde(default)]
    pub duration: String,
    /// Categories the game belongs to.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Difficulty label; empty or one of the known values.
    #[serde(default)]
    #[validate(custom(function = crate::dto::validation::validate_difficulty))]
    pub difficulty: String,
    /// Editorial rating in [0, 5].
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    /// Editorial review text.
    #[serde(default)]
    pub review: String,
    /// Optional external link.
    #[serde(default)]
    pub external_link: Option<String>,
    /// Highlights, one entry per bullet.
    #[serde(default)]
    pub pros: Vec<String>,
    /// Drawbacks, one entry per bullet.
    #[serde(default)]
    pub cons: Vec<String>,
    /// Whether the game is featured on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Free-text summary of the rules.
    #[serde(default)]
    pub rules_summary: Option<String>,
    /// Relative public path of the uploaded rules PDF.
    #[serde(default)]
    pub rules_file: Option<String>,
}

impl From<GamePayload> for GameDraft {
    fn from(payload: GamePayload) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            image: payload.image,
            players: payload.players,
            min_age: payload.min_age,
            duration: payload.duration,
            categories: payload.categories,
            difficulty: payload.difficulty,
            rating: payload.rating,
            review: payload.review,
            external_link: payload.external_link,
            pros: payload.pros,
            cons: payload.cons,
            featured: payload.featured,
            rules_summary: payload.rules_summary,
            rules_file: payload.rules_file,
        }
    }
}

/// Game record as returned by the REST API (snake_case keys).
#[derive(Debug, Serialize, ToSchema)]
pub struct GameResponse {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Relative public path of the cover image.
    pub image: Option<String>,
    /// Player count range string.
    pub players: String,
    /// Minimum recommended age.
    pub min_age: i32,
    /// Play time range string.
    pub duration: String,
    /// Categories in display order.
    pub categories: Vec<String>,
    /// Difficulty label.
    pub difficulty: String,
    /// Editorial rating.
    pub rating: Option<f64>,
    /// Editorial review text.
    pub review: String,
    /// Optional external link.
    pub external_link: Option<String>,
    /// Highlights.
    pub pros: Vec<String>,
    /// Drawbacks.
    pub cons: Vec<String>,
    /// Featured flag.
    pub featured: bool,
    /// Free-text rules summary.
    pub rules_summary: Option<String>,
    /// Relative public path of the rules PDF.
    pub rules_file: Option<String>,
}

impl From<GameEntity> for GameResponse {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            image: entity.image,
            players: entity.players,
            min_age: entity.min_age,
            duration: entity.duration,
            categories: entity.categories,
            difficulty: entity.difficulty,
            rating: entity.rating,
            review: entity.review,
            external_link: entity.external_link,
            pros: entity.pros,
            cons: entity.cons,
            featured: entity.featured,
            rules_summary: entity.rules_summary,
            rules_file: entity.rules_file,
        }
    }
}
