//! Admin CRUD mediator.
//!
//! Orchestrates the multi-step save flow of the admin form: upload pending
//! files first, then create or update the record with the returned paths,
//! then refetch the full catalog so the session cache reflects the store.

use serde_json::{json, Value};
use thiserror::Error;
use tracing::{info, warn};

use super::{
    client::{CatalogClient, CatalogError},
    keys::{keys_to_camel, keys_to_snake},
    Game,
};

/// Errors surfaced by admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The request never produced a response.
    #[error("admin request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The credentials were rejected.
    #[error("invalid credentials")]
    Unauthorized,
    /// The session token was missing or rejected.
    #[error("admin session rejected")]
    Forbidden,
    /// A file upload failed; the record mutation was not attempted.
    #[error("upload of `{file_name}` rejected with status {status}")]
    Upload {
        /// Name of the file whose upload failed.
        file_name: String,
        /// Status the store answered with.
        status: reqwest::StatusCode,
    },
    /// The record mutation was rejected.
    #[error("mutation rejected with status {0}")]
    Status(reqwest::StatusCode),
    /// The response body was not the expected shape.
    #[error("admin response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    /// The post-mutation catalog refetch failed.
    #[error("catalog refetch after mutation failed: {0}")]
    Refetch(#[from] CatalogError),
}

/// A form list field: either the raw multi-line text the admin typed or an
/// already-split list of items.
#[derive(Debug, Clone, PartialEq)]
pub enum ListField {
    /// Free text, one item per line or comma-separated.
    Text(String),
    /// Already-normalized items.
    Items(Vec<String>),
}

impl Default for ListField {
    fn default() -> Self {
        ListField::Text(String::new())
    }
}

impl ListField {
    /// Split into trimmed, non-empty items. Text splits on newlines and
    /// commas; an item list passes through with the same trimming.
    pub fn normalize(&self) -> Vec<String> {
        let items: Vec<&str> = match self {
            ListField::Text(text) => text.split(['\n', ',']).collect(),
            ListField::Items(items) => items.iter().map(String::as_str).collect(),
        };
        items
            .into_iter()
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Parse the leading decimal digits of a form field, ignoring a trailing
/// unit; a field without leading digits yields 0.
fn leading_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parse the leading decimal number of a form field; a field without a
/// leading number yields `None`.
fn leading_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let number: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    number.parse().ok()
}

fn decode_error(message: &str) -> AdminError {
    AdminError::Decode(serde_json::Error::io(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        message.to_string(),
    )))
}

/// A file the admin picked in the form, held in memory until upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Original client-side file name, used to derive the stored name.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// String-typed admin form state, mirroring what the edit screen collects
/// before coercion into a store payload.
#[derive(Debug, Clone, Default)]
pub struct GameForm {
    /// Display name; the only required field.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Player count range string, e.g. `"2-4"`.
    pub players: String,
    /// Minimum age as typed, coerced to an integer on save.
    pub min_age: String,
    /// Play time range string.
    pub duration: String,
    /// Category list.
    pub categories: ListField,
    /// Difficulty label.
    pub difficulty: String,
    /// Rating as typed, coerced to a float on save; blank means unrated.
    pub rating: String,
    /// Editorial review text.
    pub review: String,
    /// External link; blank clears it.
    pub external_link: String,
    /// Pros list.
    pub pros: ListField,
    /// Cons list.
    pub cons: ListField,
    /// Whether the game is featured.
    pub featured: bool,
    /// Free-text rules summary.
    pub rules_summary: String,
    /// Current image path, kept when no new image is uploaded.
    pub image: String,
    /// Current rules file path, kept when no new file is uploaded.
    pub rules_file: String,
}

impl GameForm {
    /// Pre-fill the form from an existing record for editing.
    pub fn from_game(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            description: game.description.clone(),
            players: game.players.clone(),
            min_age: game.min_age.to_string(),
            duration: game.duration.clone(),
            categories: ListField::Items(game.categories.clone()),
            difficulty: game.difficulty.clone(),
            rating: game.rating.map(|r| r.to_string()).unwrap_or_default(),
            review: game.review.clone(),
            external_link: game.external_link.clone().unwrap_or_default(),
            pros: ListField::Items(game.pros.clone()),
            cons: ListField::Items(game.cons.clone()),
            featured: game.featured,
            rules_summary: game.rules_summary.clone().unwrap_or_default(),
            image: game.image.clone().unwrap_or_default(),
            rules_file: game.rules_file.clone().unwrap_or_default(),
        }
    }

    /// Coerce the form into the camelCase record payload.
    fn to_payload(&self) -> Value {
        json!({
            "name": self.name.trim(),
            "description": self.description,
            "image": self.image,
            "players": self.players,
            "minAge": leading_int(&self.min_age),
            "duration": self.duration,
            "categories": self.categories.normalize(),
            "difficulty": self.difficulty,
            "rating": leading_float(&self.rating),
            "review": self.review,
            "externalLink": self.external_link,
            "pros": self.pros.normalize(),
            "cons": self.cons.normalize(),
            "featured": self.featured,
            "rulesSummary": self.rules_summary,
            "rulesFile": self.rules_file,
        })
    }
}

/// Mediator between the admin screens and the store's authenticated surface.
#[derive(Debug)]
pub struct AdminMediator {
    http: reqwest::Client,
    base_url: String,
}

impl AdminMediator {
    /// Create a mediator for a store at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Exchange admin credentials for a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AdminError> {
        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AdminError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(AdminError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        body.get("token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| decode_error("missing token field"))
    }

    /// Upload one file to an upload endpoint and return the public path the
    /// store assigned.
    async fn upload(
        &self,
        endpoint: &str,
        field: &str,
        file: &FileUpload,
        token: &str,
    ) -> Result<String, AdminError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone());
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);

        let response = self
            .http
            .post(format!("{}{endpoint}", self.base_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AdminError::Forbidden);
        }
        if !status.is_success() {
            return Err(AdminError::Upload {
                file_name: file.file_name.clone(),
                status,
            });
        }

        let body: Value = response.json().await?;
        body.get("path")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| decode_error("missing path field"))
    }

    /// Save the form: upload any pending files, then create or update the
    /// record, then refetch the full catalog.
    ///
    /// Files upload before the mutation so the record always references
    /// stored paths; if an upload fails the mutation is never attempted and
    /// the existing record stays untouched.
    pub async fn save_game(
        &self,
        mut form: GameForm,
        image: Option<&FileUpload>,
        rules: Option<&FileUpload>,
        token: &str,
        existing_id: Option<i64>,
        catalog: &mut CatalogClient,
    ) -> Result<Game, AdminError> {
        if let Some(file) = image {
            form.image = self
                .upload("/api/games/upload-image", "image", file, token)
                .await?;
        }
        if let Some(file) = rules {
            form.rules_file = self
                .upload("/api/games/upload-rules", "rulesFile", file, token)
                .await?;
        }

        let payload = form.to_payload();
        let request = match existing_id {
            Some(id) => self.http.put(format!("{}/api/games/{id}", self.base_url)),
            None => self.http.post(format!("{}/api/games", self.base_url)),
        };
        let response = request
            .bearer_auth(token)
            .json(&keys_to_snake(payload))
            .send()
            .await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AdminError::Forbidden);
        }
        if !status.is_success() {
            warn!(%status, "record mutation rejected");
            return Err(AdminError::Status(status));
        }

        let raw: Value = response.json().await?;
        let game: Game = serde_json::from_value(keys_to_camel(raw))?;
        info!(id = game.id, name = %game.name, "game saved");

        catalog.fetch_games().await?;
        Ok(game)
    }

    /// Delete a record, then refetch the full catalog.
    pub async fn delete_game(
        &self,
        id: i64,
        token: &str,
        catalog: &mut CatalogClient,
    ) -> Result<(), AdminError> {
        let response = self
            .http
            .delete(format!("{}/api/games/{id}", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AdminError::Forbidden);
        }
        if !status.is_success() {
            return Err(AdminError::Status(status));
        }
        info!(id, "game deleted");

        catalog.fetch_games().await?;
        Ok(())
    }
}
