//! Validation helpers for DTOs.

use validator::ValidationError;

/// Difficulty labels accepted by the catalog.
pub const DIFFICULTIES: [&str; 3] = ["Fácil", "Medio", "Difícil"];

/// Validates that a difficulty label is empty or one of the known values,
/// compared case-insensitively. The value is stored as free text, so this is
/// the only place the closed set is enforced.
pub fn validate_difficulty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    let matches_known = DIFFICULTIES
        .iter()
        .any(|known| known.to_lowercase() == value.to_lowercase());
    if !matches_known {
        let mut err = ValidationError::new("difficulty");
        err.message = Some(
            format!(
                "difficulty must be empty or one of {}",
                DIFFICULTIES.join(", ")
            )
            .into(),
        );
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_difficulties_are_accepted() {
        assert!(validate_difficulty("Fácil").is_ok());
        assert!(validate_difficulty("Medio").is_ok());
        assert!(validate_difficulty("Difícil").is_ok());
    }

    #[test]
    fn comparison_ignores_case() {
        assert!(validate_difficulty("medio").is_ok());
        assert!(validate_difficulty("FÁCIL").is_ok());
    }

    #[test]
    fn empty_means_unset() {
        assert!(validate_difficulty("").is_ok());
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!(validate_difficulty("Imposible").is_err());
        assert!(validate_difficulty("easy").is_err());
    }
}
