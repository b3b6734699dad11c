//! Pokemon record and form validation
//!
//! Rules mirror the `pokemon` table: name and type are `VARCHAR(50) NOT NULL`,
//! level is a positive `INT`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for name and type (column width)
pub const MAX_TEXT_LEN: usize = 50;

/// Pokemon record as stored in the `pokemon` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub level: i32,
}

impl Pokemon {
    /// Attach an id to validated fields.
    pub fn with_id(id: i32, fields: NewPokemon) -> Self {
        Self {
            id,
            name: fields.name,
            kind: fields.kind,
            level: fields.level,
        }
    }
}

/// Raw form body for create and update.
///
/// Every field is kept as a string so that a missing or malformed value
/// becomes a validation error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PokemonForm {
    #[serde(default)]
    pub pokemon_name: String,
    #[serde(default)]
    pub pokemon_type: String,
    #[serde(default)]
    pub pokemon_level: String,
}

/// Validated fields for a new or updated record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPokemon {
    name: String,
    kind: String,
    level: i32,
}

impl NewPokemon {
    /// Validate name, type and level.
    ///
    /// # Rules
    /// - name and type must be non-empty, at most 50 characters
    /// - level must be greater than zero
    ///
    /// # Example
    /// ```
    /// use pokedex_server::models::NewPokemon;
    ///
    /// assert!(NewPokemon::new("Pikachu", "Electric", 5).is_ok());
    /// assert!(NewPokemon::new("", "Electric", 5).is_err());
    /// assert!(NewPokemon::new("Pikachu", "Electric", 0).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        level: i32,
    ) -> Result<Self, ValidationError> {
        let name = check_text("name", name.into())?;
        let kind = check_text("type", kind.into())?;

        if level <= 0 {
            return Err(ValidationError::NotPositive {
                field: "level",
                value: level,
            });
        }

        Ok(Self { name, kind, level })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl TryFrom<PokemonForm> for NewPokemon {
    type Error = ValidationError;

    /// The level is parsed before any other check, so a non-numeric level is
    /// reported even when the name is also missing.
    fn try_from(form: PokemonForm) -> Result<Self, Self::Error> {
        let level = form.pokemon_level.parse::<i32>().map_err(|_| {
            ValidationError::InvalidNumber {
                field: "level",
                value: form.pokemon_level.clone(),
            }
        })?;

        Self::new(form.pokemon_name, form.pokemon_type, level)
    }
}

fn check_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(value)
}
