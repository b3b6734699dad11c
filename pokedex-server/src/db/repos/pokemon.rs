//! Pokemon repository
//!
//! Single-statement CRUD against the `pokemon` table:
//! - create: INSERT ... RETURNING (id assigned by SERIAL)
//! - list: ordered by id ascending
//! - update: no rows-affected check (an absent id is not an error)
//! - delete: zero rows affected is reported as not found

use sqlx::PgPool;

use crate::models::{NewPokemon, Pokemon};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn pokemon_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "pokemon",
            id: id.to_string(),
        }
    }
}

/// Pokemon repository
pub struct PokemonRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PokemonRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new record and return it with its generated id.
    pub async fn create(&self, fields: &NewPokemon) -> Result<Pokemon, DbError> {
        let pokemon = sqlx::query_as::<_, Pokemon>(
            r#"
            INSERT INTO pokemon (name, type, level)
            VALUES ($1, $2, $3)
            RETURNING id, name, type, level
            "#,
        )
        .bind(fields.name())
        .bind(fields.kind())
        .bind(fields.level())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id = pokemon.id, name = %pokemon.name, "pokemon added");
        Ok(pokemon)
    }

    /// List every record, lowest id first.
    pub async fn list(&self) -> Result<Vec<Pokemon>, DbError> {
        let pokemons = sqlx::query_as::<_, Pokemon>(
            "SELECT id, name, type, level FROM pokemon ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(pokemons)
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: i32) -> Result<Pokemon, DbError> {
        sqlx::query_as::<_, Pokemon>("SELECT id, name, type, level FROM pokemon WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::pokemon_not_found(id))
    }

    /// Overwrite name, type and level of the record with `pokemon.id`.
    ///
    /// Succeeds even when no row has that id; nothing is inserted in that case.
    pub async fn update(&self, pokemon: &Pokemon) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE pokemon SET name = $1, type = $2, level = $3 WHERE id = $4")
            .bind(&pokemon.name)
            .bind(&pokemon.kind)
            .bind(pokemon.level)
            .bind(pokemon.id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(id = pokemon.id, "update matched no pokemon");
        } else {
            tracing::info!(id = pokemon.id, "pokemon updated");
        }
        Ok(())
    }

    /// Remove the record with `id`.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::pokemon_not_found(id));
        }

        tracing::info!(id, "pokemon deleted");
        Ok(())
    }
}
