//! Pokemon endpoints
//!
//! The list page is a full document; edit and update answer with a single
//! `<tr>` fragment that the front end swaps in place.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    routing::{delete, get, post},
    Router,
};

use crate::db::PokemonRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{PokemonId, ValidPokemon};
use crate::http::server::AppState;
use crate::models::Pokemon;

/// GET / - page listing every pokemon
async fn list_pokemon(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let pokemons = PokemonRepo::new(&state.pool).list().await?;
    Ok(Html(state.templates.index(&pokemons)?))
}

/// POST /add - create and go back to the list
async fn add_pokemon(
    State(state): State<Arc<AppState>>,
    ValidPokemon(fields): ValidPokemon,
) -> Result<Redirect, ApiError> {
    PokemonRepo::new(&state.pool).create(&fields).await?;
    Ok(Redirect::to("/"))
}

/// GET /edit/{id} - editable row fragment
async fn edit_pokemon_form(
    State(state): State<Arc<AppState>>,
    PokemonId(id): PokemonId,
) -> Result<Html<String>, ApiError> {
    let pokemon = PokemonRepo::new(&state.pool).get(id).await?;
    Ok(Html(state.templates.edit_row(&pokemon)?))
}

/// PUT /edit/{id} - save and return the read-only row fragment
///
/// The row is rendered from the submitted values; an id with no stored
/// record still answers 200.
async fn edit_pokemon(
    State(state): State<Arc<AppState>>,
    PokemonId(id): PokemonId,
    ValidPokemon(fields): ValidPokemon,
) -> Result<Html<String>, ApiError> {
    let pokemon = Pokemon::with_id(id, fields);
    PokemonRepo::new(&state.pool).update(&pokemon).await?;
    Ok(Html(state.templates.row(&pokemon)?))
}

/// DELETE /delete/{id} - empty 200 so the client drops the row
async fn delete_pokemon(
    State(state): State<Arc<AppState>>,
    PokemonId(id): PokemonId,
) -> Result<StatusCode, ApiError> {
    PokemonRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::OK)
}

/// Pokemon routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_pokemon))
        .route("/add", post(add_pokemon))
        .route("/edit/{id}", get(edit_pokemon_form).put(edit_pokemon))
        .route("/delete/{id}", delete(delete_pokemon))
}
