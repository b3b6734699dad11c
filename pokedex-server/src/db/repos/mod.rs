//! Repository implementations for database access

pub mod pokemon;

pub use pokemon::{DbError, PokemonRepo};
