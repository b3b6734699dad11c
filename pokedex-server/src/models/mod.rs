//! Domain models with validation at construction
//!
//! Form input is validated when building a `NewPokemon`; handlers never
//! touch the database with unchecked values.

pub mod pokemon;
pub mod validation;

pub use pokemon::{NewPokemon, Pokemon, PokemonForm, MAX_TEXT_LEN};
pub use validation::ValidationError;
