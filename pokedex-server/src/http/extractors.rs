//! Custom Axum extractors

use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{NewPokemon, PokemonForm, ValidationError};

/// Extract and validate a pokemon id from path
pub struct PokemonId(pub i32);

impl<S> FromRequestParts<S> for PokemonId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "pokemon id" }))?;

        let id = raw.parse::<i32>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidNumber {
                field: "pokemon id",
                value: raw.clone(),
            })
        })?;

        Ok(Self(id))
    }
}

/// Extract the urlencoded pokemon form and validate its fields
pub struct ValidPokemon(pub NewPokemon);

impl<S> FromRequest<S> for ValidPokemon
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form): Form<PokemonForm> = Form::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "form body",
                    reason: rejection.body_text(),
                })
            })?;

        match NewPokemon::try_from(form) {
            Ok(fields) => Ok(Self(fields)),
            Err(e) => {
                tracing::warn!(reason = %e, "rejected pokemon form");
                Err(e.into())
            }
        }
    }
}
