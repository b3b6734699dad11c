//! Parsed HTML templates
//!
//! Sources are compiled into the binary and parsed once at startup, so a
//! broken template fails the process before it starts listening.

use minijinja::{context, Environment};

use crate::models::Pokemon;

pub const INDEX: &str = "index.html";
pub const ROW: &str = "pokemon-row.html";
pub const EDIT_ROW: &str = "edit-pokemon-row.html";

const SOURCES: [(&str, &str); 3] = [
    (INDEX, include_str!("../templates/index.html")),
    (ROW, include_str!("../templates/pokemon-row.html")),
    (EDIT_ROW, include_str!("../templates/edit-pokemon-row.html")),
];

/// Template error type
#[derive(Debug, thiserror::Error)]
#[error("template error: {0}")]
pub struct TemplateError(#[from] minijinja::Error);

/// The page and fragment templates
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Parse every bundled template.
    pub fn load() -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        for (name, source) in SOURCES {
            env.add_template(name, source)?;
        }
        tracing::debug!(count = SOURCES.len(), "templates loaded");
        Ok(Self { env })
    }

    /// Full page with the record table.
    pub fn index(&self, pokemons: &[Pokemon]) -> Result<String, TemplateError> {
        self.render(INDEX, context! { pokemons => pokemons })
    }

    /// One read-only table row.
    pub fn row(&self, pokemon: &Pokemon) -> Result<String, TemplateError> {
        self.render(ROW, context! { pokemon => pokemon })
    }

    /// One table row with inputs for editing.
    pub fn edit_row(&self, pokemon: &Pokemon) -> Result<String, TemplateError> {
        self.render(EDIT_ROW, context! { pokemon => pokemon })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, TemplateError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPokemon;

    fn pikachu() -> Pokemon {
        Pokemon::with_id(1, NewPokemon::new("Pikachu", "Electric", 5).unwrap())
    }

    #[test]
    fn index_lists_rows_in_order() {
        let templates = Templates::load().unwrap();
        let second = Pokemon::with_id(2, NewPokemon::new("Bulbasaur", "Grass", 3).unwrap());
        let html = templates.index(&[pikachu(), second]).unwrap();

        let first_at = html.find("Pikachu").unwrap();
        let second_at = html.find("Bulbasaur").unwrap();
        assert!(first_at < second_at);
        assert!(html.contains(r#"id="pokemon-2""#));
    }

    #[test]
    fn index_empty_placeholder() {
        let templates = Templates::load().unwrap();
        let html = templates.index(&[]).unwrap();
        assert!(html.contains("No pokemon yet."));
    }

    #[test]
    fn row_fragment() {
        let templates = Templates::load().unwrap();
        let html = templates.row(&pikachu()).unwrap();
        assert!(html.trim_start().starts_with("<tr"));
        assert!(html.contains("<td>Electric</td>"));
        assert!(html.contains(r#"hx-delete="/delete/1""#));
        assert!(!html.contains("<html"));
    }

    #[test]
    fn edit_row_has_inputs() {
        let templates = Templates::load().unwrap();
        let html = templates.edit_row(&pikachu()).unwrap();
        assert!(html.contains(r#"name="pokemon_name" value="Pikachu""#));
        assert!(html.contains(r#"name="pokemon_level" value="5""#));
        assert!(html.contains(r#"hx-put="/edit/1""#));
    }

    #[test]
    fn escapes_html() {
        let templates = Templates::load().unwrap();
        let p = Pokemon::with_id(3, NewPokemon::new("<script>", "Ghost", 9).unwrap());
        let html = templates.row(&p).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
