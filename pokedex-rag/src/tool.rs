//! Agent tools over the Pokedex.
//!
//! The [`MoveLookupTool`] answers "can X learn Y?" from the raw Pokedex, which
//! retrieval over embedded text cannot do reliably.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pokedex_rag::{MoveLookupTool, Tool};
//!
//! let tool = MoveLookupTool::new(Arc::new(pokedex));
//!
//! // The agent calls the tool with:
//! // { "pokemon_name": "Charizard", "move_name": "Solar Beam" }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::error::{PokedexError, Result};
use crate::pokedex::Pokedex;

/// A function the agent can call by name with JSON arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model uses to call the tool.
    fn name(&self) -> &str;

    /// Description shown to the model.
    fn description(&self) -> &str;

    /// JSON schema of the arguments object.
    fn parameters_schema(&self) -> Option<Value> {
        None
    }

    /// Run the tool.
    async fn execute(&self, args: Value) -> Result<Value>;
}

#[derive(Debug, Deserialize)]
struct MoveLookupArgs {
    pokemon_name: String,
    move_name: String,
}

/// Checks whether a pokemon can learn a move.
///
/// Unknown pokemon are reported in the result text rather than as an error
/// so the agent can relay it to the user.
pub struct MoveLookupTool {
    pokedex: Arc<Pokedex>,
}

impl MoveLookupTool {
    pub fn new(pokedex: Arc<Pokedex>) -> Self {
        Self { pokedex }
    }

    /// The answer text for one lookup.
    pub fn check(&self, pokemon_name: &str, move_name: &str) -> String {
        match self.pokedex.can_learn(pokemon_name, move_name) {
            None => format!("Error: Pokemon '{pokemon_name}' not found in raw database."),
            Some(true) => format!("✅ Yes! {pokemon_name} is able to learn {move_name}."),
            Some(false) => format!("❌ No. {pokemon_name} cannot learn {move_name}."),
        }
    }
}

#[async_trait]
impl Tool for MoveLookupTool {
    fn name(&self) -> &str {
        "check_move_tool"
    }

    fn description(&self) -> &str {
        "Checks if a Pokemon can learn a specific move. \
         Input: pokemon_name (e.g. 'Charizard'), move_name (e.g. 'Solar Beam')."
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "pokemon_name": {
                    "type": "string",
                    "description": "Name of the Pokemon, e.g. 'Charizard'"
                },
                "move_name": {
                    "type": "string",
                    "description": "Name of the move, e.g. 'Solar Beam'"
                }
            },
            "required": ["pokemon_name", "move_name"]
        }))
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: MoveLookupArgs = serde_json::from_value(args).map_err(|e| {
            error!(error = %e, "check_move_tool called with invalid arguments");
            PokedexError::Tool(format!("invalid arguments: {e}"))
        })?;

        info!(pokemon = %args.pokemon_name, move_name = %args.move_name, "check_move_tool called");
        Ok(Value::String(self.check(&args.pokemon_name, &args.move_name)))
    }
}
