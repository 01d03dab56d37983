//! Call shapes, and how loosely typed arguments are sorted into them.
//!
//! Typed callers build a [`Call`] directly (or skip it for the fluent
//! [`Block`](crate::Block) API). Callers holding JSON values, such as the
//! command line, go through [`Call::from_values`], which inspects the
//! arity and the shape of each argument:
//!
//! | Arity | Second argument       | Call                    |
//! |-------|-----------------------|-------------------------|
//! | 0     |                       | `Unbound`               |
//! | 1     |                       | `Block`                 |
//! | 2     | object or array       | `BlockModifiers`        |
//! | 2     | string                | `BlockElement`          |
//! | 3     | string (+ modifiers)  | `BlockElementModifiers` |

use crate::error::AbemError;
use crate::modifiers::Modifiers;
use serde_json::Value as Json;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Unbound,
    Block(String),
    BlockModifiers(String, Modifiers),
    BlockElement(String, String),
    BlockElementModifiers(String, String, Modifiers),
}

impl Call {
    pub fn arity(&self) -> usize {
        match self {
            Call::Unbound => 0,
            Call::Block(_) => 1,
            Call::BlockModifiers(..) | Call::BlockElement(..) => 2,
            Call::BlockElementModifiers(..) => 3,
        }
    }

    /// Sort positional JSON arguments into a call shape.
    pub fn from_values(values: &[Json]) -> Result<Self, AbemError> {
        match values {
            [] => Ok(Call::Unbound),
            [block] => Ok(Call::Block(string_at(block, 1)?)),
            [block, second] => {
                let block = string_at(block, 1)?;
                if is_modifier_shape(second) {
                    Ok(Call::BlockModifiers(block, modifiers_at(second, 2)?))
                } else {
                    Ok(Call::BlockElement(block, string_at(second, 2)?))
                }
            }
            [block, elem, mods] => Ok(Call::BlockElementModifiers(
                string_at(block, 1)?,
                string_at(elem, 2)?,
                modifiers_at(mods, 3)?,
            )),
            more => Err(AbemError::TooManyArguments(more.len())),
        }
    }
}

fn is_modifier_shape(value: &Json) -> bool {
    matches!(value, Json::Object(_) | Json::Array(_))
}

fn string_at(value: &Json, position: usize) -> Result<String, AbemError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AbemError::UnsupportedArgument {
            position,
            found: describe(value).to_string(),
        })
}

fn modifiers_at(value: &Json, position: usize) -> Result<Modifiers, AbemError> {
    if !is_modifier_shape(value) {
        return Err(AbemError::UnsupportedArgument {
            position,
            found: describe(value).to_string(),
        });
    }
    Modifiers::from_json(value).map_err(|err| AbemError::UnsupportedArgument {
        position,
        found: err.to_string(),
    })
}

fn describe(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
