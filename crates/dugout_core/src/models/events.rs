use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::bases::{Advance, Bases};

/// At-bat outcomes the scoreboard understands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum AtBatEvent {
    Single,
    Double,
    Walk,
    Out,
}

impl AtBatEvent {
    /// Parse the `data-evt` tag carried by a control. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "single" => Some(AtBatEvent::Single),
            "double" => Some(AtBatEvent::Double),
            "walk" => Some(AtBatEvent::Walk),
            "out" => Some(AtBatEvent::Out),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            AtBatEvent::Single => "single",
            AtBatEvent::Double => "double",
            AtBatEvent::Walk => "walk",
            AtBatEvent::Out => "out",
        }
    }

    /// Runner movement for this outcome, or `None` when nobody advances.
    pub fn advance(self, bases: Bases) -> Option<Advance> {
        match self {
            AtBatEvent::Single | AtBatEvent::Walk => Some(bases.advance_one()),
            AtBatEvent::Double => Some(bases.advance_two()),
            AtBatEvent::Out => None,
        }
    }
}
