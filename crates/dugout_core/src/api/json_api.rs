//! JSON command bridge for hosts.
//!
//! ```json
//! {"type":"event","kind":"double"}
//! {"type":"end_half"}
//! {"type":"reset"}
//! {"type":"set_team_name","side":"home","name":"Bears"}
//! ```
//!
//! Every command answers with a [`CommandResponse`] carrying the outcome and a
//! full [`GameSnapshot`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Bases, Half, LineScore, TeamNames, TeamSide, TimelineEntry};
use crate::session::{apply_action, ActionOutcome, UiAction};
use crate::state::GameState;
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// At-bat outcome: `single`, `double`, `walk` or `out`. Other kinds are ignored.
    Event { kind: String },
    EndHalf,
    Reset,
    /// An empty name restores the default.
    SetTeamName { side: TeamSide, name: String },
}

impl From<Command> for UiAction {
    fn from(command: Command) -> Self {
        match command {
            Command::Event { kind } => UiAction::AtBat(kind),
            Command::EndHalf => UiAction::EndHalf,
            Command::Reset => UiAction::Reset,
            Command::SetTeamName { side, name } => UiAction::TeamName { side, value: name },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Totals {
    pub away: u32,
    pub home: u32,
}

/// Everything a host needs to draw the scoreboard itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub inning: u32,
    pub half: Half,
    pub batting: TeamSide,
    pub outs: u8,
    pub bases: Bases,
    pub score: LineScore,
    pub totals: Totals,
    pub teams: TeamNames,
    /// Newest first.
    pub timeline: Vec<TimelineEntry>,
    pub last_win_prob: f64,
}

impl GameSnapshot {
    pub fn of(state: &GameState) -> Self {
        Self {
            inning: state.inning(),
            half: state.half(),
            batting: state.batting_side(),
            outs: state.outs(),
            bases: state.bases(),
            score: state.score().clone(),
            totals: Totals {
                away: state.score().total(TeamSide::Away),
                home: state.score().total(TeamSide::Home),
            },
            teams: state.teams().clone(),
            timeline: state.timeline().iter().cloned().collect(),
            last_win_prob: state.last_win_prob(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandResponse {
    pub schema_version: u8,
    pub outcome: ActionOutcome,
    pub state: GameSnapshot,
}

pub fn parse_command(json: &str) -> Result<Command> {
    Ok(serde_json::from_str(json)?)
}

/// Parse `json`, apply it and return the serialized [`CommandResponse`].
pub fn apply_command_json(state: &mut GameState, json: &str) -> Result<String> {
    let command = parse_command(json)?;
    let outcome = apply_action(state, &command.into());
    response_json(state, outcome)
}

pub fn response_json(state: &GameState, outcome: ActionOutcome) -> Result<String> {
    let response =
        CommandResponse { schema_version: SCHEMA_VERSION, outcome, state: GameSnapshot::of(state) };
    Ok(serde_json::to_string(&response)?)
}

pub fn snapshot_json(state: &GameState) -> Result<String> {
    Ok(serde_json::to_string(&GameSnapshot::of(state))?)
}

/// JSON Schema (draft-07) describing [`Command`].
pub fn command_schema_json() -> Result<String> {
    let schema = schemars::schema_for!(Command);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn apply(state: &mut GameState, command: Value) -> CommandResponse {
        let out = apply_command_json(state, &command.to_string()).unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn test_event_command() {
        let mut state = GameState::new();
        state.reset();
        let response = apply(&mut state, json!({"type": "event", "kind": "double"}));

        assert_eq!(response.schema_version, SCHEMA_VERSION);
        assert!(matches!(response.outcome, ActionOutcome::Event(o) if o.runs == 0));
        assert_eq!(response.state.bases, Bases::new(false, true, false));
        assert_eq!(response.state.timeline.len(), 2);
        assert_eq!(response.state.timeline[0].text, "Double 2B");
    }

    #[test]
    fn test_unknown_kind_is_ignored() {
        let mut state = GameState::new();
        let response = apply(&mut state, json!({"type": "event", "kind": "triple"}));
        assert_eq!(response.outcome, ActionOutcome::Ignored);
        assert!(response.state.timeline.is_empty());
    }

    #[test]
    fn test_end_half_and_totals() {
        let mut state = GameState::new();
        for _ in 0..4 {
            apply(&mut state, json!({"type": "event", "kind": "single"}));
        }
        let response = apply(&mut state, json!({"type": "end_half"}));

        let ActionOutcome::HalfEnded(summary) = response.outcome else {
            panic!("expected half ended, got {:?}", response.outcome);
        };
        assert_eq!(summary.next_batting, TeamSide::Home);
        assert_eq!(response.state.totals, Totals { away: 1, home: 0 });
        assert_eq!(response.state.half, Half::Bottom);
        assert_eq!(response.state.batting, TeamSide::Home);
    }

    #[test]
    fn test_set_team_name_command() {
        let mut state = GameState::new();
        let response =
            apply(&mut state, json!({"type": "set_team_name", "side": "home", "name": "Bears"}));
        assert_eq!(response.state.teams.home, "Bears");

        let response =
            apply(&mut state, json!({"type": "set_team_name", "side": "home", "name": ""}));
        assert_eq!(response.state.teams.home, "Home");
    }

    #[test]
    fn test_malformed_and_invalid_commands() {
        let mut state = GameState::new();
        let err = apply_command_json(&mut state, "{\"type\":").unwrap_err();
        assert_eq!(err.code(), "MALFORMED_JSON");

        let err = apply_command_json(&mut state, r#"{"type":"steal"}"#).unwrap_err();
        assert_eq!(err.code(), "INVALID_COMMAND");
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut state = GameState::new();
        state.reset();
        let value: Value = serde_json::from_str(&snapshot_json(&state).unwrap()).unwrap();
        assert_eq!(value["inning"], 1);
        assert_eq!(value["half"], "top");
        assert_eq!(value["batting"], "away");
        assert_eq!(value["bases"], json!({"first": false, "second": false, "third": false}));
        assert_eq!(value["score"], json!({"away": [], "home": []}));
        assert_eq!(value["timeline"][0]["text"], "Game started");
    }

    #[test]
    fn test_schema_accepts_documented_commands() {
        let schema: Value = serde_json::from_str(&command_schema_json().unwrap()).unwrap();
        let compiled = jsonschema::JSONSchema::compile(&schema).expect("schema compiles");

        for valid in [
            json!({"type": "event", "kind": "single"}),
            json!({"type": "end_half"}),
            json!({"type": "reset"}),
            json!({"type": "set_team_name", "side": "away", "name": "Cubs"}),
        ] {
            assert!(compiled.is_valid(&valid), "{valid}");
        }
        for invalid in [
            json!({"type": "set_team_name", "side": "left", "name": "Cubs"}),
            json!({"type": "event"}),
            json!({"kind": "single"}),
        ] {
            assert!(!compiled.is_valid(&invalid), "{invalid}");
        }
    }
}
