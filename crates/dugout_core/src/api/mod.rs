pub mod json_api;

pub use json_api::{
    apply_command_json, command_schema_json, parse_command, response_json, snapshot_json,
    Command, CommandResponse, GameSnapshot, Totals,
};
