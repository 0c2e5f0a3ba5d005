//! Reads the hook envelope and pulls out the command the agent wants to run.
//!
//! Only `tool_input.command` is looked at. A well-formed envelope without
//! that string yields an empty command, which is not an error.

use std::io::Read;

use serde_json::Value;

use crate::error::GateError;

const COMMAND_POINTER: &str = "/tool_input/command";

/// Read the whole stream and extract the command.
pub fn read_command<R: Read>(mut reader: R) -> Result<String, GateError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_command(&input)
}

/// Parse envelope text and extract the command.
pub fn parse_command(input: &str) -> Result<String, GateError> {
    let value: Value = serde_json::from_str(input)?;
    Ok(command_from(&value))
}

/// The string at `tool_input.command`, or empty if missing or not a string.
pub fn command_from(value: &Value) -> String {
    value
        .pointer(COMMAND_POINTER)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
