//! Tool descriptions, argument parsing, dispatch and result envelopes.

pub mod catalog;
pub mod engine_command;
pub mod envelope;
pub mod tool_call;
