// Composition root for the registration command line.
//
// Responsibilities
// - Read config from environment.
// - Own one registration service for the whole run.
// - Translate JSON-lines requests into service calls and responses.

pub mod cli;
pub mod config;
