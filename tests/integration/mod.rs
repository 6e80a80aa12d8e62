//! Integration tests for path forest reconstruction and the CLI

mod parse_help_parity;
mod tree_properties;
mod tree_scenarios;
