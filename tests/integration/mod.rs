//! Integration tests for the Nomora generation core

mod config_integration;
mod orchestrator_mock;
mod provider_http;
mod test_utils;
