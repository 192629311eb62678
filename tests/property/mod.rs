//! Property-based tests

mod budget_tiers;
mod response_extraction;
