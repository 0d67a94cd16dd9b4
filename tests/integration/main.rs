//! End-to-end integration tests
//!
//! Scenario tests exercising the full newsroom graph through its queries.

mod invariants;
