//! Request handlers
//!
//! Each handler logs the operation with its key input, hands the gateway call
//! to the orchestrator and encodes the outcome.

pub mod department;
pub mod employee;
