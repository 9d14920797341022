//! Wire types for the HTTP surface

pub mod department;
pub mod employee;
