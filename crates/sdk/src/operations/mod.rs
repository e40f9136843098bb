//! SDK operations: login, orders, transfers, and account lookups.
//!
//! Each submodule implements one workflow family. All operations follow
//! the pattern:
//!
//! 1. Check session preconditions (initialized / authenticated)
//! 2. Validate and encode caller arguments
//! 3. Execute the GraphQL operation via the injected `Executor`
//! 4. Parse the result shape strictly at the boundary

pub mod account;
pub mod login;
pub mod order;
pub mod transfer;
