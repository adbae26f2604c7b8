//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ResolveUseCase` - Resolve a directory (recursive or shallow) into per-domain load order

pub mod resolve;

pub use resolve::{
    resolve_directory, resolve_directory_tree, DirectiveReport, ListingMode, ResolveOutcome,
    ResolveUseCase,
};
