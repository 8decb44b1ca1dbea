//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod gather_company_info;
pub mod investigate;
pub mod probe;
pub mod resolve_facet;
pub mod search;
pub(crate) mod shared;
