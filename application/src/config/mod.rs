//! Application-level configuration.
//!
//! Configuration types that control how use cases behave:
//!
//! - [`RequestParams`]: model and token budget for one kind of request
//! - [`ResearchParams`]: research mode and attempt bound

pub mod request_params;
pub mod research_params;

pub use request_params::RequestParams;
pub use research_params::ResearchParams;
