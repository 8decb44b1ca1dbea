//! Company research subdomain
//!
//! A company lookup resolves three [`Facet`]s in order: website first, then
//! owner and products using the website as context. Each facet is one
//! confident-answer query (see [`crate::extraction`]).

pub mod facet;
pub mod mode;
pub mod profile;

pub use facet::Facet;
pub use mode::ResearchMode;
pub use profile::CompanyProfile;
