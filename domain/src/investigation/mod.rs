//! Interactive acquisition-target investigation
//!
//! The user converses with an assistant that proposes web searches, reads
//! their results, and works through the fixed [`criteria::CRITERIA`].

pub mod criteria;
pub mod lead;
pub mod signals;

pub use criteria::{CRITERIA, Criterion, CriterionChoice, parse_choice};
pub use lead::{CompanyLead, criterion_message, search_results_message};
pub use signals::{Confidence, KeywordSignalClassifier, ReplySignals, SignalClassifier};
