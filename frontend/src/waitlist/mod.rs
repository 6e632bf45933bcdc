//! Waitlist signup: validation, the state the form renders from, and the
//! flow that runs once a submission is accepted.

pub mod form;
pub mod orchestrator;
pub mod state;
pub mod validation;

pub use form::WaitlistSection;
