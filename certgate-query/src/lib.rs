//! Node-query script invocation for certgate.
//!
//! Wraps the external `get-account-info.sh` style script behind the
//! [`certgate_core::CertificationSource`] trait, with a bounded timeout.

mod script;

pub use script::{QueryConfig, ScriptQuery};
