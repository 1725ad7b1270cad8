//! Engine error types.
//!
//! These fail loudly because they indicate a programming or configuration
//! error, not bad user input — invalid *data* is a normal outcome reported
//! through `ValidationReport`, never through these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// `set_active_template` was called with an id that was never registered.
    #[error("template '{0}' is not registered")]
    NotRegistered(String),

    /// An operation that needs an active template ran before one was selected.
    #[error("no active template")]
    NoActiveTemplate,

    /// The entity key did not resolve against the active template.
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),
}
