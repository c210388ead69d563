// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for processor instantiation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("Unknown local processor implementation: '{0}'")]
    UnknownImplementation(String),

    /// The `options` block could not be parsed into the processor's option type.
    #[error("Invalid options for '{implementation}': {reason}")]
    InvalidOptions {
        implementation: String,
        reason: String,
    },
}
