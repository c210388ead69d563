// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor backends.
//!
//! Only the local (in-process) backend exists: every text utility wrapped as
//! a [`Processor`](crate::traits::Processor) and built by name through
//! [`LocalProcessorFactory`](local::LocalProcessorFactory).
//!
//! ```text
//! Configuration → Factory → Processor Instance → Pipeline
//! ```
//!
//! # Example
//! ```rust
//! use textsmith::backends::local::LocalProcessorFactory;
//! use textsmith::config::ProcessorConfig;
//!
//! let config = ProcessorConfig {
//!     id: "shout".to_string(),
//!     impl_: "change_text_case_upper".to_string(),
//!     options: serde_yaml::Value::Null,
//! };
//!
//! let processor = LocalProcessorFactory::create_processor(&config)?;
//! assert_eq!(processor.name(), "change_text_case");
//! # Ok::<(), textsmith::errors::FactoryError>(())
//! ```

pub mod local;

#[cfg(test)]
pub mod stub;
