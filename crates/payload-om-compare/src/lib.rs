//! Comparison side of the payload test object model.
//!
//! # Components
//!
//! - [`comparer`]: the error-comparer contract and the bundled strategies
//! - [`registry`]: explicit (contract, name) → factory registry
//! - [`config`]: verification settings loaded from TOML
//! - [`verifier`]: normalizes trees for the configured format and compares them
//!
//! # Usage
//!
//! ```rust,ignore
//! use payload_om_compare::{PayloadVerifier, VerificationConfig, registry};
//!
//! let config = VerificationConfig::load(&path)?;
//! let comparers = registry::builtin_error_comparers()?;
//! let verifier = PayloadVerifier::from_config(&config, &comparers)?;
//! verifier.verify_payload(&expected, actual)?;
//! ```

pub mod comparer;
pub mod config;
pub mod error;
pub mod registry;
pub mod verifier;

pub use comparer::{
    ActualError, EmptyErrorComparer, ErrorComparer, ExactErrorComparer, ExpectedError,
};
pub use config::VerificationConfig;
pub use error::{CompareError, Result};
pub use registry::{Contract, RegistryBuilder, StrategyRegistry};
pub use verifier::PayloadVerifier;
