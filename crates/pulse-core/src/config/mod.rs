//! Configuration types for the Pulse data core.
//!
//! The only configuration surface is the backend connection: a runtime
//! override injected by the host shell, plus transport timeouts. Everything
//! else the resolver needs comes from the build environment or the hostname.

pub mod backend_config;
pub mod defaults;

pub use backend_config::BackendConfig;
