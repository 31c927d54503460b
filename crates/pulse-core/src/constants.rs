/// Pulse core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loopback hosts that are exempt from the https upgrade.
pub const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1", "0.0.0.0"];

/// Base address used when no configuration source matches (local development).
pub const LOCAL_FALLBACK_BASE_URL: &str = "http://localhost:8000/api";

/// Hostname suffix of the managed production platform.
pub const PRODUCTION_HOST_SUFFIX: &str = ".run.app";

/// Hostname token identifying the dashboard service on the platform.
pub const FRONTEND_HOST_TOKEN: &str = "frontend";

/// Replacement token deriving the analytics backend from a dashboard host.
pub const BACKEND_HOST_TOKEN: &str = "backend";
