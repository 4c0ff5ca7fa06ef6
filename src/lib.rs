//! Haven UI core
//!
//! Page controllers for the Haven star-system catalog browser. The pure
//! navigation state lives in `haven-nav`, the REST boundary in
//! `haven-client`; this crate wires them together with the parts that need a
//! runtime:
//!
//! - `search`: debounced search controller (tokio timers, generation-tagged requests)
//! - `browser`: Systems/Discoveries page controller composing navigator, filters,
//!   pagination, bulk selection and search
//! - `session`: explicit session/capability object injected at the root
//! - `config`: environment-driven configuration
//! - `telemetry`: tracing subscriber setup

pub mod browser;
pub mod config;
pub mod error;
pub mod search;
pub mod session;
pub mod telemetry;

pub use browser::{BrowserKind, Listing, SystemsBrowser};
pub use config::HavenConfig;
pub use error::{BrowserError, ConfigError};
pub use search::{SearchController, SearchSettings, SearchState};
pub use session::Session;

// Re-export the layers below so callers need a single dependency.
pub use haven_client::{HavenApi, HttpClient, HttpClientConfig};
pub use haven_nav as nav;
pub use haven_types as types;
