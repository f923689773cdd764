pub mod adapter;
pub mod config;
pub mod context;
pub mod dev;
pub mod discovery;
pub mod env;
pub mod error;
pub mod paths;
pub mod settings;
pub mod validation;

// Re-export main types
pub use adapter::*;
pub use config::*;
pub use context::*;
pub use dev::*;
pub use env::*;
pub use error::*;
pub use paths::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{discover, discover_with_mode, ConfigDiscovery, CONFIG_FILE, ENV_PREFIX};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
