pub mod api;
pub mod commands;
pub mod context;
pub mod error_fmt;
pub mod render;
pub mod repl;

// Re-export commonly used types from context module for convenience
pub use context::{
    CompleteError, ConciergeContext, Settings, SettingsError, StoreError, Task, TaskStore,
    CONFIG_FILE, TASKS_FILE,
};

pub use api::{ApiClient, ApiKeys, ApiOutcome, ReqwestTransport, Transport, TransportError};
