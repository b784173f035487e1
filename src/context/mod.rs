//! Application state for a helper session.
//!
//! This module contains:
//! - `Task` - a single to-do item
//! - `TaskStore` - the ordered task list and its file mirror
//! - `Settings` - `config.yml` in the data directory
//! - `ConciergeContext` - owns the store and the API client for the session

mod settings;
mod store;
mod task;

use std::path::PathBuf;

pub use settings::{
    Endpoints, HttpConfig, NewsConfig, Settings, SettingsError, DEFAULT_NEWS_LIMIT,
    DEFAULT_NEWS_TOPIC,
};
pub use store::{CompleteError, StoreError, TaskStore};
pub use task::Task;

use crate::api::ApiClient;

/// Task file name inside the data directory.
pub const TASKS_FILE: &str = "tasks.yml";
/// Settings file name inside the data directory.
pub const CONFIG_FILE: &str = "config.yml";

/// Everything a command needs: the task store, the API client and settings.
///
/// The context is the single owner of the task list. Commands that mutate
/// it take `&mut self`, which keeps id assignment strictly sequential.
#[derive(Debug)]
pub struct ConciergeContext {
    store: TaskStore,
    api: ApiClient,
    settings: Settings,
}

impl ConciergeContext {
    /// Open a session rooted at `data_dir`, loading any existing tasks.
    pub fn new(data_dir: PathBuf, settings: Settings, api: ApiClient) -> Self {
        let store = TaskStore::load(data_dir.join(TASKS_FILE));
        Self {
            store,
            api,
            settings,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}


#[cfg(test)]
mod tests {
    use super::testing;
    use super::*;
    use crate::api::transport::stub::StubTransport;
    use tempfile::TempDir;

    #[test]
    fn test_new_loads_existing_tasks() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut ctx = testing::context(temp_dir.path(), testing::all_keys(), StubTransport::new());
            ctx.store_mut().add("buy milk").unwrap();
        }

        let ctx = testing::context(temp_dir.path(), testing::all_keys(), StubTransport::new());
        assert_eq!(ctx.store().len(), 1);
        assert_eq!(ctx.store().path(), temp_dir.path().join(TASKS_FILE));
    }
}
