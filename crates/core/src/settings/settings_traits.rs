//! Store trait for dashboard settings.

use async_trait::async_trait;

use super::settings_model::{Settings, SettingsUpdate};
use crate::errors::Result;

/// Remote store the dashboard persists user settings in.
#[async_trait]
pub trait SettingsStoreTrait: Send + Sync {
    /// Fetch the full settings document.
    async fn get_settings(&self) -> Result<Settings>;

    /// Apply a partial update; fields absent from the payload are left
    /// untouched server-side.
    async fn update_settings(&self, update: &SettingsUpdate) -> Result<()>;
}
