pub mod settings_model;
pub mod settings_traits;

pub use settings_model::{Settings, SettingsUpdate};
pub use settings_traits::SettingsStoreTrait;
