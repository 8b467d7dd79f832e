use std::sync::{Arc, PoisonError, RwLock};

use crate::config::core_config::EnvironmentSettings;

/// Source of the currently loaded environment settings.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait EnvironmentProvider: Send + Sync {
    fn get_settings(&self) -> Arc<EnvironmentSettings>;
}

pub struct StaticEnvironmentProvider {
    settings: Arc<EnvironmentSettings>,
}

impl StaticEnvironmentProvider {
    pub fn new(settings: EnvironmentSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

impl EnvironmentProvider for StaticEnvironmentProvider {
    fn get_settings(&self) -> Arc<EnvironmentSettings> {
        self.settings.clone()
    }
}

/// Settings that can be replaced at runtime. Readers holding a previous
/// snapshot keep it; the next `get_settings` observes the replacement.
pub struct ReloadableEnvironmentProvider {
    settings: RwLock<Arc<EnvironmentSettings>>,
}

impl ReloadableEnvironmentProvider {
    pub fn new(settings: EnvironmentSettings) -> Self {
        Self {
            settings: RwLock::new(Arc::new(settings)),
        }
    }

    pub fn set_settings(&self, settings: EnvironmentSettings) {
        let mut current = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(settings);

        tracing::info!(
            application = ?current.application_name(),
            "Environment settings reloaded"
        );
    }
}

impl EnvironmentProvider for ReloadableEnvironmentProvider {
    fn get_settings(&self) -> Arc<EnvironmentSettings> {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
