use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use aed_client::app_dirs::CONFIG_HOME_ENV;
use aed_client::settings::BASE_URL_ENV;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Points the config home at a temp dir and clears the base URL override
/// for the guard's lifetime.
pub struct ConfigEnvGuard {
    previous_home: Option<String>,
    previous_base_url: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl ConfigEnvGuard {
    pub fn set_config_home(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous_home = std::env::var(CONFIG_HOME_ENV).ok();
        let previous_base_url = std::env::var(BASE_URL_ENV).ok();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(CONFIG_HOME_ENV, path);
            std::env::remove_var(BASE_URL_ENV);
        }
        Self {
            previous_home,
            previous_base_url,
            _lock: lock,
        }
    }

    pub fn set_base_url(&self, value: &str) {
        // SAFETY: the guard holds the global env lock.
        unsafe {
            std::env::set_var(BASE_URL_ENV, value);
        }
    }
}

impl Drop for ConfigEnvGuard {
    fn drop(&mut self) {
        restore(CONFIG_HOME_ENV, self.previous_home.take());
        restore(BASE_URL_ENV, self.previous_base_url.take());
    }
}

fn restore(key: &str, value: Option<String>) {
    // SAFETY: tests run under a global lock to prevent concurrent env mutations.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}
