use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use shared::{ClientConfig, ConfigOverride};

const CONFIG_STORAGE_KEY: &str = "paddy_client_config";

/// Defaults, then the `PADDY_PREDICT_URL` build variable, then the fields of
/// a JSON override stored under `paddy_client_config`.
pub fn load_config() -> ClientConfig {
    let mut config = ClientConfig::default();

    if let Some(endpoint) = option_env!("PADDY_PREDICT_URL") {
        config = config.with_endpoint(endpoint);
    }

    match LocalStorage::get::<ConfigOverride>(CONFIG_STORAGE_KEY) {
        Ok(stored) => {
            log::info!("Applying client config override from local storage");
            config = config.apply(stored);
        }
        Err(StorageError::KeyNotFound(_)) => {}
        Err(e) => log::warn!("Ignoring stored client config: {}", e),
    }

    config
}
