use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;
use tytan_web_app::{Settings, SettingsRepository, log};

#[derive(Clone, Copy)]
pub struct LocalStorage;

const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

const MAX_LOG_ENTRIES: usize = 100;

impl SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<Settings, String> {
        match gloo_storage::LocalStorage::get(KEY_SETTINGS) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(Settings::default()),
                err => Err(err),
            },
        }
        .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use pretty_assertions::assert_eq;
        use tytan_web_app::{Theme, log::Repository};
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::super::*;

        #[wasm_bindgen_test]
        async fn test_settings() {
            gloo_storage::LocalStorage::delete(KEY_SETTINGS);

            assert_eq!(LocalStorage.read_settings().await.unwrap(), Settings::default());

            LocalStorage
                .write_settings(Settings { theme: Theme::Dark })
                .await
                .unwrap();

            assert_eq!(LocalStorage.read_settings().await.unwrap().theme, Theme::Dark);
        }

        #[wasm_bindgen_test]
        fn test_log_entries() {
            gloo_storage::LocalStorage::delete(KEY_LOG);

            assert_eq!(LocalStorage.read_entries().unwrap().len(), 0);

            for i in 0..=MAX_LOG_ENTRIES {
                LocalStorage
                    .write_entry(tytan_web_app::log::Entry {
                        time: String::new(),
                        level: ::log::Level::Info,
                        message: format!("{i}"),
                    })
                    .unwrap();
            }

            let entries = LocalStorage.read_entries().unwrap();
            assert_eq!(entries.len(), MAX_LOG_ENTRIES);
            assert_eq!(entries[0].message, format!("{MAX_LOG_ENTRIES}"));
        }
    }
}
