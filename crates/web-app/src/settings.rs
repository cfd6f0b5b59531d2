use log::error;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
}

impl Settings {
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        match self.theme {
            Theme::System => {
                if let Some(window) = web_sys::window() {
                    if let Ok(prefers_dark_scheme) =
                        window.match_media("(prefers-color-scheme: dark)")
                    {
                        if let Some(media_query_list) = prefers_dark_scheme {
                            if media_query_list.matches() {
                                Theme::Dark
                            } else {
                                Theme::Light
                            }
                        } else {
                            error!("failed to determine preferred color scheme");
                            Theme::Light
                        }
                    } else {
                        error!("failed to match media to determine preferred color scheme");
                        Theme::Light
                    }
                } else {
                    error!("failed to access window to determine preferred color scheme");
                    Theme::Light
                }
            }
            Theme::Light | Theme::Dark => self.theme,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    System,
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class applied to the document root. `System` must be resolved before.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::System | Theme::Light => "theme-light",
        }
    }
}
