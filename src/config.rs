// src/config.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("конфиг не является корректным JSON: {0}")]
    Parse(String),

    #[error("некорректный конфиг: {0}")]
    Invalid(String),
}

/// Границы для валидаторов черновика задачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Минимальная длина названия (после trim).
    pub min_name_length: usize,
    /// Максимальная длина названия.
    pub max_name_length: usize,
    /// Максимальная длина описания.
    pub max_description_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_name_length: 3,
            max_name_length: 42,
            max_description_length: 1500,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_name_length == 0 {
            return Err(ConfigError::Invalid(
                "ValidationConfig: min_name_length = 0".into(),
            ));
        }
        if self.min_name_length > self.max_name_length {
            return Err(ConfigError::Invalid(
                "ValidationConfig: min_name_length > max_name_length".into(),
            ));
        }
        if self.max_description_length == 0 {
            return Err(ConfigError::Invalid(
                "ValidationConfig: max_description_length = 0".into(),
            ));
        }
        Ok(())
    }
}

/// Дефолты турнира, которые не приходят с сервера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TournamentDefaults {
    pub players_limit: u32,
    pub players_page_size: u32,
    pub rounds_limit: u32,
    pub access_type: String,
    pub task_strategy: String,
    pub task_provider: String,
}

impl Default for TournamentDefaults {
    fn default() -> Self {
        Self {
            players_limit: 128,
            players_page_size: 20,
            rounds_limit: 1,
            access_type: "token".to_string(),
            task_strategy: "game".to_string(),
            task_provider: "level".to_string(),
        }
    }
}

/// Конфигурация сборки сессии.
///
/// Всё, что в клиенте захардкожено как дефолты, собрано здесь, чтобы
/// дефолтные поддеревья можно было сравнить в тестах и переопределить из файла.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Язык по умолчанию (турнир, редактор без выбранного языка).
    pub default_language: String,
    /// Язык генератора аргументов у пустого черновика.
    pub generator_language: String,
    /// Размер страницы лидерборда.
    pub rating_page_size: u32,
    /// Ключ локальной настройки звука.
    pub mute_preference_key: String,
    pub tournament: TournamentDefaults,
    pub validation: ValidationConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_language: "js".to_string(),
            generator_language: "js".to_string(),
            rating_page_size: 20,
            mute_preference_key: "ui_mute_sound".to_string(),
            tournament: TournamentDefaults::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Дефолты, но с другим языком по умолчанию (и для генератора тоже).
    pub fn for_language(lang: impl Into<String>) -> Self {
        let lang = lang.into();
        Self {
            generator_language: lang.clone(),
            default_language: lang,
            ..Self::default()
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Жёсткая валидация конфига.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_language.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "SessionConfig: default_language is empty".into(),
            ));
        }
        if self.generator_language.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "SessionConfig: generator_language is empty".into(),
            ));
        }
        if self.rating_page_size == 0 {
            return Err(ConfigError::Invalid(
                "SessionConfig: rating_page_size = 0".into(),
            ));
        }
        if self.mute_preference_key.is_empty() {
            return Err(ConfigError::Invalid(
                "SessionConfig: mute_preference_key is empty".into(),
            ));
        }
        if self.tournament.players_limit == 0 {
            return Err(ConfigError::Invalid(
                "TournamentDefaults: players_limit = 0".into(),
            ));
        }
        if self.tournament.players_page_size == 0 {
            return Err(ConfigError::Invalid(
                "TournamentDefaults: players_page_size = 0".into(),
            ));
        }
        if self.tournament.rounds_limit == 0 {
            return Err(ConfigError::Invalid(
                "TournamentDefaults: rounds_limit = 0".into(),
            ));
        }

        self.validation.validate()
    }
}
