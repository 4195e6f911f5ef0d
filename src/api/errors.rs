use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

/// Ошибки чтения мешка ассетов.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("мешок ассетов не является корректным JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("ассет `{asset}` имеет неожиданную форму: {source}")]
    Decode {
        asset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Ошибки внешнего канала загрузки (статистика, сыгранные игры).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("запрос {path} не выполнен: {reason}")]
    Transport { path: String, reason: String },

    #[error("запрос {path} вернул статус {status}")]
    Status { path: String, status: u16 },

    #[error("ответ {path} имеет неожиданную форму: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Ошибки, которые видит внешний клиент (CLI, обёртки).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, файл не читается).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Мешок ассетов битый.
    #[error("invalid assets: {0}")]
    InvalidAssets(String),

    /// Конфиг не прошёл валидацию.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Внешний источник данных недоступен.
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// Внутренняя ошибка.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AssetError> for ApiError {
    fn from(err: AssetError) -> Self {
        ApiError::InvalidAssets(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::InvalidConfig(err.to_string())
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        ApiError::FetchFailed(err.to_string())
    }
}
