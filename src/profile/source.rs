use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::errors::FetchError;
use crate::domain::UserId;

/// Путь запроса статистики пользователя.
pub fn stats_path(user_id: UserId) -> String {
    format!("/api/v1/user/{user_id}/stats")
}

pub const COMPLETED_GAMES_PATH: &str = "/api/v1/games/completed";

/// Параметры запроса страницы сыгранных игр.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedGamesQuery {
    /// `None` – общая лента, без фильтра по пользователю.
    pub user_id: Option<UserId>,
    pub page_size: u32,
    /// `None` – первая страница.
    pub page: Option<u32>,
}

impl CompletedGamesQuery {
    /// Пары query-параметров в порядке, в котором их ждёт сервер.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id", user_id.to_string()));
        }
        pairs.push(("page_size", self.page_size.to_string()));
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }

    /// Путь + query-строка, например `/api/v1/games/completed?user_id=7&page_size=20&page=2`.
    pub fn to_path(&self) -> String {
        let query = self
            .to_query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{COMPLETED_GAMES_PATH}?{query}")
    }
}

/// Внешний канал загрузки данных профиля.
///
/// Возвращает тело ответа как есть (ключи в snake_case); нормализует загрузчик.
/// Ретраи – забота реализации, загрузчик их не делает.
pub trait StatsSource {
    fn fetch_user_stats(&mut self, user_id: UserId) -> Result<Value, FetchError>;

    fn fetch_completed_games(&mut self, query: &CompletedGamesQuery) -> Result<Value, FetchError>;
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub page_number: u32,
    pub total_pages: u32,
    pub total_entries: u64,
}

/// Страница сыгранных игр (после нормализации ключей).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CompletedGamesPage {
    pub games: Vec<Value>,
    pub page_info: PageInfo,
}
