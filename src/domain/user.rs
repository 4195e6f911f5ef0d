use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::game::UserType;
use crate::domain::UserId;
use crate::infra::keyed::deserialize_null_default;

/// Текущий пользователь, как его прислал сервер (после нормализации ключей).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: UserId,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub is_admin: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub is_guest: bool,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Запись в `user.users`: пользователь + его тип в комнате.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct UserEntry {
    #[serde(flatten)]
    pub user: CurrentUser,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

/// Настройки: профиль текущего пользователя + локальная настройка звука.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UserSettings {
    #[serde(flatten)]
    pub user: Option<CurrentUser>,
    /// `null`, если настройка никогда не сохранялась.
    pub mute: Option<bool>,
}

/// Пользователь в таблице рейтинга.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatedUser {
    pub id: UserId,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub is_bot: bool,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatingPageInfo {
    pub page_number: u32,
    pub page_size: u32,
    /// 0 до первой подгрузки страницы.
    pub total_entries: u64,
}

/// Страница лидерборда + фильтры.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsersRatingPage {
    pub users: Vec<RatedUser>,
    pub page_info: RatingPageInfo,
    pub date_from: Option<String>,
    pub with_bots: bool,
}

/// Поддерево `user`.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub current_user_id: Option<UserId>,
    pub users: IndexMap<UserId, UserEntry>,
    pub users_stats: IndexMap<UserId, Value>,
    pub users_rating_page: UsersRatingPage,
    pub settings: UserSettings,
}
