use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::api::errors::AssetError;
use crate::api::records::{GameRecord, TaskRecord, TournamentRecord};
use crate::domain::editor::Lang;
use crate::domain::user::{CurrentUser, RatedUser};
use crate::domain::{TournamentId, UserId};
use crate::infra::case::camelize_keys;

/// Мешок ассетов, встроенный сервером в страницу.
///
/// Ключи – как их называет сервер (snake_case), значения – сырой JSON.
/// Любой ассет может отсутствовать.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetBag {
    pub current_user: Option<Value>,
    pub game: Option<Value>,
    pub task: Option<Value>,
    pub tournament: Option<Value>,
    pub tournaments: Option<Value>,
    pub users_rating: Option<Value>,
    pub langs: Option<Value>,
    pub active_games: Option<Value>,
    pub completed_games: Option<Value>,
    pub is_record: Option<bool>,
    pub player_id: Option<UserId>,
    pub tournament_id: Option<TournamentId>,
}

/// Ассеты после нормализации и декодирования.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedAssets {
    pub current_user: Option<CurrentUser>,
    pub game: Option<GameRecord>,
    pub task: Option<TaskRecord>,
    pub tournament: Option<TournamentRecord>,
    /// Плоский список турниров (живые и завершённые вперемешку).
    pub tournaments: Vec<Value>,
    pub users_rating: Vec<RatedUser>,
    pub langs: Vec<Lang>,
    pub active_games: Vec<Value>,
    pub completed_games: Vec<Value>,
    /// Сессия открыта как проигрывание записи завершённой игры.
    pub is_record: bool,
    pub player_id: Option<UserId>,
    pub tournament_id: Option<TournamentId>,
}

impl AssetBag {
    pub fn from_json_str(raw: &str) -> Result<Self, AssetError> {
        serde_json::from_str(raw).map_err(AssetError::Parse)
    }

    pub fn from_value(raw: Value) -> Result<Self, AssetError> {
        serde_json::from_value(raw).map_err(AssetError::Parse)
    }

    /// Перевести ключи в camelCase и разобрать каждый ассет в типизированную запись.
    ///
    /// Единственное место, где сборка состояния может упасть: форма данных
    /// не совпала с ожидаемой.
    pub fn normalize(&self) -> Result<NormalizedAssets, AssetError> {
        Ok(NormalizedAssets {
            current_user: decode_opt("current_user", self.current_user.as_ref())?,
            game: decode_opt("game", self.game.as_ref())?,
            task: decode_opt("task", self.task.as_ref())?,
            tournament: decode_opt("tournament", self.tournament.as_ref())?,
            tournaments: decode_list("tournaments", self.tournaments.as_ref())?,
            users_rating: decode_list("users_rating", self.users_rating.as_ref())?,
            langs: decode_list("langs", self.langs.as_ref())?,
            active_games: decode_list("active_games", self.active_games.as_ref())?,
            completed_games: decode_list("completed_games", self.completed_games.as_ref())?,
            is_record: self.is_record.unwrap_or(false),
            player_id: self.player_id,
            tournament_id: self.tournament_id,
        })
    }
}

fn decode_opt<T: DeserializeOwned>(
    asset: &'static str,
    raw: Option<&Value>,
) -> Result<Option<T>, AssetError> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(camelize_keys(value.clone()))
            .map(Some)
            .map_err(|source| AssetError::Decode { asset, source }),
    }
}

fn decode_list<T: DeserializeOwned>(
    asset: &'static str,
    raw: Option<&Value>,
) -> Result<Vec<T>, AssetError> {
    Ok(decode_opt::<Vec<T>>(asset, raw)?.unwrap_or_default())
}
