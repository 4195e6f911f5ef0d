//! Входные записи после нормализации ключей.
//!
//! Все поля необязательные: отсутствие поля означает "взять дефолт".
//! Обязателен только `id` участника – без него запись считается битой.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::builder::{
    AssertExample, InputSignatureEntry, OutputSignature, TaskLevel, TaskStateCode, TaskVisibility,
};
use crate::domain::editor::Lang;
use crate::domain::game::{GameRoomMode, GameStateCode, RematchState};
use crate::domain::tournament::TournamentMeta;
use crate::domain::{GameId, TournamentId, UserId};
use crate::infra::keyed::{deserialize_keyed_opt, deserialize_null_default};

/// Запись игры (матча).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameRecord {
    pub id: Option<GameId>,
    pub state: Option<GameStateCode>,
    pub msg: Option<String>,
    #[serde(rename = "type")]
    pub game_type: Option<String>,
    pub mode: Option<GameRoomMode>,
    pub starts_at: Option<String>,
    pub score: Option<Value>,
    pub timeout_seconds: Option<u64>,
    pub rematch_state: Option<RematchState>,
    pub rematch_initiator_id: Option<UserId>,
    pub solution_status: Option<Value>,
    pub task: Option<Value>,
    /// Участники в порядке, в котором их прислал сервер.
    #[serde(deserialize_with = "deserialize_null_default")]
    pub players: Vec<PlayerRecord>,
    pub langs: Option<Vec<Lang>>,
    pub use_chat: Option<bool>,
}

/// Участник матча.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: UserId,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub rating_diff: Option<i64>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub editor_lang: Option<String>,
    #[serde(default)]
    pub editor_text: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub is_bot: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub is_guest: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub creator: bool,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub result_percent: Option<f64>,
    #[serde(default)]
    pub duration_sec: Option<u64>,
    #[serde(default)]
    pub check_result: Option<Value>,
    #[serde(default)]
    pub rank: Option<i64>,
}

impl PlayerRecord {
    /// Минимальная запись участника (удобно в тестах и фикстурах).
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rating: None,
            rating_diff: None,
            lang: None,
            editor_lang: None,
            editor_text: None,
            avatar_url: None,
            is_bot: false,
            is_guest: false,
            creator: false,
            result: None,
            result_percent: None,
            duration_sec: None,
            check_result: None,
            rank: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssertsStatusRecord {
    pub status: Option<String>,
    pub output: Option<String>,
}

/// Запись задачи.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub level: Option<TaskLevel>,
    pub state: Option<TaskStateCode>,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub input_signature: Option<Vec<InputSignatureEntry>>,
    pub output_signature: Option<OutputSignature>,
    pub asserts_examples: Option<Vec<AssertExample>>,
    pub asserts: Option<Vec<Value>>,
    pub examples: Option<String>,
    pub solution: Option<String>,
    pub arguments_generator: Option<String>,
    pub generator_lang: Option<String>,
    pub visibility: Option<TaskVisibility>,
    pub tags: Option<Vec<String>>,
    pub origin: Option<String>,
    pub creator_id: Option<UserId>,
    pub asserts_status: Option<AssertsStatusRecord>,
}

/// Запись турнира.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentRecord {
    pub id: Option<TournamentId>,
    pub level: Option<String>,
    pub is_live: Option<bool>,
    pub creator: Option<Value>,
    pub creator_id: Option<UserId>,
    #[serde(rename = "type")]
    pub tournament_type: Option<String>,
    pub state: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_keyed_opt")]
    pub matches: Option<IndexMap<String, Value>>,
    #[serde(deserialize_with = "deserialize_keyed_opt")]
    pub game_results: Option<IndexMap<String, Value>>,
    #[serde(deserialize_with = "deserialize_keyed_opt")]
    pub players: Option<IndexMap<String, Value>>,
    pub players_limit: Option<u32>,
    pub players_count: Option<u32>,
    pub starts_at: Option<String>,
    pub inserted_at: Option<String>,
    pub meta: Option<TournamentMeta>,
    pub access_type: Option<String>,
    pub access_token: Option<String>,
    pub current_round: Option<u32>,
    pub default_language: Option<String>,
    pub last_round_started_at: Option<String>,
    pub last_round_ended_at: Option<String>,
    pub match_timeout_seconds: Option<u64>,
    pub break_duration_seconds: Option<u64>,
    pub played_pair_ids: Option<Vec<Value>>,
    pub break_state: Option<String>,
    pub task_strategy: Option<String>,
    pub task_provider: Option<String>,
    pub players_page_number: Option<u32>,
    pub players_page_size: Option<u32>,
    /// Присланный сервером канал игнорируется: флаг выводится из `is_live`.
    pub channel: Option<Value>,
    pub use_chat: Option<bool>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}
