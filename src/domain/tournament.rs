use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{GameId, TournamentId, UserId};
use crate::infra::keyed::deserialize_null_default;

/// Флаг "живого" соединения с каналом.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub online: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentMeta {
    #[serde(deserialize_with = "deserialize_rounds_limit")]
    pub rounds_limit: u32,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub teams: Vec<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

const DEFAULT_ROUNDS_LIMIT: u32 = 1;

fn deserialize_rounds_limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(DEFAULT_ROUNDS_LIMIT))
}

impl Default for TournamentMeta {
    fn default() -> Self {
        Self {
            rounds_limit: DEFAULT_ROUNDS_LIMIT,
            teams: Vec::new(),
            extra: IndexMap::new(),
        }
    }
}

/// Поддерево `tournament`: конфигурация + рантайм турнира.
///
/// Инвариант: при сборке `channel.online == !is_live`. Дальше флаг меняют
/// только события соединения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentState {
    pub id: Option<TournamentId>,
    pub level: String,
    pub is_live: bool,
    pub creator: Value,
    pub creator_id: Option<UserId>,
    #[serde(rename = "type")]
    pub tournament_type: Option<String>,
    pub state: String,
    pub name: String,
    pub description: Option<String>,
    /// id матча -> матч.
    pub matches: IndexMap<String, Value>,
    pub game_results: IndexMap<String, Value>,
    /// id игрока -> игрок.
    pub players: IndexMap<String, Value>,
    pub players_limit: u32,
    pub players_count: u32,
    pub starts_at: Option<String>,
    pub inserted_at: Option<String>,
    pub meta: TournamentMeta,

    pub access_type: String,
    pub access_token: Option<String>,
    pub current_round: Option<u32>,
    pub default_language: String,
    pub last_round_started_at: Option<String>,
    pub last_round_ended_at: Option<String>,
    pub match_timeout_seconds: u64,
    pub break_duration_seconds: Option<u64>,
    pub played_pair_ids: Vec<Value>,

    /// "off" | "on"
    pub break_state: String,

    pub task_strategy: String,
    pub task_provider: String,

    // Курсор постраничного списка игроков.
    pub players_page_number: u32,
    pub players_page_size: u32,

    pub channel: Channel,
    pub use_chat: bool,

    /// Поля, о которых мы не знаем, переносятся как есть.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Поддерево `tournamentPlayer`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPlayerState {
    pub tournament_id: Option<TournamentId>,
    pub player_id: Option<UserId>,
    pub game_id: Option<GameId>,
    pub channel: Channel,
}
