use indexmap::IndexMap;
use serde_json::Value;

use crate::api::records::TournamentRecord;
use crate::config::SessionConfig;
use crate::domain::tournament::{Channel, TournamentMeta, TournamentPlayerState, TournamentState};
use crate::domain::{TournamentId, UserId};

/// Дефолтный турнир (ничего не пришло с сервера).
pub fn default_tournament_state(config: &SessionConfig) -> TournamentState {
    let defaults = &config.tournament;

    TournamentState {
        id: None,
        level: "elementary".to_string(),
        is_live: false,
        creator: Value::Object(Default::default()),
        creator_id: None,
        tournament_type: None,
        state: "loading".to_string(),
        name: String::new(),
        description: None,
        matches: IndexMap::new(),
        game_results: IndexMap::new(),
        players: IndexMap::new(),
        players_limit: defaults.players_limit,
        players_count: 0,
        starts_at: None,
        inserted_at: None,
        meta: TournamentMeta {
            rounds_limit: defaults.rounds_limit,
            ..TournamentMeta::default()
        },
        access_type: defaults.access_type.clone(),
        access_token: None,
        current_round: None,
        default_language: config.default_language.clone(),
        last_round_started_at: None,
        last_round_ended_at: None,
        match_timeout_seconds: 0,
        break_duration_seconds: None,
        played_pair_ids: Vec::new(),
        break_state: "off".to_string(),
        task_strategy: defaults.task_strategy.clone(),
        task_provider: defaults.task_provider.clone(),
        players_page_number: 1,
        players_page_size: defaults.players_page_size,
        channel: Channel { online: false },
        use_chat: false,
        extra: IndexMap::new(),
    }
}

/// Турнир: дефолты + поля записи, затем `channel.online = !is_live`.
///
/// `channel` из записи не учитывается никогда. Без записи – дефолт как есть.
pub fn derive_tournament_state(
    record: Option<&TournamentRecord>,
    is_live: bool,
    config: &SessionConfig,
) -> TournamentState {
    let d = default_tournament_state(config);
    let Some(t) = record else {
        return d;
    };

    TournamentState {
        id: t.id.or(d.id),
        level: t.level.clone().unwrap_or(d.level),
        is_live: t.is_live.unwrap_or(d.is_live),
        creator: t.creator.clone().unwrap_or(d.creator),
        creator_id: t.creator_id.or(d.creator_id),
        tournament_type: t.tournament_type.clone().or(d.tournament_type),
        state: t.state.clone().unwrap_or(d.state),
        name: t.name.clone().unwrap_or(d.name),
        description: t.description.clone().or(d.description),
        matches: t.matches.clone().unwrap_or(d.matches),
        game_results: t.game_results.clone().unwrap_or(d.game_results),
        players: t.players.clone().unwrap_or(d.players),
        players_limit: t.players_limit.unwrap_or(d.players_limit),
        players_count: t.players_count.unwrap_or(d.players_count),
        starts_at: t.starts_at.clone().or(d.starts_at),
        inserted_at: t.inserted_at.clone().or(d.inserted_at),
        meta: t.meta.clone().unwrap_or(d.meta),
        access_type: t.access_type.clone().unwrap_or(d.access_type),
        access_token: t.access_token.clone().or(d.access_token),
        current_round: t.current_round.or(d.current_round),
        default_language: t.default_language.clone().unwrap_or(d.default_language),
        last_round_started_at: t.last_round_started_at.clone().or(d.last_round_started_at),
        last_round_ended_at: t.last_round_ended_at.clone().or(d.last_round_ended_at),
        match_timeout_seconds: t.match_timeout_seconds.unwrap_or(d.match_timeout_seconds),
        break_duration_seconds: t.break_duration_seconds.or(d.break_duration_seconds),
        played_pair_ids: t.played_pair_ids.clone().unwrap_or(d.played_pair_ids),
        break_state: t.break_state.clone().unwrap_or(d.break_state),
        task_strategy: t.task_strategy.clone().unwrap_or(d.task_strategy),
        task_provider: t.task_provider.clone().unwrap_or(d.task_provider),
        players_page_number: t.players_page_number.unwrap_or(d.players_page_number),
        players_page_size: t.players_page_size.unwrap_or(d.players_page_size),
        // Уже живой турнир не должен объявлять свою "свежесть".
        channel: Channel { online: !is_live },
        use_chat: t.use_chat.unwrap_or(d.use_chat),
        extra: t.extra.clone(),
    }
}

/// Элемент списка турниров, у которого есть флаг "идёт сейчас".
pub trait Liveness {
    fn is_live(&self) -> bool;
}

impl Liveness for Value {
    fn is_live(&self) -> bool {
        self.get("isLive").and_then(Value::as_bool).unwrap_or(false)
    }
}

impl Liveness for TournamentState {
    fn is_live(&self) -> bool {
        self.is_live
    }
}

/// Разбить список на (живые, завершённые) с сохранением относительного порядка.
pub fn partition_tournaments<T: Liveness>(list: Vec<T>) -> (Vec<T>, Vec<T>) {
    list.into_iter().partition(|t| t.is_live())
}

/// Поддерево `tournamentPlayer`.
pub fn derive_tournament_player(
    tournament_id: Option<TournamentId>,
    player_id: Option<UserId>,
) -> TournamentPlayerState {
    TournamentPlayerState {
        tournament_id,
        player_id,
        game_id: None,
        channel: Channel { online: false },
    }
}
