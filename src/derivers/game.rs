use indexmap::IndexMap;

use crate::api::records::{GameRecord, PlayerRecord};
use crate::domain::game::{GameRoomMode, GameState, GameStatus, Player, UserType};
use crate::domain::UserId;
use crate::infra::keyed::fold_last_write_wins;

/// Статус игры: дефолты + присутствующие в записи поля.
///
/// Ключи дефолта никогда не теряются. `checking` всегда стартует пустым:
/// проверки "в полёте" появляются только из событий.
pub fn derive_game_status(record: Option<&GameRecord>, playback: bool) -> GameStatus {
    let defaults = GameStatus::default();
    let Some(game) = record else {
        return defaults;
    };

    let mode = game.mode.unwrap_or(if playback {
        GameRoomMode::History
    } else {
        GameRoomMode::Standard
    });

    GameStatus {
        state: game.state.unwrap_or(defaults.state),
        msg: game.msg.clone().unwrap_or(defaults.msg),
        game_type: game.game_type.clone().or(defaults.game_type),
        mode,
        starts_at: game.starts_at.clone().or(defaults.starts_at),
        score: game.score.clone().or(defaults.score),
        timeout_seconds: game.timeout_seconds.or(defaults.timeout_seconds),
        rematch_state: game.rematch_state.or(defaults.rematch_state),
        rematch_initiator_id: game.rematch_initiator_id.or(defaults.rematch_initiator_id),
        checking: IndexMap::new(),
        solution_status: game.solution_status.clone().or(defaults.solution_status),
    }
}

/// Свернуть участников в мапу по id.
///
/// Дубликаты id не отвергаются: побеждает последняя запись. Это поведение
/// сервера, на которое опирается клиент, поэтому сохраняем его, но пишем warn.
pub fn derive_players(list: &[PlayerRecord]) -> IndexMap<UserId, Player> {
    let folded = fold_last_write_wins(list.iter().enumerate(), |(index, record)| {
        (record.id, player_from_record(record, index))
    });

    for id in &folded.overwritten {
        tracing::warn!(player_id = *id, "duplicate participant id in match record, last entry wins");
    }

    folded.map
}

fn player_from_record(record: &PlayerRecord, index: usize) -> Player {
    Player {
        id: record.id,
        name: record.name.clone(),
        rating: record.rating,
        rating_diff: record.rating_diff,
        lang: record.lang.clone(),
        editor_lang: record.editor_lang.clone(),
        editor_text: record.editor_text.clone(),
        avatar_url: record.avatar_url.clone(),
        is_bot: record.is_bot,
        is_guest: record.is_guest,
        creator: record.creator,
        result: record.result.clone(),
        result_percent: record.result_percent,
        duration_sec: record.duration_sec,
        check_result: record.check_result.clone(),
        rank: record.rank,
        user_type: UserType::for_participant_index(index),
    }
}

/// Поддерево `game` целиком.
pub fn derive_game_state(record: Option<&GameRecord>, playback: bool) -> GameState {
    let Some(game) = record else {
        return GameState::default();
    };

    GameState {
        game_status: derive_game_status(Some(game), playback),
        task: game.task.clone(),
        players: derive_players(&game.players),
        tournaments_info: None,
        use_chat: game.use_chat.unwrap_or(false),
        alerts: IndexMap::new(),
    }
}
