use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::UserId;

/// Состояние игры (жизненный цикл матча).
///
/// Значения на проводе остаются в snake_case: нормализация трогает только ключи.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GameStateCode {
    /// Игра ещё не загружена / не начата.
    #[default]
    Initial,
    /// Игра-песочница в конструкторе задач.
    Builder,
    /// Ждём второго игрока.
    WaitingOpponent,
    /// Идёт игра; только здесь возможны проверки решений.
    Playing,
    /// Игра сохранена (история).
    Stored,
    /// Игра завершена.
    GameOver,
    /// Время вышло.
    Timeout,
    /// Игра отменена.
    Canceled,
}

impl GameStateCode {
    /// Можно ли в этом состоянии иметь проверки "в полёте".
    pub fn allows_checks(self) -> bool {
        matches!(self, GameStateCode::Playing)
    }

    pub fn is_finished(self) -> bool {
        matches!(
            self,
            GameStateCode::Stored
                | GameStateCode::GameOver
                | GameStateCode::Timeout
                | GameStateCode::Canceled
        )
    }
}

/// Режим комнаты.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GameRoomMode {
    #[default]
    None,
    Standard,
    /// Проигрывание записи завершённой игры.
    History,
    Builder,
}

/// Подпроцесс реванша.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RematchState {
    None,
    InApproval,
    Rejected,
    Accepted,
}

/// Тип пользователя в комнате.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    FirstPlayer,
    SecondPlayer,
    Spectator,
}

impl UserType {
    /// Первый участник матча – `first_player`, все следующие – `second_player`.
    pub fn for_participant_index(index: usize) -> Self {
        if index == 0 {
            UserType::FirstPlayer
        } else {
            UserType::SecondPlayer
        }
    }
}

/// Статус игры: конечный автомат + сопутствующие поля.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub state: GameStateCode,
    pub msg: String,
    #[serde(rename = "type")]
    pub game_type: Option<String>,
    pub mode: GameRoomMode,
    pub starts_at: Option<String>,
    pub score: Option<Value>,
    pub timeout_seconds: Option<u64>,
    pub rematch_state: Option<RematchState>,
    pub rematch_initiator_id: Option<UserId>,
    /// Проверки "в полёте": playerId -> маркер.
    /// Пусто везде, кроме состояния `playing`.
    pub checking: IndexMap<UserId, bool>,
    pub solution_status: Option<Value>,
}

impl Default for GameStatus {
    fn default() -> Self {
        Self {
            state: GameStateCode::Initial,
            msg: String::new(),
            game_type: None,
            mode: GameRoomMode::None,
            starts_at: None,
            score: None,
            timeout_seconds: None,
            rematch_state: None,
            rematch_initiator_id: None,
            checking: IndexMap::new(),
            solution_status: None,
        }
    }
}

impl GameStatus {
    /// Инвариант: `checking` не пуст только в состоянии, где идут проверки.
    pub fn checking_is_consistent(&self) -> bool {
        self.checking.is_empty() || self.state.allows_checks()
    }
}

/// Участник матча.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: UserId,
    pub name: String,
    pub rating: Option<i64>,
    pub rating_diff: Option<i64>,
    /// Язык по умолчанию из профиля.
    pub lang: Option<String>,
    /// Язык, на котором сейчас открыт редактор игрока.
    pub editor_lang: Option<String>,
    pub editor_text: Option<String>,
    pub avatar_url: Option<String>,
    pub is_bot: bool,
    pub is_guest: bool,
    pub creator: bool,
    pub result: Option<String>,
    pub result_percent: Option<f64>,
    pub duration_sec: Option<u64>,
    pub check_result: Option<Value>,
    pub rank: Option<i64>,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Error,
    Info,
}

/// Сообщение для пользователя (например, ошибка загрузки).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub status: AlertStatus,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: AlertStatus::Error,
            message: message.into(),
        }
    }
}

/// Поддерево `game`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub game_status: GameStatus,
    pub task: Option<Value>,
    pub players: IndexMap<UserId, Player>,
    pub tournaments_info: Option<Value>,
    pub use_chat: bool,
    pub alerts: IndexMap<String, Alert>,
}

impl GameState {
    /// Добавить алерт и вернуть его ключ.
    pub fn push_alert(&mut self, alert: Alert) -> String {
        let mut n = self.alerts.len() + 1;
        let mut key = format!("alert-{n}");
        while self.alerts.contains_key(&key) {
            n += 1;
            key = format!("alert-{n}");
        }
        self.alerts.insert(key.clone(), alert);
        key
    }
}
