use serde::Serialize;
use serde_json::Value;

use crate::domain::builder::BuilderState;
use crate::domain::editor::EditorState;
use crate::domain::execution::ExecutionOutputState;
use crate::domain::game::GameState;
use crate::domain::tournament::{TournamentPlayerState, TournamentState};
use crate::domain::user::UserState;

/// Корневой снапшот состояния сессии.
///
/// Собирается один раз при старте (`SessionBootstrap::synthesize`). Дальше его
/// меняет только слой событий/редьюсеров, который обязан сохранять инварианты:
/// - множества id игроков в `game.players`, `editor.meta`,
///   `execution_output.results` совпадают;
/// - `game.game_status.checking` пуст вне состояния проверок;
/// - у `builder.validation_statuses` есть статус для каждого поля.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub game: GameState,
    pub tournament: TournamentState,
    pub tournament_player: TournamentPlayerState,
    pub editor: EditorState,
    pub execution_output: ExecutionOutputState,
    pub builder: BuilderState,
    pub active_games: Vec<Value>,
    pub completed_games: Vec<Value>,
    pub live_tournaments: Vec<Value>,
    pub completed_tournaments: Vec<Value>,
    pub user: UserState,
}

impl SessionSnapshot {
    /// Проверка инвариантов снапшота (для тестов и отладочных сборок).
    pub fn invariants_hold(&self) -> bool {
        let players: Vec<_> = self.game.players.keys().collect();
        let meta: Vec<_> = self.editor.meta.keys().collect();
        let results: Vec<_> = self.execution_output.results.keys().collect();

        players == meta
            && players == results
            && self.game.game_status.checking_is_consistent()
            && self.builder.validation_statuses.is_complete()
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
