use indexmap::IndexMap;

use crate::api::records::{GameRecord, PlayerRecord};
use crate::domain::execution::{ExecutionOutputState, ExecutionResult};
use crate::domain::UserId;
use crate::infra::keyed::fold_last_write_wins;

/// Результаты выполнения по id участника (без полей идентичности).
pub fn derive_execution_results(list: &[PlayerRecord]) -> IndexMap<UserId, ExecutionResult> {
    fold_last_write_wins(list, |p| {
        (
            p.id,
            ExecutionResult {
                result: p.result.clone(),
                result_percent: p.result_percent,
                duration_sec: p.duration_sec,
                check_result: p.check_result.clone(),
            },
        )
    })
    .map
}

/// Поддерево `executionOutput`; история – только при проигрывании записи.
pub fn derive_execution_output(record: Option<&GameRecord>, playback: bool) -> ExecutionOutputState {
    let Some(game) = record else {
        return ExecutionOutputState::default();
    };

    let results = derive_execution_results(&game.players);
    let history_results = if playback {
        results.clone()
    } else {
        IndexMap::new()
    };

    ExecutionOutputState {
        results,
        history_results,
    }
}
