use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::UserId;

/// Результат выполнения решения игрока (без идентичности).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub result: Option<String>,
    pub result_percent: Option<f64>,
    pub duration_sec: Option<u64>,
    pub check_result: Option<Value>,
}

/// Поддерево `executionOutput`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOutputState {
    pub results: IndexMap<UserId, ExecutionResult>,
    /// Заполняется только при проигрывании записи.
    pub history_results: IndexMap<UserId, ExecutionResult>,
}
