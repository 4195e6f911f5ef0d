//! Чистые функции "нормализованная запись (или её отсутствие) + дефолты -> сущность".
//!
//! Ни один деривер не паникует на корректных данных; при отсутствии записи
//! возвращается именованный дефолт.
//!
//! Порядок зависимостей (соблюдает `bootstrap`):
//!   - черновик задачи -> шаблоны -> статусы валидации;
//!   - список участников -> все per-player мапы.

pub mod builder;
pub mod editor;
pub mod execution;
pub mod game;
pub mod tournament;
pub mod user;
pub mod validation;

pub use builder::{
    default_builder_state, derive_asserts_status, derive_builder_state, derive_task_draft,
    derive_task_templates,
};
pub use editor::{
    derive_editor_meta, derive_editor_state, derive_editor_text, derive_langs_history,
    ParticipantEditor,
};
pub use execution::{derive_execution_output, derive_execution_results};
pub use game::{derive_game_state, derive_game_status, derive_players};
pub use tournament::{
    default_tournament_state, derive_tournament_player, derive_tournament_state,
    partition_tournaments, Liveness,
};
pub use user::{derive_rating_page, derive_user_state};
pub use validation::{derive_validation_statuses, Validator, ValidatorRegistry};
