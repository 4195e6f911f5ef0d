use indexmap::IndexMap;

use crate::api::records::{GameRecord, PlayerRecord};
use crate::domain::editor::{EditorMeta, EditorState, EditorTextKey, Lang};
use crate::domain::UserId;
use crate::infra::keyed::fold_last_write_wins;

/// Проекция участника для редактора: кто, на каком языке, что написал.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantEditor {
    pub user_id: UserId,
    pub editor_text: String,
    pub lang_slug: String,
}

impl ParticipantEditor {
    /// Язык редактора; если его нет – язык профиля; если и его нет – дефолтный.
    pub fn from_record(record: &PlayerRecord, default_lang: &str) -> Self {
        let lang_slug = record
            .editor_lang
            .as_deref()
            .or(record.lang.as_deref())
            .unwrap_or(default_lang)
            .to_string();

        Self {
            user_id: record.id,
            editor_text: record.editor_text.clone().unwrap_or_default(),
            lang_slug,
        }
    }
}

pub fn derive_editor_meta(participants: &[ParticipantEditor]) -> IndexMap<UserId, EditorMeta> {
    fold_last_write_wins(participants, |p| {
        (
            p.user_id,
            EditorMeta {
                user_id: p.user_id,
                current_lang_slug: p.lang_slug.clone(),
                history_current_lang_slug: p.lang_slug.clone(),
            },
        )
    })
    .map
}

/// Текст редактора по составному ключу (игрок, язык).
pub fn derive_editor_text(participants: &[ParticipantEditor]) -> IndexMap<EditorTextKey, String> {
    fold_last_write_wins(participants, |p| {
        (
            EditorTextKey::new(p.user_id, p.lang_slug.clone()),
            p.editor_text.clone(),
        )
    })
    .map
}

/// История языков: только при проигрывании записи, иначе пусто.
pub fn derive_langs_history(
    participants: &[ParticipantEditor],
    playback: bool,
) -> IndexMap<UserId, String> {
    if !playback {
        return IndexMap::new();
    }

    fold_last_write_wins(participants, |p| (p.user_id, p.lang_slug.clone())).map
}

/// Поддерево `editor`.
///
/// Языки берутся из игры, если она их прислала, иначе из общего каталога.
pub fn derive_editor_state(
    record: Option<&GameRecord>,
    catalog: &[Lang],
    playback: bool,
    default_lang: &str,
) -> EditorState {
    let Some(game) = record else {
        return EditorState {
            langs: catalog.to_vec(),
            ..EditorState::default()
        };
    };

    let participants: Vec<ParticipantEditor> = game
        .players
        .iter()
        .map(|p| ParticipantEditor::from_record(p, default_lang))
        .collect();

    let text = derive_editor_text(&participants);
    let text_history = if playback {
        text.clone()
    } else {
        IndexMap::new()
    };

    EditorState {
        meta: derive_editor_meta(&participants),
        text,
        text_history,
        langs: game.langs.clone().unwrap_or_else(|| catalog.to_vec()),
        langs_history: derive_langs_history(&participants, playback),
    }
}
