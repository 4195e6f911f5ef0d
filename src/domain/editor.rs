use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::domain::UserId;
use crate::infra::keyed::deserialize_null_default;

/// Составной ключ буфера кода: (игрок, язык).
///
/// Игрок может писать на нескольких языках в одном матче, поэтому текст
/// адресуется парой, а не только id. На проводе – строка `"{userId}:{langSlug}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditorTextKey {
    pub user_id: UserId,
    pub lang_slug: String,
}

impl EditorTextKey {
    pub fn new(user_id: UserId, lang_slug: impl Into<String>) -> Self {
        Self {
            user_id,
            lang_slug: lang_slug.into(),
        }
    }
}

impl fmt::Display for EditorTextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.user_id, self.lang_slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEditorTextKeyError(pub String);

impl fmt::Display for ParseEditorTextKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid editor text key: {}", self.0)
    }
}

impl FromStr for EditorTextKey {
    type Err = ParseEditorTextKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Разделяем по первому ':' – slug языка может содержать что угодно.
        let (id, lang) = s
            .split_once(':')
            .ok_or_else(|| ParseEditorTextKeyError(s.to_string()))?;
        let user_id = id
            .parse::<UserId>()
            .map_err(|_| ParseEditorTextKeyError(s.to_string()))?;
        Ok(Self::new(user_id, lang))
    }
}

impl Serialize for EditorTextKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EditorTextKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Мета редактора одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditorMeta {
    pub user_id: UserId,
    pub current_lang_slug: String,
    /// Язык в режиме проигрывания истории; стартует равным текущему.
    pub history_current_lang_slug: String,
}

/// Язык из каталога.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lang {
    pub slug: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub solution_template: Option<String>,
    #[serde(default)]
    pub arguments_generator_template: Option<String>,
    /// Всё остальное, что прислал сервер, – без изменений.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Поддерево `editor`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub meta: IndexMap<UserId, EditorMeta>,
    pub text: IndexMap<EditorTextKey, String>,
    /// Заполняется только при проигрывании записи.
    pub text_history: IndexMap<EditorTextKey, String>,
    pub langs: Vec<Lang>,
    /// Заполняется только при проигрывании записи.
    pub langs_history: IndexMap<UserId, String>,
}
