use std::collections::HashMap;

/// Хранилище локальных настроек клиента (ключ -> сырая строка).
///
/// В браузере это localStorage; здесь – абстракция, чтобы сборка состояния
/// оставалась чистой функцией от входов.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: String);
}

/// Простая in-memory реализация для тестов и CLI.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPreferenceStore {
    items: HashMap<String, String>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.items.insert(key.to_string(), value);
    }
}

/// Локальные настройки, которые попадают в снапшот.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientPreferences {
    /// `None` – настройка не сохранялась (или сохранена не как bool).
    pub mute: Option<bool>,
}

impl ClientPreferences {
    /// Прочитать настройки из хранилища. Значение хранится как JSON (`"true"`, `"null"`).
    pub fn load(store: &impl PreferenceStore, mute_key: &str) -> Self {
        let mute = store.get_item(mute_key).and_then(|raw| {
            match serde_json::from_str::<Option<bool>>(&raw) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(key = mute_key, %err, "unreadable mute preference, ignoring");
                    None
                }
            }
        });

        Self { mute }
    }

    /// Сохранить настройку звука в хранилище в том же формате.
    pub fn store_mute(store: &mut impl PreferenceStore, mute_key: &str, mute: bool) {
        store.set_item(mute_key, mute.to_string());
    }
}
