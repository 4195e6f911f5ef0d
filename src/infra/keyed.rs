use std::hash::Hash;

use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Результат свёртки списка в мапу.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedFold<K: Hash + Eq, V> {
    pub map: IndexMap<K, V>,
    /// Ключи, значения которых были перезаписаны (дубликаты во входе).
    pub overwritten: Vec<K>,
}

/// Свернуть элементы в мапу по ключу: побеждает последняя запись.
///
/// Позиция ключа – позиция его первого появления, значение – от последнего.
/// Перезаписанные ключи возвращаются отдельно, чтобы вызывающий мог их залогировать.
pub fn fold_last_write_wins<T, K, V>(
    items: impl IntoIterator<Item = T>,
    mut project: impl FnMut(T) -> (K, V),
) -> KeyedFold<K, V>
where
    K: Hash + Eq + Clone,
{
    let mut map = IndexMap::new();
    let mut overwritten = Vec::new();

    for item in items {
        let (key, value) = project(item);
        if map.insert(key.clone(), value).is_some() {
            overwritten.push(key);
        }
    }

    KeyedFold { map, overwritten }
}

/// Десериализатор для коллекций "по id", которые сервер может прислать
/// и мапой `{ "1": {...} }`, и массивом `[{ "id": 1, ... }]`.
///
/// Массив сворачивается по `id` (последний выигрывает). Элемент без `id` –
/// битые данные, это ошибка декодирования.
pub fn deserialize_keyed_opt<'de, D>(
    deserializer: D,
) -> Result<Option<IndexMap<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;

    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map.into_iter().collect())),
        Some(Value::Array(items)) => {
            let mut keyed = Vec::with_capacity(items.len());
            for item in items {
                let key = match item.get("id") {
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::String(s)) => s.clone(),
                    _ => return Err(<D::Error as DeError>::custom("keyed collection entry without `id`")),
                };
                keyed.push((key, item));
            }
            Ok(Some(fold_last_write_wins(keyed, |kv| kv).map))
        }
        Some(other) => Err(<D::Error as DeError>::custom(format!(
            "expected map or list of entries, got {other}"
        ))),
    }
}

/// `null` в поле с дефолтом – то же, что отсутствие поля.
///
/// Сервер кодирует "нет значения" как `null`, а не пропуском ключа.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
