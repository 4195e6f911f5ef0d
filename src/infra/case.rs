use serde_json::{Map, Value};

/// Рекурсивно переписать все ключи объектов из snake_case в camelCase.
///
/// Значения, порядок элементов массивов и глубина вложенности не меняются.
/// Пример: `{ "game_params": { "game_id": 10 } }` -> `{ "gameParams": { "gameId": 10 } }`.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, nested) in map {
                out.insert(camelize_key(&key), camelize_keys(nested));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        scalar => scalar,
    }
}

/// То же для отсутствующей записи: `None` остаётся `None`.
pub fn camelize_opt(value: Option<Value>) -> Option<Value> {
    value.map(camelize_keys)
}

/// Перевод одного ключа.
///
/// Разделители `_`, `-` и пробелы выбрасываются, следующий за ними символ
/// поднимается в верхний регистр; первый символ результата – в нижнем.
/// Числовые ключи (`"1"`, `"2.5"`) не трогаем: это id в мапах.
pub fn camelize_key(key: &str) -> String {
    if is_numerical(key) {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;

    for ch in key.chars() {
        if is_separator(ch) {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    let mut chars = out.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => out,
    }
}

fn is_separator(ch: char) -> bool {
    ch == '_' || ch == '-' || ch.is_whitespace()
}

fn is_numerical(key: &str) -> bool {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return true;
    }
    // "inf"/"nan" Rust парсит как f64, но ключами-числами они не являются.
    // Расхождение с humps: там `"Infinity"` и `"0x1A"` тоже числа, здесь – нет.
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return false;
    }
    trimmed.parse::<f64>().is_ok()
}
