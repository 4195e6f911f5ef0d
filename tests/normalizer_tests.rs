// tests/normalizer_tests.rs

use battle_session::infra::{
    case::{camelize_key, camelize_keys, camelize_opt},
    keyed::{deserialize_keyed_opt, deserialize_null_default, fold_last_write_wins},
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

//
// ---------- camelize_key ----------
//

#[test]
fn snake_keys_become_camel_case() {
    assert_eq!(camelize_key("user_id"), "userId");
    assert_eq!(camelize_key("is_live"), "isLive");
    assert_eq!(camelize_key("last_round_started_at"), "lastRoundStartedAt");
}

#[test]
fn separators_are_collapsed_and_dropped() {
    assert_eq!(camelize_key("foo__bar"), "fooBar");
    assert_eq!(camelize_key("foo-bar baz"), "fooBarBaz");
    assert_eq!(camelize_key("_id"), "id");
}

#[test]
fn first_char_is_lowercased() {
    assert_eq!(camelize_key("UserName"), "userName");
}

#[test]
fn camel_keys_are_left_as_is() {
    assert_eq!(camelize_key("userId"), "userId");
    assert_eq!(camelize_key("name"), "name");
}

#[test]
fn numeric_keys_are_not_touched() {
    // id-ключи в мапах игроков/матчей.
    assert_eq!(camelize_key("1"), "1");
    assert_eq!(camelize_key("-42"), "-42");
    assert_eq!(camelize_key("2.5"), "2.5");
}

#[test]
fn only_decimal_numbers_count_as_numeric_keys() {
    assert_eq!(camelize_key("1e5"), "1e5");
    assert_eq!(camelize_key(""), "");
    // В отличие от humps, "Infinity" и hex – обычные ключи.
    assert_eq!(camelize_key("Infinity"), "infinity");
    assert_eq!(camelize_key("0x1A"), "0x1A");
}

//
// ---------- camelize_keys ----------
//

#[test]
fn nested_records_are_rewritten_recursively() {
    let input = json!({ "game_params": { "game_id": 10 } });
    assert_eq!(camelize_keys(input), json!({ "gameParams": { "gameId": 10 } }));
}

#[test]
fn arrays_keep_order_and_values() {
    let input = json!({
        "players": [
            { "user_id": 2, "editor_text": "b" },
            { "user_id": 1, "editor_text": "a" },
        ],
        "use_chat": true,
    });

    let out = camelize_keys(input);

    assert_eq!(
        out,
        json!({
            "players": [
                { "userId": 2, "editorText": "b" },
                { "userId": 1, "editorText": "a" },
            ],
            "useChat": true,
        })
    );
}

#[test]
fn string_values_are_not_rewritten() {
    // Нормализация трогает только ключи: значения-состояния остаются snake_case.
    let out = camelize_keys(json!({ "state": "waiting_opponent" }));
    assert_eq!(out["state"], "waiting_opponent");
}

#[test]
fn scalars_pass_through() {
    assert_eq!(camelize_keys(json!(5)), json!(5));
    assert_eq!(camelize_keys(json!("snake_case")), json!("snake_case"));
    assert_eq!(camelize_keys(Value::Null), Value::Null);
}

#[test]
fn absent_record_stays_absent() {
    assert_eq!(camelize_opt(None), None);
    assert_eq!(
        camelize_opt(Some(json!({ "a_b": 1 }))),
        Some(json!({ "aB": 1 }))
    );
}

#[test]
fn flat_record_is_a_one_level_rename() {
    let input = json!({ "player_id": 1, "lang_slug": "js", "is_bot": false });

    let expected: serde_json::Map<String, Value> = input
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| (camelize_key(k), v.clone()))
        .collect();

    assert_eq!(camelize_keys(input), Value::Object(expected));
}

#[test]
fn rewrite_is_idempotent() {
    let input = json!({
        "current_user": { "avatar_url": "x", "sound_settings": { "sound_level": 3 } },
        "tournaments": [{ "is_live": true, "players_count": 2 }],
        "42": { "inner_key": null },
    });

    let once = camelize_keys(input);
    let twice = camelize_keys(once.clone());

    assert_eq!(once, twice);
}

//
// ---------- fold_last_write_wins ----------
//

#[test]
fn fold_keeps_first_position_and_last_value() {
    let items = vec![(1, "a"), (2, "b"), (1, "c")];

    let folded = fold_last_write_wins(items, |kv| kv);

    assert_eq!(folded.map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(folded.map[&1], "c");
    assert_eq!(folded.overwritten, vec![1]);
}

#[test]
fn fold_without_duplicates_reports_nothing() {
    let folded = fold_last_write_wins(vec![3, 1, 2], |id| (id, id * 10));

    assert_eq!(folded.map.len(), 3);
    assert!(folded.overwritten.is_empty());
}

//
// ---------- deserialize_keyed_opt ----------
//

#[derive(Debug, Deserialize)]
struct Holder {
    #[serde(default, deserialize_with = "deserialize_keyed_opt")]
    players: Option<IndexMap<String, Value>>,
}

#[test]
fn keyed_collection_accepts_a_map() {
    let h: Holder = serde_json::from_value(json!({ "players": { "5": { "id": 5 } } })).unwrap();
    let players = h.players.unwrap();
    assert_eq!(players["5"], json!({ "id": 5 }));
}

#[test]
fn keyed_collection_folds_a_list_by_id() {
    let h: Holder = serde_json::from_value(json!({
        "players": [{ "id": 5, "name": "a" }, { "id": 6 }, { "id": 5, "name": "b" }]
    }))
    .unwrap();

    let players = h.players.unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players["5"]["name"], "b");
}

#[test]
fn keyed_collection_rejects_entries_without_id() {
    let res: Result<Holder, _> = serde_json::from_value(json!({ "players": [{ "name": "x" }] }));
    assert!(res.is_err());
}

#[test]
fn keyed_collection_missing_or_null_is_none() {
    let h: Holder = serde_json::from_value(json!({})).unwrap();
    assert!(h.players.is_none());

    let h: Holder = serde_json::from_value(json!({ "players": null })).unwrap();
    assert!(h.players.is_none());
}

//
// ---------- deserialize_null_default ----------
//

#[derive(Debug, Deserialize)]
struct Defaults {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    is_bot: bool,
}

#[test]
fn null_field_decodes_as_default() {
    let d: Defaults = serde_json::from_value(json!({ "name": null, "is_bot": null })).unwrap();
    assert_eq!(d.name, "");
    assert!(!d.is_bot);

    let d: Defaults = serde_json::from_value(json!({})).unwrap();
    assert_eq!(d.name, "");

    let d: Defaults = serde_json::from_value(json!({ "name": "bot", "is_bot": true })).unwrap();
    assert_eq!(d.name, "bot");
    assert!(d.is_bot);
}
