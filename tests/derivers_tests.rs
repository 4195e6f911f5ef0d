// tests/derivers_tests.rs

use battle_session::{
    api::records::{AssertsStatusRecord, GameRecord, PlayerRecord, TaskRecord},
    config::SessionConfig,
    derivers::{
        default_builder_state, derive_asserts_status, derive_builder_state, derive_editor_meta,
        derive_editor_state, derive_editor_text, derive_execution_output,
        derive_execution_results, derive_game_state, derive_game_status, derive_langs_history,
        derive_players, derive_task_draft, derive_task_templates, ParticipantEditor,
    },
    domain::{
        builder::{
            AssertExample, InputSignatureEntry, TaskDraft, TaskLevel, TemplatesState,
            TypeSignature, ValidationStatuses,
        },
        editor::{EditorTextKey, Lang},
        game::{GameRoomMode, GameStateCode, GameStatus, UserType},
        UserId,
    },
    infra::ids::LabelGenerator,
};
use indexmap::IndexMap;
use serde_json::json;

//
// ---------- helpers ----------
//

/// Утилита: участник с языком редактора и текстом.
fn player(id: UserId, name: &str, lang: &str, text: &str) -> PlayerRecord {
    let mut p = PlayerRecord::new(id, name);
    p.editor_lang = Some(lang.to_string());
    p.editor_text = Some(text.to_string());
    p
}

/// Утилита: игра с двумя участниками.
fn two_player_game() -> GameRecord {
    let mut alice = player(1, "alice", "js", "const a = 1;");
    alice.result = Some("ok".to_string());
    alice.result_percent = Some(100.0);

    let bob = player(2, "bob", "ruby", "puts 1");

    GameRecord {
        id: Some(10),
        state: Some(GameStateCode::Playing),
        players: vec![alice, bob],
        use_chat: Some(true),
        ..GameRecord::default()
    }
}

fn signature_entry(name: &str, type_name: &str) -> InputSignatureEntry {
    InputSignatureEntry {
        id: None,
        argument_name: name.to_string(),
        arg_type: Some(TypeSignature::named(type_name)),
        extra: IndexMap::new(),
    }
}

fn example(arguments: Vec<serde_json::Value>, expected: serde_json::Value) -> AssertExample {
    AssertExample {
        id: None,
        arguments,
        expected: Some(expected),
        extra: IndexMap::new(),
    }
}

//
// ---------- game status ----------
//

#[test]
fn absent_game_gives_default_status() {
    assert_eq!(derive_game_status(None, false), GameStatus::default());
}

#[test]
fn game_status_keeps_default_keys_and_takes_present_fields() {
    let game = GameRecord {
        state: Some(GameStateCode::Playing),
        msg: Some("Waiting for opponent".to_string()),
        game_type: Some("duo".to_string()),
        timeout_seconds: Some(300),
        ..GameRecord::default()
    };

    let status = derive_game_status(Some(&game), false);

    assert_eq!(status.state, GameStateCode::Playing);
    assert_eq!(status.msg, "Waiting for opponent");
    assert_eq!(status.game_type.as_deref(), Some("duo"));
    assert_eq!(status.timeout_seconds, Some(300));
    assert!(status.score.is_none());
    assert!(status.rematch_state.is_none());
    assert!(status.checking.is_empty());
    assert!(status.checking_is_consistent());
}

#[test]
fn missing_msg_keeps_default() {
    let status = derive_game_status(Some(&GameRecord::default()), false);
    assert_eq!(status.msg, "");
}

#[test]
fn game_mode_follows_playback_flag_unless_record_sets_it() {
    let game = GameRecord::default();
    assert_eq!(
        derive_game_status(Some(&game), false).mode,
        GameRoomMode::Standard
    );
    assert_eq!(
        derive_game_status(Some(&game), true).mode,
        GameRoomMode::History
    );

    let builder_game = GameRecord {
        mode: Some(GameRoomMode::Builder),
        ..GameRecord::default()
    };
    assert_eq!(
        derive_game_status(Some(&builder_game), true).mode,
        GameRoomMode::Builder
    );
}

//
// ---------- players ----------
//

#[test]
fn players_are_keyed_by_id_with_participant_types() {
    let game = two_player_game();

    let players = derive_players(&game.players);

    assert_eq!(players.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(players[&1_i64].user_type, UserType::FirstPlayer);
    assert_eq!(players[&2_i64].user_type, UserType::SecondPlayer);
    assert_eq!(players[&1_i64].editor_text.as_deref(), Some("const a = 1;"));
}

#[test]
fn duplicate_player_ids_last_write_wins() {
    let list = vec![
        PlayerRecord::new(1, "first"),
        PlayerRecord::new(2, "second"),
        PlayerRecord::new(1, "replacement"),
    ];

    let players = derive_players(&list);

    assert_eq!(players.len(), 2);
    assert_eq!(players[&1_i64].name, "replacement");
    // Позиция ключа – от первого появления.
    assert_eq!(players.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn game_state_carries_task_and_chat_flag() {
    let mut game = two_player_game();
    game.task = Some(json!({ "id": 5, "name": "sum" }));

    let state = derive_game_state(Some(&game), false);

    assert!(state.use_chat);
    assert_eq!(state.task, Some(json!({ "id": 5, "name": "sum" })));
    assert!(state.tournaments_info.is_none());
    assert!(state.alerts.is_empty());
    assert_eq!(state.players.len(), 2);
}

//
// ---------- editor ----------
//

#[test]
fn editor_text_uses_composite_key() {
    let game = two_player_game();
    let participants: Vec<_> = game
        .players
        .iter()
        .map(|p| ParticipantEditor::from_record(p, "js"))
        .collect();

    let text = derive_editor_text(&participants);

    assert_eq!(text.len(), 2);
    assert_eq!(text[&EditorTextKey::new(1, "js")], "const a = 1;");
    assert_eq!(text[&EditorTextKey::new(2, "ruby")], "puts 1");
}

#[test]
fn editor_meta_starts_history_lang_equal_to_current() {
    let participants = vec![ParticipantEditor {
        user_id: 7,
        editor_text: String::new(),
        lang_slug: "python".to_string(),
    }];

    let meta = derive_editor_meta(&participants);

    assert_eq!(meta[&7_i64].user_id, 7);
    assert_eq!(meta[&7_i64].current_lang_slug, "python");
    assert_eq!(meta[&7_i64].history_current_lang_slug, "python");
}

#[test]
fn participant_language_falls_back_to_profile_then_default() {
    let mut profile_lang = PlayerRecord::new(3, "carol");
    profile_lang.lang = Some("python".to_string());
    let nothing = PlayerRecord::new(4, "dave");

    let p3 = ParticipantEditor::from_record(&profile_lang, "js");
    let p4 = ParticipantEditor::from_record(&nothing, "js");

    assert_eq!(p3.lang_slug, "python");
    assert_eq!(p4.lang_slug, "js");
    assert_eq!(p4.editor_text, "");
}

#[test]
fn langs_history_only_in_playback() {
    let participants = vec![
        ParticipantEditor {
            user_id: 1,
            editor_text: String::new(),
            lang_slug: "js".to_string(),
        },
        ParticipantEditor {
            user_id: 2,
            editor_text: String::new(),
            lang_slug: "ruby".to_string(),
        },
    ];

    assert!(derive_langs_history(&participants, false).is_empty());

    let history = derive_langs_history(&participants, true);
    assert_eq!(history[&1_i64], "js");
    assert_eq!(history[&2_i64], "ruby");
}

#[test]
fn editor_state_prefers_game_langs_over_catalog() {
    let catalog = vec![lang("js"), lang("ruby")];

    let mut game = two_player_game();
    let state = derive_editor_state(Some(&game), &catalog, false, "js");
    assert_eq!(state.langs.len(), 2);

    game.langs = Some(vec![lang("clojure")]);
    let state = derive_editor_state(Some(&game), &catalog, false, "js");
    assert_eq!(state.langs.len(), 1);
    assert_eq!(state.langs[0].slug, "clojure");

    let no_game = derive_editor_state(None, &catalog, false, "js");
    assert!(no_game.meta.is_empty());
    assert_eq!(no_game.langs, catalog);
}

#[test]
fn editor_text_history_follows_playback() {
    let game = two_player_game();

    let live = derive_editor_state(Some(&game), &[], false, "js");
    assert!(live.text_history.is_empty());

    let replay = derive_editor_state(Some(&game), &[], true, "js");
    assert_eq!(replay.text_history, replay.text);
}

fn lang(slug: &str) -> Lang {
    Lang {
        slug: slug.to_string(),
        name: slug.to_uppercase(),
        version: None,
        solution_template: None,
        arguments_generator_template: None,
        extra: IndexMap::new(),
    }
}

//
// ---------- execution output ----------
//

#[test]
fn execution_results_drop_identity_fields() {
    let game = two_player_game();

    let results = derive_execution_results(&game.players);

    assert_eq!(results.len(), 2);
    assert_eq!(results[&1_i64].result.as_deref(), Some("ok"));
    assert_eq!(results[&1_i64].result_percent, Some(100.0));
    assert!(results[&2_i64].result.is_none());
}

#[test]
fn history_results_only_in_playback() {
    let game = two_player_game();

    let live = derive_execution_output(Some(&game), false);
    assert!(live.history_results.is_empty());
    assert_eq!(live.results.len(), 2);

    let replay = derive_execution_output(Some(&game), true);
    assert_eq!(replay.history_results, replay.results);

    let none = derive_execution_output(None, true);
    assert!(none.results.is_empty());
    assert!(none.history_results.is_empty());
}

//
// ---------- builder ----------
//

#[test]
fn absent_task_gives_blank_draft() {
    let labels = LabelGenerator::new();
    assert_eq!(derive_task_draft(None, "js", &labels), TaskDraft::blank("js"));
}

#[test]
fn signature_entries_and_examples_get_fresh_ids() {
    let task = TaskRecord {
        name: Some("sum".to_string()),
        level: Some(TaskLevel::Easy),
        input_signature: Some(vec![signature_entry("a", "integer"), signature_entry("b", "integer")]),
        asserts_examples: Some(vec![example(vec![json!(1), json!(2)], json!(3))]),
        ..TaskRecord::default()
    };
    let labels = LabelGenerator::new();

    let draft = derive_task_draft(Some(&task), "js", &labels);

    let ids: Vec<_> = draft
        .input_signature
        .iter()
        .map(|e| e.id.clone().unwrap())
        .collect();
    assert_eq!(ids, vec!["param-1".to_string(), "param-2".to_string()]);
    assert_eq!(draft.asserts_examples[0].id.as_deref(), Some("example-1"));

    // Остальные поля – из записи или дефолта.
    assert_eq!(draft.name, "sum");
    assert_eq!(draft.level, TaskLevel::Easy);
    assert_eq!(draft.generator_lang, "js");
    assert_eq!(draft.output_signature.output_type.name, "integer");
}

#[test]
fn server_ids_on_signature_entries_are_replaced() {
    let mut entry = signature_entry("a", "integer");
    entry.id = Some("server-side".to_string());
    let task = TaskRecord {
        input_signature: Some(vec![entry]),
        ..TaskRecord::default()
    };

    let draft = derive_task_draft(Some(&task), "js", &LabelGenerator::new());

    assert_eq!(draft.input_signature[0].id.as_deref(), Some("param-1"));
}

#[test]
fn templates_are_keyed_by_generator_language() {
    let mut draft = TaskDraft::blank("ruby");
    draft.solution = "def solution; end".to_string();
    draft.arguments_generator = "def generate; end".to_string();

    let templates = derive_task_templates(Some(&draft));

    assert_eq!(templates.state, TemplatesState::Ready);
    assert_eq!(templates.solution["ruby"], "def solution; end");
    assert_eq!(templates.arguments_generator["ruby"], "def generate; end");

    let loading = derive_task_templates(None);
    assert_eq!(loading.state, TemplatesState::Loading);
    assert!(loading.solution.is_empty());
}

#[test]
fn asserts_status_merges_over_default() {
    assert_eq!(derive_asserts_status(None).status, "none");

    let task = TaskRecord {
        asserts_status: Some(AssertsStatusRecord {
            status: Some("ok".to_string()),
            output: None,
        }),
        ..TaskRecord::default()
    };
    let status = derive_asserts_status(Some(&task));
    assert_eq!(status.status, "ok");
    assert_eq!(status.output, "");
}

#[test]
fn builder_without_task_is_the_default() {
    let config = SessionConfig::default();

    let state = derive_builder_state(None, &config, &LabelGenerator::new());

    assert_eq!(state, default_builder_state(&config));
    assert_eq!(state.validation_statuses, ValidationStatuses::defaults());
    assert_eq!(state.generator_lang, "js");
}

#[test]
fn builder_text_buffers_mirror_templates() {
    let config = SessionConfig::default();
    let task = TaskRecord {
        generator_lang: Some("python".to_string()),
        solution: Some("def solution(): pass".to_string()),
        ..TaskRecord::default()
    };

    let state = derive_builder_state(Some(&task), &config, &LabelGenerator::new());

    assert_eq!(state.generator_lang, "python");
    assert_eq!(state.text_solution, state.templates.solution);
    assert_eq!(state.text_arguments_generator, state.templates.arguments_generator);
    assert_eq!(state.text_solution["python"], "def solution(): pass");
    assert!(state.validation_statuses.is_complete());
}
