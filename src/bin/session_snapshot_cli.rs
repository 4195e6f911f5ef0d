// src/bin/session_snapshot_cli.rs

use std::fs;
use std::path::PathBuf;

use battle_session::api::ApiError;
use battle_session::infra::preferences::{InMemoryPreferenceStore, PreferenceStore};
use battle_session::{bootstrap_session, AssetBag, ClientPreferences, SessionConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Собрать стартовый снапшот сессии из JSON-мешка ассетов и напечатать его.
#[derive(Debug, Parser)]
#[command(name = "session_snapshot_cli")]
struct Args {
    /// Файл с мешком ассетов (как его встраивает сервер).
    #[arg(long)]
    assets: PathBuf,

    /// Файл с конфигом сессии (JSON); без него – дефолты.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Язык по умолчанию, если конфиг не задан.
    #[arg(long)]
    lang: Option<String>,

    /// Сохранённое значение настройки звука, как в localStorage ("true", "false", "null").
    #[arg(long)]
    mute: Option<String>,

    /// Печатать JSON с отступами.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), ApiError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match (&args.config, &args.lang) {
        (Some(path), _) => SessionConfig::from_json_str(&read_file(path)?)?,
        (None, Some(lang)) => {
            let config = SessionConfig::for_language(lang.as_str());
            config.validate()?;
            config
        }
        (None, None) => SessionConfig::default(),
    };

    let bag = AssetBag::from_json_str(&read_file(&args.assets)?)?;

    let mut store = InMemoryPreferenceStore::new();
    if let Some(raw) = args.mute {
        store.set_item(&config.mute_preference_key, raw);
    }
    let prefs = ClientPreferences::load(&store, &config.mute_preference_key);

    let snapshot = bootstrap_session(&bag, &prefs, &config)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    }
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    println!("{rendered}");
    Ok(())
}

fn read_file(path: &PathBuf) -> Result<String, ApiError> {
    fs::read_to_string(path)
        .map_err(|e| ApiError::BadRequest(format!("cannot read {}: {e}", path.display())))
}
