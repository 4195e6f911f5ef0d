use crate::api::errors::AssetError;
use crate::config::SessionConfig;
use crate::derivers::{
    derive_builder_state, derive_editor_state, derive_execution_output, derive_game_state,
    derive_rating_page, derive_tournament_player, derive_tournament_state, derive_user_state,
    partition_tournaments,
};
use crate::infra::assets::{AssetBag, NormalizedAssets};
use crate::infra::ids::LabelGenerator;
use crate::infra::preferences::ClientPreferences;
use crate::state::SessionSnapshot;

/// Сборщик снапшота сессии.
///
/// Один вызов `synthesize` = одна сессия. Повторный вызов соберёт новый
/// снапшот с нуля, но "обновлять" им уже живую сессию нельзя: всё, что
/// произошло после старта, живёт только в слое событий.
#[derive(Clone, Debug, Default)]
pub struct SessionBootstrap {
    config: SessionConfig,
}

impl SessionBootstrap {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Собрать все поддеревья в один снапшот. Ошибок нет: отсутствие любого
    /// входа закрывается дефолтом.
    pub fn synthesize(
        &self,
        assets: &NormalizedAssets,
        prefs: &ClientPreferences,
    ) -> SessionSnapshot {
        let span = tracing::info_span!("synthesize_session", playback = assets.is_record);
        let _guard = span.enter();

        let config = &self.config;
        let playback = assets.is_record;
        let game = assets.game.as_ref();

        // Участники -> все per-player мапы.
        let game_state = derive_game_state(game, playback);
        let editor = derive_editor_state(game, &assets.langs, playback, &config.default_language);
        let execution_output = derive_execution_output(game, playback);

        // Черновик -> шаблоны -> валидация (внутри derive_builder_state).
        let labels = LabelGenerator::new();
        let builder = derive_builder_state(assets.task.as_ref(), config, &labels);

        let tournament_is_live = assets
            .tournament
            .as_ref()
            .and_then(|t| t.is_live)
            .unwrap_or(false);
        let tournament =
            derive_tournament_state(assets.tournament.as_ref(), tournament_is_live, config);
        let tournament_player = derive_tournament_player(assets.tournament_id, assets.player_id);

        let (live_tournaments, completed_tournaments) =
            partition_tournaments(assets.tournaments.clone());

        let rating = derive_rating_page(&assets.users_rating, config);
        let user = derive_user_state(assets.current_user.as_ref(), rating, prefs);

        tracing::info!(
            players = game_state.players.len(),
            has_task = assets.task.is_some(),
            has_tournament = assets.tournament.is_some(),
            live_tournaments = live_tournaments.len(),
            completed_tournaments = completed_tournaments.len(),
            "session snapshot synthesized"
        );

        SessionSnapshot {
            game: game_state,
            tournament,
            tournament_player,
            editor,
            execution_output,
            builder,
            active_games: assets.active_games.clone(),
            completed_games: assets.completed_games.clone(),
            live_tournaments,
            completed_tournaments,
            user,
        }
    }
}

/// Полный проход: мешок ассетов -> нормализация -> снапшот.
pub fn bootstrap_session(
    bag: &AssetBag,
    prefs: &ClientPreferences,
    config: &SessionConfig,
) -> Result<SessionSnapshot, AssetError> {
    let assets = bag.normalize()?;
    Ok(SessionBootstrap::new(config.clone()).synthesize(&assets, prefs))
}
