use serde_json::Value;

use crate::api::errors::FetchError;
use crate::domain::game::Alert;
use crate::domain::UserId;
use crate::infra::case::camelize_keys;
use crate::profile::source::{stats_path, CompletedGamesPage, CompletedGamesQuery, StatsSource};
use crate::profile::stats::{ProfileCharts, ProfileUser, StatsBreakdown, UserStats};
use crate::state::SessionSnapshot;

/// Профиль, готовый к отображению.
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub user: ProfileUser,
    pub stats: Option<StatsBreakdown>,
    pub games_played: u64,
    /// Графики есть только если сыграна хотя бы одна игра.
    pub charts: Option<ProfileCharts>,
}

impl UserProfile {
    pub fn from_stats(stats: UserStats) -> Self {
        let games_played = stats
            .stats
            .as_ref()
            .map(StatsBreakdown::games_played)
            .unwrap_or(0);
        let charts = stats
            .stats
            .as_ref()
            .filter(|_| games_played > 0)
            .map(ProfileCharts::from_stats);

        Self {
            user: stats.user,
            stats: stats.stats,
            games_played,
            charts,
        }
    }
}

/// Что показывать на странице профиля.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileView {
    /// Данных нет (ещё не пришли или загрузка упала) – индикатор загрузки.
    Loading,
    Ready(Box<UserProfile>),
}

/// Загрузить статистику пользователя.
///
/// При ошибке в `game.alerts` кладётся алерт, а вид остаётся в `Loading`.
/// Повторных попыток нет.
pub fn load_user_profile(
    session: &mut SessionSnapshot,
    source: &mut impl StatsSource,
    user_id: UserId,
) -> ProfileView {
    let path = stats_path(user_id);
    let loaded = source
        .fetch_user_stats(user_id)
        .and_then(|raw| decode_body::<UserStats>(&path, raw));

    match loaded {
        Ok(stats) => ProfileView::Ready(Box::new(UserProfile::from_stats(stats))),
        Err(err) => {
            report_failure(session, &err);
            ProfileView::Loading
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    /// Ещё ничего не загружали.
    Empty,
    Loaded,
    /// Все страницы уже загружены.
    Exhausted,
    /// Последняя загрузка упала; список не тронут.
    Failed,
}

/// Постраничная лента сыгранных игр, пишет в `session.completed_games`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedGamesFeed {
    user_id: Option<UserId>,
    page_size: u32,
    next_page: Option<u32>,
    total_pages: Option<u32>,
    total_games: u64,
    status: FeedStatus,
}

impl CompletedGamesFeed {
    pub fn new(user_id: Option<UserId>, page_size: u32) -> Self {
        Self {
            user_id,
            page_size,
            next_page: None,
            total_pages: None,
            total_games: 0,
            status: FeedStatus::Empty,
        }
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn next_page(&self) -> Option<u32> {
        self.next_page
    }

    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    pub fn has_more(&self) -> bool {
        matches!((self.next_page, self.total_pages), (Some(next), Some(total)) if next <= total)
    }

    /// Первая страница: заменяет список в сессии.
    pub fn load_first_page(
        &mut self,
        session: &mut SessionSnapshot,
        source: &mut impl StatsSource,
    ) -> FeedStatus {
        let query = CompletedGamesQuery {
            user_id: self.user_id,
            page_size: self.page_size,
            page: None,
        };

        match self.fetch(source, &query) {
            Ok(page) => {
                self.apply_page_info(&page);
                session.completed_games = page.games;
                self.status = FeedStatus::Loaded;
            }
            Err(err) => {
                report_failure(session, &err);
                self.status = FeedStatus::Failed;
            }
        }
        self.status
    }

    /// Следующая страница: дописывает игры в конец списка.
    ///
    /// За последнюю страницу не ходим.
    pub fn load_next_page(
        &mut self,
        session: &mut SessionSnapshot,
        source: &mut impl StatsSource,
    ) -> FeedStatus {
        if !self.has_more() {
            if self.next_page.is_some() {
                self.status = FeedStatus::Exhausted;
            }
            return self.status;
        }

        let query = CompletedGamesQuery {
            user_id: self.user_id,
            page_size: self.page_size,
            page: self.next_page,
        };

        match self.fetch(source, &query) {
            Ok(page) => {
                self.apply_page_info(&page);
                session.completed_games.extend(page.games);
                self.status = FeedStatus::Loaded;
            }
            Err(err) => {
                report_failure(session, &err);
                self.status = FeedStatus::Failed;
            }
        }
        self.status
    }

    fn fetch(
        &self,
        source: &mut impl StatsSource,
        query: &CompletedGamesQuery,
    ) -> Result<CompletedGamesPage, FetchError> {
        let raw = source.fetch_completed_games(query)?;
        decode_body(&query.to_path(), raw)
    }

    fn apply_page_info(&mut self, page: &CompletedGamesPage) {
        self.total_pages = Some(page.page_info.total_pages);
        self.next_page = Some(page.page_info.page_number + 1);
        self.total_games = page.page_info.total_entries;
    }
}

fn decode_body<T: serde::de::DeserializeOwned>(path: &str, raw: Value) -> Result<T, FetchError> {
    serde_json::from_value(camelize_keys(raw)).map_err(|source| FetchError::Decode {
        path: path.to_string(),
        source,
    })
}

fn report_failure(session: &mut SessionSnapshot, err: &FetchError) {
    tracing::warn!(%err, "profile fetch failed");
    session.game.push_alert(Alert::error(err.to_string()));
}
