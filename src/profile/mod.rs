//! Профиль пользователя: загрузка статистики, постраничная подгрузка
//! сыгранных игр, подготовка данных для графиков.
//!
//! Транспорт – внешний (`StatsSource`); здесь только формы запросов/ответов
//! и то, как результат ложится в снапшот сессии.

pub mod loader;
pub mod source;
pub mod stats;

pub use loader::{load_user_profile, CompletedGamesFeed, FeedStatus, ProfileView, UserProfile};
pub use source::{stats_path, CompletedGamesPage, CompletedGamesQuery, PageInfo, StatsSource};
pub use stats::{Achievement, LangSlice, ProfileCharts, ProfileUser, RadarPoint, StatsBreakdown, UserStats};
