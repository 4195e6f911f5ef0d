//! Модель состояния сессии: игра, редактор, вывод проверок, конструктор задач,
//! турнир, пользователь и рейтинг.

pub mod builder;
pub mod editor;
pub mod execution;
pub mod game;
pub mod tournament;
pub mod user;

// Идентификаторы приходят с сервера как целые числа; у ботов id отрицательные.
pub type UserId = i64;
pub type GameId = i64;
pub type TournamentId = i64;

pub use builder::*;
pub use editor::*;
pub use execution::*;
pub use game::*;
pub use tournament::*;
pub use user::*;
