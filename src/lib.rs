//! Стартовое состояние клиента соревнований по программированию.
//!
//! Сервер встраивает в страницу "мешок" ассетов (текущий пользователь, игра,
//! задача, турнир, списки турниров, рейтинг, каталог языков). Здесь мы
//! превращаем его в нормализованное дерево состояния сессии:
//!
//! 1. `infra::assets` – чтение мешка, snake_case -> camelCase, декодирование
//!    в типизированные записи (`api::records`);
//! 2. `derivers` – чистые функции "запись (или её отсутствие) + дефолты -> сущность";
//! 3. `bootstrap` – сборка всех поддеревьев в `SessionSnapshot` за один проход.
//!
//! Модуль `profile` – потребитель снапшота: статистика пользователя,
//! подгрузка сыгранных игр постранично, подготовка данных для графиков.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod derivers;
pub mod domain;
pub mod infra;
pub mod profile;
pub mod state;

pub use bootstrap::{bootstrap_session, SessionBootstrap};
pub use config::SessionConfig;
pub use infra::assets::{AssetBag, NormalizedAssets};
pub use infra::preferences::ClientPreferences;
pub use state::SessionSnapshot;
