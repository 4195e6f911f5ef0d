//! Инфраструктурный слой вокруг сборки состояния:
//! - перевод ключей snake_case -> camelCase;
//! - свёртка списков в мапы по id;
//! - генерация синтетических id;
//! - чтение мешка ассетов;
//! - локальные настройки клиента.

pub mod assets;
pub mod case;
pub mod ids;
pub mod keyed;
pub mod preferences;

pub use assets::*;
pub use case::*;
pub use ids::*;
pub use keyed::*;
pub use preferences::*;
