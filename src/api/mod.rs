//! Внешние формы данных:
//! - записи, которые приходят с сервера (records.rs);
//! - ошибки, которые отдаём наружу (errors.rs).

pub mod errors;
pub mod records;

pub use errors::*;
pub use records::*;
