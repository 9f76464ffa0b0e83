//! arxload-db — PostgreSQL loader for normalized article records.

pub mod articles;
pub mod error;

pub use articles::ArticleStore;
pub use error::{DbError, Result};
