//! PostgreSQL implementation of the game store.

mod error;
mod store;

pub use error::{PgDaoError, PgResult};
pub use store::PgGameStore;
