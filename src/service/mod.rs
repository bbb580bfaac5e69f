//! Request-level operations composed from store calls.

mod favorites;
mod seed;
pub use favorites::FavoriteService;
pub use seed::{seed_from_path, SeedData};
