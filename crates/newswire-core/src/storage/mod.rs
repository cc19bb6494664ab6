mod database;
mod models;
mod post_repo;

pub use database::Database;
pub use models::{NewPost, StoredPost};
pub use post_repo::PostRepository;
