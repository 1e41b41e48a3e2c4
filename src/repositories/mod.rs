pub mod achievement_repository;
pub mod comment_repository;
pub mod content_repository;
pub mod experience_repository;
pub mod file_repository;
pub mod like_repository;
pub mod project_repository;
pub mod user_repository;

pub use achievement_repository::*;
pub use comment_repository::*;
pub use content_repository::*;
pub use experience_repository::*;
pub use file_repository::*;
pub use like_repository::*;
pub use project_repository::*;
pub use user_repository::*;
