pub mod achievement_service;
pub mod auth_service;
pub mod content_service;
pub mod experience_service;
pub mod project_service;
pub mod social_service;
pub mod upload_service;

pub use achievement_service::*;
pub use auth_service::*;
pub use content_service::*;
pub use experience_service::*;
pub use project_service::*;
pub use social_service::*;
pub use upload_service::*;
