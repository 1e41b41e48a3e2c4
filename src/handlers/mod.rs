pub mod achievements;
pub mod auth;
pub mod comments;
pub mod content;
pub mod experiences;
pub mod likes;
pub mod projects;
pub mod upload;
