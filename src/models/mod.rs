// Re-export all models organized by domain
pub mod achievement;
pub mod api;
pub mod content;
pub mod errors;
pub mod experience;
pub mod file;
pub mod project;
pub mod social;
pub mod user;

// Re-export all structs for backward compatibility
pub use achievement::*;
pub use api::*;
pub use content::*;
pub use errors::*;
pub use experience::*;
pub use file::*;
pub use project::*;
pub use social::*;
pub use user::*;
