use std::net::SocketAddr;
use utoipa::OpenApi;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub admin_email: String,
    pub admin_password: String,
    pub upload_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .unwrap_or(5000);

        let bind_address = format!("{}:{}", host, port)
            .parse()
            .expect("Invalid bind address");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:data/portfolio.db".to_string());

        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".to_string());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "change-me".to_string());

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

        Self {
            database_url,
            bind_address,
            admin_email,
            admin_password,
            upload_dir,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth::login_api,
        crate::handlers::auth::logout_api,
        crate::handlers::auth::register_api,
        crate::handlers::auth::current_user_api,
        crate::handlers::projects::list_projects,
        crate::handlers::projects::list_featured_projects,
        crate::handlers::projects::get_project,
        crate::handlers::projects::list_all_projects,
        crate::handlers::projects::create_project,
        crate::handlers::projects::update_project,
        crate::handlers::projects::delete_project,
        crate::handlers::experiences::list_experiences,
        crate::handlers::experiences::list_all_experiences,
        crate::handlers::experiences::create_experience,
        crate::handlers::experiences::update_experience,
        crate::handlers::experiences::delete_experience,
        crate::handlers::achievements::list_achievements,
        crate::handlers::achievements::list_all_achievements,
        crate::handlers::achievements::create_achievement,
        crate::handlers::achievements::update_achievement,
        crate::handlers::achievements::delete_achievement,
        crate::handlers::comments::list_comments,
        crate::handlers::comments::create_comment,
        crate::handlers::comments::delete_comment,
        crate::handlers::comments::list_recent_comments,
        crate::handlers::likes::toggle_like,
        crate::handlers::likes::get_like_status,
        crate::handlers::content::get_content,
        crate::handlers::content::update_content,
        crate::handlers::content::update_content_image,
        crate::handlers::upload::upload_file,
    ),
    components(schemas(
        crate::models::Role,
        crate::models::PublicUser,
        crate::models::Project,
        crate::models::Experience,
        crate::models::Achievement,
        crate::models::AchievementType,
        crate::models::ItemType,
        crate::models::Comment,
        crate::models::CommentWithUser,
        crate::models::ContentEntry,
        crate::models::LoginForm,
        crate::models::RegisterForm,
        crate::models::ProjectForm,
        crate::models::ProjectPatch,
        crate::models::ExperienceForm,
        crate::models::ExperiencePatch,
        crate::models::AchievementForm,
        crate::models::AchievementPatch,
        crate::models::CommentForm,
        crate::models::LikeForm,
        crate::models::ContentForm,
        crate::models::ContentImageForm,
        crate::models::ApiResponse,
        crate::models::ErrorResponse,
        crate::models::AuthResponse,
        crate::models::LikeToggleResponse,
        crate::models::LikeStatusResponse,
        crate::models::UploadResponse,
    )),
    info(
        title = "Portfolio API",
        description = "Personal portfolio backend: projects, experiences, achievements, comments, likes and editable content"
    )
)]
pub struct ApiDoc;
