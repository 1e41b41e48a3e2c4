use actix_web::{test, web, App};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

use portfolio_api_rust::{
    auth::SessionManager,
    handlers,
    repositories::{
        achievement_repository::SqliteAchievementRepository,
        comment_repository::SqliteCommentRepository, content_repository::SqliteContentRepository,
        experience_repository::SqliteExperienceRepository, file_repository::SqliteFileRepository,
        like_repository::SqliteLikeRepository, project_repository::SqliteProjectRepository,
        user_repository::SqliteUserRepository,
    },
    services::{
        achievement_service::AchievementService, auth_service::AuthService,
        content_service::ContentService, experience_service::ExperienceService,
        project_service::ProjectService, social_service::SocialService,
        upload_service::UploadService,
    },
};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-password-1";

pub struct TestApp {
    pub pool: SqlitePool,
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        // Create temporary database
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to create database pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Bootstrap the admin account the same way main() does
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        AuthService::new(user_repository)
            .ensure_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("Failed to bootstrap admin");

        Self { pool, temp_dir }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        // Repositories
        let user_repository = Arc::new(SqliteUserRepository::new(self.pool.clone()));
        let project_repository = Arc::new(SqliteProjectRepository::new(self.pool.clone()));
        let experience_repository = Arc::new(SqliteExperienceRepository::new(self.pool.clone()));
        let achievement_repository = Arc::new(SqliteAchievementRepository::new(self.pool.clone()));
        let comment_repository = Arc::new(SqliteCommentRepository::new(self.pool.clone()));
        let like_repository = Arc::new(SqliteLikeRepository::new(self.pool.clone()));
        let content_repository = Arc::new(SqliteContentRepository::new(self.pool.clone()));
        let file_repository = Arc::new(SqliteFileRepository::new(self.pool.clone()));

        // Services
        let auth_service = web::Data::new(AuthService::new(user_repository));
        let project_service = web::Data::new(ProjectService::new(project_repository));
        let experience_service = web::Data::new(ExperienceService::new(experience_repository));
        let achievement_service = web::Data::new(AchievementService::new(achievement_repository));
        let social_service =
            web::Data::new(SocialService::new(comment_repository, like_repository));
        let content_service = web::Data::new(ContentService::new(content_repository));
        let upload_service = web::Data::new(UploadService::new(
            file_repository,
            self.temp_dir.path().join("uploads"),
        ));
        let sessions = web::Data::new(SessionManager::new(self.pool.clone()));

        App::new()
            .app_data(auth_service)
            .app_data(project_service)
            .app_data(experience_service)
            .app_data(achievement_service)
            .app_data(social_service)
            .app_data(content_service)
            .app_data(upload_service)
            .app_data(sessions)
            .route("/api/login", web::post().to(handlers::auth::login_api))
            .route("/api/logout", web::post().to(handlers::auth::logout_api))
            .route("/api/register", web::post().to(handlers::auth::register_api))
            .route(
                "/api/auth/user",
                web::get().to(handlers::auth::current_user_api),
            )
            .route(
                "/api/projects",
                web::get().to(handlers::projects::list_projects),
            )
            .route(
                "/api/projects/featured",
                web::get().to(handlers::projects::list_featured_projects),
            )
            .route(
                "/api/projects/{id}",
                web::get().to(handlers::projects::get_project),
            )
            .route(
                "/api/admin/projects",
                web::get().to(handlers::projects::list_all_projects),
            )
            .route(
                "/api/projects",
                web::post().to(handlers::projects::create_project),
            )
            .route(
                "/api/projects/{id}",
                web::put().to(handlers::projects::update_project),
            )
            .route(
                "/api/projects/{id}",
                web::delete().to(handlers::projects::delete_project),
            )
            .route(
                "/api/experiences",
                web::get().to(handlers::experiences::list_experiences),
            )
            .route(
                "/api/admin/experiences",
                web::get().to(handlers::experiences::list_all_experiences),
            )
            .route(
                "/api/experiences",
                web::post().to(handlers::experiences::create_experience),
            )
            .route(
                "/api/experiences/{id}",
                web::put().to(handlers::experiences::update_experience),
            )
            .route(
                "/api/experiences/{id}",
                web::delete().to(handlers::experiences::delete_experience),
            )
            .route(
                "/api/achievements",
                web::get().to(handlers::achievements::list_achievements),
            )
            .route(
                "/api/admin/achievements",
                web::get().to(handlers::achievements::list_all_achievements),
            )
            .route(
                "/api/achievements",
                web::post().to(handlers::achievements::create_achievement),
            )
            .route(
                "/api/achievements/{id}",
                web::put().to(handlers::achievements::update_achievement),
            )
            .route(
                "/api/achievements/{id}",
                web::delete().to(handlers::achievements::delete_achievement),
            )
            .route(
                "/api/comments/{item_type}/{item_id}",
                web::get().to(handlers::comments::list_comments),
            )
            .route(
                "/api/comments",
                web::post().to(handlers::comments::create_comment),
            )
            .route(
                "/api/comments/{id}",
                web::delete().to(handlers::comments::delete_comment),
            )
            .route(
                "/api/admin/comments",
                web::get().to(handlers::comments::list_recent_comments),
            )
            .route("/api/likes", web::post().to(handlers::likes::toggle_like))
            .route(
                "/api/likes/{item_type}/{item_id}",
                web::get().to(handlers::likes::get_like_status),
            )
            .route(
                "/api/content",
                web::get().to(handlers::content::get_content),
            )
            .route(
                "/api/content",
                web::post().to(handlers::content::update_content),
            )
            .route(
                "/api/content/image",
                web::post().to(handlers::content::update_content_image),
            )
            .route("/api/upload", web::post().to(handlers::upload::upload_file))
    }

    /// Log in as the bootstrap admin and return the session token.
    pub async fn login_as_admin(&self) -> String {
        let app = test::init_service(self.create_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({
                "email": ADMIN_EMAIL,
                "password": ADMIN_PASSWORD
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;

        body["token"].as_str().expect("login token").to_string()
    }

    /// Register a regular member account and return its session token.
    #[allow(dead_code)]
    pub async fn register_member(&self, email: &str) -> String {
        let app = test::init_service(self.create_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(serde_json::json!({
                "email": email,
                "password": "member-password-1",
                "firstName": "Test",
                "lastName": "Member"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;

        body["token"].as_str().expect("register token").to_string()
    }

    /// Create a project through the API and return its ID.
    #[allow(dead_code)]
    pub async fn create_project(&self, token: &str, title: &str, published: bool) -> String {
        let app = test::init_service(self.create_app()).await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "title": title,
                "description": "A test project",
                "technologies": ["Rust", "SQLite"],
                "published": published
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "project create failed");
        let body: serde_json::Value = test::read_body_json(resp).await;

        body["id"].as_str().expect("project id").to_string()
    }
}
