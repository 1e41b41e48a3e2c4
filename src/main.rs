use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use utoipa::OpenApi;

use portfolio_api_rust::auth::SessionManager;
use portfolio_api_rust::config::{ApiDoc, AppConfig};
use portfolio_api_rust::handlers;
use portfolio_api_rust::openapi_config::configure_openapi;
use portfolio_api_rust::repositories::{
    SqliteAchievementRepository, SqliteCommentRepository, SqliteContentRepository,
    SqliteExperienceRepository, SqliteFileRepository, SqliteLikeRepository,
    SqliteProjectRepository, SqliteUserRepository,
};
use portfolio_api_rust::services::{
    AchievementService, AuthService, ContentService, ExperienceService, ProjectService,
    SocialService, UploadService,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_env();

    if !Sqlite::database_exists(&config.database_url).await? {
        Sqlite::create_database(&config.database_url).await?;
        tracing::info!("Created database at {}", config.database_url);
    }

    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    // Repositories
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let project_repository = Arc::new(SqliteProjectRepository::new(pool.clone()));
    let experience_repository = Arc::new(SqliteExperienceRepository::new(pool.clone()));
    let achievement_repository = Arc::new(SqliteAchievementRepository::new(pool.clone()));
    let comment_repository = Arc::new(SqliteCommentRepository::new(pool.clone()));
    let like_repository = Arc::new(SqliteLikeRepository::new(pool.clone()));
    let content_repository = Arc::new(SqliteContentRepository::new(pool.clone()));
    let file_repository = Arc::new(SqliteFileRepository::new(pool.clone()));

    // Services with dependency injection
    let auth_service = web::Data::new(AuthService::new(user_repository));
    let project_service = web::Data::new(ProjectService::new(project_repository));
    let experience_service = web::Data::new(ExperienceService::new(experience_repository));
    let achievement_service = web::Data::new(AchievementService::new(achievement_repository));
    let social_service = web::Data::new(SocialService::new(comment_repository, like_repository));
    let content_service = web::Data::new(ContentService::new(content_repository));
    let upload_service = web::Data::new(UploadService::new(
        file_repository,
        config.upload_dir.clone(),
    ));

    let sessions = web::Data::new(SessionManager::new(pool.clone()));

    // Make sure an admin account exists before accepting traffic
    auth_service
        .ensure_admin(&config.admin_email, &config.admin_password)
        .await?;

    tracing::info!("Portfolio API listening on http://{}", config.bind_address);
    tracing::info!(
        "API documentation at http://{}/swagger-ui/",
        config.bind_address
    );

    // Configure OpenAPI spec with Bearer auth (do this once, outside the closure)
    let openapi_spec = configure_openapi(ApiDoc::openapi());

    let upload_dir = config.upload_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(auth_service.clone())
            .app_data(project_service.clone())
            .app_data(experience_service.clone())
            .app_data(achievement_service.clone())
            .app_data(social_service.clone())
            .app_data(content_service.clone())
            .app_data(upload_service.clone())
            .app_data(sessions.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
            )
            .wrap(Logger::default())
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            // Auth
            .route("/api/login", web::post().to(handlers::auth::login_api))
            .route("/api/logout", web::post().to(handlers::auth::logout_api))
            .route("/api/register", web::post().to(handlers::auth::register_api))
            .route(
                "/api/auth/user",
                web::get().to(handlers::auth::current_user_api),
            )
            // Projects
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
            // Experiences
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
            // Achievements
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
            // Comments and likes
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
            // Content overrides
            .route("/api/content", web::get().to(handlers::content::get_content))
            .route(
                "/api/content",
                web::post().to(handlers::content::update_content),
            )
            .route(
                "/api/content/image",
                web::post().to(handlers::content::update_content_image),
            )
            // Uploads
            .route("/api/upload", web::post().to(handlers::upload::upload_file))
            .service(actix_files::Files::new("/uploads", upload_dir.clone()))
    })
    .bind(config.bind_address)?
    .run()
    .await?;

    Ok(())
}
