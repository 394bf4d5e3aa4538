use axum::{routing::get, routing::post, Router};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heart_hub::{config, db, handlers, paths};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "heart_hub=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_path = config::load_database_path();
  let pool = db::init_db(&db_path).expect("Failed to initialize database");

  {
    let conn = pool.lock().expect("Database lock failed during startup");
    db::seed_toolbelt_defaults(&conn).expect("Failed to seed toolbelt");
  }

  let app = Router::new()
    .route("/", get(handlers::index))
    .route("/prayers/toggle", post(handlers::toggle_prayer))
    .route("/dhikr/increment", post(handlers::dhikr_increment))
    .route("/dhikr/decrement", post(handlers::dhikr_decrement))
    .route("/dhikr/add", post(handlers::dhikr_add_custom))
    .route("/dhikr/reset", post(handlers::dhikr_reset))
    .route("/dhikr/goal", post(handlers::dhikr_set_goal))
    .route("/dhikr/entries", post(handlers::add_dhikr_entry))
    .route("/dhikr/entries/delete", post(handlers::delete_dhikr_entry))
    .route("/names", get(handlers::names_page))
    .route("/names/guidance", post(handlers::seek_guidance))
    .route("/toolbelt", get(handlers::toolbelt_page))
    .route("/toolbelt/add", post(handlers::toolbelt_add))
    .route("/toolbelt/delete", post(handlers::toolbelt_delete))
    .route("/toolbelt/toggle", post(handlers::toolbelt_toggle))
    .route("/toolbelt/surah/{surah_id}", get(handlers::surah_page))
    .route("/alphabet", get(handlers::alphabet_page))
    .route("/alphabet/quiz", get(handlers::quiz_modes))
    .route("/alphabet/quiz/start", get(handlers::quiz_start))
    .route("/alphabet/quiz/answer", post(handlers::quiz_answer))
    .route("/alphabet/quiz/next", post(handlers::quiz_next))
    .route("/alphabet/quiz/reset", post(handlers::quiz_reset))
    .route("/alphabet/quiz/back", get(handlers::quiz_back))
    .nest_service("/static", ServeDir::new(paths::STATIC_DIR))
    .with_state(pool);

  let bind_addr = config::server_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config::SERVER_PORT);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
