use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use memo_service::NoteService;

use crate::config::ServerConfig;
use crate::handler;

/// HTTP endpoint paths.
pub mod endpoints {
    pub const INFO: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const NOTES: &str = "/api/notes";
    pub const NOTE: &str = "/api/notes/:id";
    pub const STATS: &str = "/api/stats";
}

/// Build the axum router with all memo endpoints.
pub fn build_router(service: NoteService, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(endpoints::INFO, get(handler::info_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(
            endpoints::NOTES,
            get(handler::list_notes).post(handler::create_note),
        )
        .route(
            endpoints::NOTE,
            get(handler::get_note)
                .put(handler::update_note)
                .delete(handler::delete_note),
        )
        .route(endpoints::STATS, get(handler::stats_handler))
        .fallback(handler::not_found_handler)
        .with_state(service)
        .layer(CatchPanicLayer::custom(handler::panic_handler))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
