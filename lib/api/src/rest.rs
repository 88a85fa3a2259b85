use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use savora_engine::{Error, Query, RecommendEngine, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
struct RecommendRequest {
    query: String,
    #[serde(default = "default_top_k")]
    top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    data_loaded: bool,
}

/// Shared per-worker state; `None` means the artifacts never loaded
#[derive(Clone)]
struct AppState {
    engine: Option<Arc<RecommendEngine>>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Option<Arc<RecommendEngine>>, port: u16) -> std::io::Result<()> {
        let state = AppState { engine };

        info!("REST API listening on port {}", port);
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .route("/health", web::get().to(health))
                .route("/api/recommend", web::post().to(recommend))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        data_loaded: state.engine.is_some(),
    }))
}

async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let Some(engine) = &state.engine else {
        return Ok(HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": "System not initialized. Data missing."
        })));
    };

    let query = Query::new(req.query.clone(), req.top_k);
    match engine.recommend(&query).await {
        Ok(recommendation) => Ok(HttpResponse::Ok().json(recommendation)),
        Err(e @ Error::InvalidQuery(_)) => {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
        Err(e) => Ok(HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}
