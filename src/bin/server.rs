use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use load_planner::packer::Packer;
use load_planner::types::{Dims, ItemSpec, Orientation, Position};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize)]
struct PackRequest {
    container: ContainerRequest,
    items: Vec<ItemSpec>,
}

#[derive(Deserialize, Serialize)]
struct ContainerRequest {
    #[serde(flatten)]
    dims: Dims,
    max_weight: f64,
}

#[derive(Serialize)]
struct PackResponse {
    packed: Vec<PackedItem>,
    unpacked: Vec<String>,
    total_weight: f64,
    utilization_percent: f64,
}

#[derive(Serialize)]
struct PackedItem {
    name: String,
    x: u32,
    y: u32,
    z: u32,
    orientation: Orientation,
    length: u32,
    width: u32,
    height: u32,
    color: String,
    item_type: String,
}

async fn pack(Json(req): Json<PackRequest>) -> Result<Json<PackResponse>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /pack"
    );

    let packer = Packer::new(req.container.dims, req.container.max_weight, req.items);
    let result = packer
        .pack()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let response = PackResponse {
        packed: result
            .container
            .items
            .iter()
            .map(|p| {
                let Position { x, y, z } = p.position;
                PackedItem {
                    name: p.name.clone(),
                    x,
                    y,
                    z,
                    orientation: p.orientation,
                    length: p.dims.length,
                    width: p.dims.width,
                    height: p.dims.height,
                    color: p.color.clone(),
                    item_type: p.item_type.clone(),
                }
            })
            .collect(),
        unpacked: result.unplaced.clone(),
        total_weight: result.container.current_weight,
        utilization_percent: result.container.utilization_percent(),
    };

    Ok(Json(response))
}

#[tokio::main]
async fn main() {
    let _sentry = sentry::init(sentry::ClientOptions {
        release: sentry::release_name!(),
        ..Default::default()
    });

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/pack", post(pack))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
