use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use editorial_lens::{
    analyze_content_quality, analyze_internal_links, batch_add_internal_links,
    batch_analyze_quality, find_related_posts, get_quality_message, inject_internal_links,
    linking::DEFAULT_RELATED_LIMIT, types::*, AppState, MemoryRepository,
};

fn parse_port_from_args() -> Option<u16> {
    let mut args = std::env::args().peekable();
    while let Some(a) = args.next() {
        if a == "--port" {
            if let Some(v) = args.next() {
                if let Ok(p) = v.parse::<u16>() {
                    return Some(p);
                }
            }
        } else if let Some(rest) = a.strip_prefix("--port=") {
            if let Ok(p) = rest.parse::<u16>() {
                return Some(p);
            }
        }
    }
    None
}

fn port_from_env() -> Option<u16> {
    for k in ["EDITORIAL_LENS_PORT", "PORT"] {
        if let Ok(v) = std::env::var(k) {
            if let Ok(p) = v.trim().parse::<u16>() {
                return Some(p);
            }
        }
    }
    None
}

fn posts_path() -> Option<String> {
    let mut args = std::env::args().peekable();
    while let Some(a) = args.next() {
        if a == "--posts" {
            if let Some(v) = args.next() {
                return Some(v);
            }
        } else if let Some(rest) = a.strip_prefix("--posts=") {
            return Some(rest.to_string());
        }
    }
    env::var("POSTS_PATH").ok().filter(|v| !v.trim().is_empty())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting editorial-lens analysis service");

    // Seed the repository if a posts file was provided; the payload-carrying
    // endpoints work without it, only /links/batch needs seeded posts.
    let repository = Arc::new(match posts_path() {
        Some(path) => {
            let raw = tokio::fs::read_to_string(&path).await?;
            let posts: Vec<Post> = serde_json::from_str(&raw)?;
            info!("Loaded {} posts from {}", posts.len(), path);
            MemoryRepository::from_posts(posts)
        }
        None => {
            info!("No posts file configured (--posts / POSTS_PATH); repository starts empty");
            MemoryRepository::new()
        }
    });

    let state = Arc::new(AppState::new(repository));

    let app = Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/quality/analyze", post(analyze_quality_handler))
        .route("/quality/batch", post(batch_quality_handler))
        .route("/related", post(related_handler))
        .route("/links/inject", post(inject_handler))
        .route("/links/analyze", post(analyze_links_handler))
        .route("/links/batch", post(batch_links_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let port: u16 = parse_port_from_args().or_else(port_from_env).unwrap_or(5210);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            anyhow::bail!(
                "Address already in use: {}. Stop the existing process or run with --port {} (or set PORT/EDITORIAL_LENS_PORT).",
                bind_addr,
                port.saturating_add(1)
            )
        }
        Err(e) => return Err(e.into()),
    };
    info!("editorial-lens listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).ok();

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = async {
                if let Some(ref mut s) = sigterm {
                    s.recv().await;
                } else {
                    futures::future::pending::<()>().await;
                }
            } => {},
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received");
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "editorial-lens",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn analyze_quality_handler(Json(req): Json<AnalyzeRequest>) -> Json<serde_json::Value> {
    let content_type = req
        .content_type
        .unwrap_or_else(|| ContentType::from_tags(&req.post.tags));
    let report = analyze_content_quality(&req.post, content_type);
    let message = get_quality_message(report.score);
    Json(serde_json::json!({
        "report": report,
        "message": message,
        "content_type": content_type,
    }))
}

async fn batch_quality_handler(Json(req): Json<BatchQualityRequest>) -> Json<BatchReport> {
    Json(batch_analyze_quality(&req.posts))
}

async fn related_handler(Json(req): Json<RelatedRequest>) -> Json<Vec<RelatedPost>> {
    let limit = req.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    Json(find_related_posts(&req.post, &req.pool, limit))
}

async fn inject_handler(Json(req): Json<InjectRequest>) -> Json<InjectionResult> {
    let max_links = req.max_links.unwrap_or(DEFAULT_RELATED_LIMIT);
    Json(inject_internal_links(&req.content, &req.related_posts, max_links))
}

async fn analyze_links_handler(Json(req): Json<AnalyzeLinksRequest>) -> Json<LinkAnalysis> {
    Json(analyze_internal_links(&req.content))
}

async fn batch_links_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchLinksRequest>,
) -> Result<Json<BatchLinkReport>, (StatusCode, String)> {
    match batch_add_internal_links(state.repository.as_ref(), &req.post_ids).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            warn!("Batch linking aborted: {}", e);
            Err((StatusCode::SERVICE_UNAVAILABLE, e.to_string()))
        }
    }
}
