use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_server::cache::{CacheConfig, CachedRouteProvider};
use travel_server::config::{AppConfig, RoutingSource};
use travel_server::registry::{TravelerRegistry, default_travelers};
use travel_server::routing::{MockRoutingClient, RouteProvider, RoutingClient, RoutingConfig};
use travel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Load travelers (fail fast on a bad catalog)
    let registry = match &config.travelers_file {
        Some(path) => {
            TravelerRegistry::from_file(path).expect("Failed to load traveler catalog")
        }
        None => default_travelers().expect("Built-in traveler catalog is invalid"),
    };
    info!(count = registry.len(), "loaded travelers");

    let routing: Arc<dyn RouteProvider> = match config.routing.clone() {
        RoutingSource::Api {
            api_key,
            base_url,
            timeout_secs,
            max_concurrent,
        } => {
            if api_key.is_empty() {
                warn!("ROUTING_API_KEY not set. Route lookups will fail.");
            }

            let mut routing_config = RoutingConfig::new(api_key);
            if let Some(url) = base_url {
                routing_config = routing_config.with_base_url(url);
            }
            if let Some(secs) = timeout_secs {
                routing_config = routing_config.with_timeout(secs);
            }
            if let Some(n) = max_concurrent {
                routing_config = routing_config.with_max_concurrent(n);
            }

            let client = RoutingClient::new(routing_config).expect("Failed to create routing client");
            Arc::new(CachedRouteProvider::new(client, &CacheConfig::default()))
        }
        RoutingSource::Mock { path } => {
            let mock = MockRoutingClient::from_file(&path).expect("Failed to load mock routes");
            info!(routes = mock.len(), path = %path.display(), "using mock routing");
            Arc::new(mock)
        }
    };

    let state = AppState::new(registry, routing, config.session_idle);
    let app = create_router(state, &config.static_dir);

    let addr = config.addr;
    info!("Travel Time listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET  /health                        - Health check");
    info!("  GET  /api/travelers                 - List travelers");
    info!("  GET  /api/estimate                  - One-off estimate");
    info!("  POST /api/sessions                  - Start a session");
    info!("  PUT  /api/sessions/:id/{{origin,destination,traveler}}");
    info!("  POST /api/sessions/:id/{{calculate,clear}}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
