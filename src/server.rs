use crate::config::Config;
use crate::endpoints::handlers::{
    dashboard_handler, locations_handler, refresh_handler, resolve_handler, soil_types_handler,
};
use crate::endpoints::page::PageSettings;
use crate::reader::{DatasetCache, reader_for};
use crate::utils::summary::print_dataset_summary;
use axum::{
    Router,
    routing::{get, post},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub struct AppState {
    pub cache: DatasetCache,
    pub page: PageSettings,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/api/locations", get(locations_handler))
        .route("/api/soil-types", get(soil_types_handler))
        .route("/api/resolve", get(resolve_handler))
        .route("/api/refresh", post(refresh_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct SoilServer {
    config: Config,
    state: AppState,
}

impl SoilServer {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let extra_css = match &config.stylesheet {
            Some(path) => match tokio::fs::read_to_string(path).await {
                Ok(css) => Some(css),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "CSS file not found, using built-in styles");
                    None
                }
            },
            None => None,
        };

        let state = AppState {
            cache: DatasetCache::new(reader_for(&config.source), config.cache_ttl()),
            page: PageSettings::from_config(&config, extra_css),
        };
        Ok(Self { config, state })
    }

    /// Load the dataset once before serving so the first visitor does not
    /// pay for the fetch. A failure here is reported but not fatal; every
    /// page view retries.
    async fn warm(state: &AppState) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Fetching {}", state.cache.source_name()));
        pb.enable_steady_tick(Duration::from_millis(100));

        match state.cache.get().await {
            Ok(dataset) => {
                pb.finish_with_message("✅ Dataset loaded!");
                print_dataset_summary(&dataset);
            }
            Err(err) => {
                pb.finish_with_message(format!("❌ {}", err));
                warn!(error = %err, "Dataset unavailable at startup, pages will show the error until it loads");
            }
        }
    }

    pub async fn start(self) -> anyhow::Result<()> {
        let state = Arc::new(self.state);
        Self::warm(&state).await;

        let app = router(state.clone());
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        println!(
            r#"
    🚀 Soil dashboard serving on {}

    🗺️ Dashboard
       → http://{}/
       → http://{}/?location={}

    📚 Dropdown values (JSON)
       → http://{}/api/locations
       → http://{}/api/soil-types

    🔄 Re-fetch the dataset
       → POST http://{}/api/refresh
            "#,
            addr,
            addr,
            addr,
            state.page.default_location.replace(' ', "%20"),
            addr,
            addr,
            addr
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}
