//! HTTP API Layer
//!
//! This crate exposes the quotation back office over HTTP using Axum:
//! staff registration and login, rate card administration, and the
//! comparison quotation download.
//!
//! # Endpoints
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | GET  | `/health` | liveness |
//! | GET  | `/health/ready` | database check |
//! | POST | `/register` | create account |
//! | POST | `/login` | verify credentials |
//! | GET  | `/products` | list rate cards |
//! | POST | `/admin/update-product` | create or overwrite a rate card |
//! | POST | `/generate-quote` | download the comparison PDF |

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use domain_account::AccountService;
use domain_quotation::{Branding, DocumentRenderer, Logo, QuoteComposer};
use domain_rating::{PremiumCalculator, RateCardPort};
use infra_db::{Database, SqliteAccountAdapter, SqliteRateCardAdapter};
use infra_pdf::PdfRenderer;

use crate::config::ApiConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub rate_cards: Arc<dyn RateCardPort>,
    pub accounts: AccountService,
    pub composer: Arc<QuoteComposer>,
    pub renderer: Arc<dyn DocumentRenderer>,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the SQLite adapters, the composer and the PDF renderer
    pub fn new(database: Database, config: ApiConfig, logo: Option<Logo>) -> Self {
        let composer = QuoteComposer::new(
            PremiumCalculator::new(config.levy()),
            Branding::default().with_logo(logo),
        );

        Self {
            rate_cards: Arc::new(SqliteRateCardAdapter::new(&database)),
            accounts: AccountService::new(Arc::new(SqliteAccountAdapter::new(&database))),
            composer: Arc::new(composer),
            renderer: Arc::new(PdfRenderer::new()),
            database,
            config,
        }
    }

    /// Replaces the document renderer
    pub fn with_renderer(mut self, renderer: Arc<dyn DocumentRenderer>) -> Self {
        self.renderer = renderer;
        self
    }
}

/// Creates the API router with all routes
pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check));

    let account_routes = Router::new()
        .route("/register", post(handlers::accounts::register))
        .route("/login", post(handlers::accounts::login));

    let product_routes = Router::new()
        .route("/products", get(handlers::rate_cards::list_products))
        .route("/admin/update-product", post(handlers::rate_cards::update_product));

    let quote_routes = Router::new()
        .route("/generate-quote", post(handlers::quotes::generate_quote));

    Router::new()
        .merge(health_routes)
        .merge(account_routes)
        .merge(product_routes)
        .merge(quote_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(axum::middleware::from_fn(middleware::audit_middleware)),
        )
        .with_state(state)
}
