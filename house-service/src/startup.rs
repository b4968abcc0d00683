use crate::config::HouseConfig;
use crate::handlers;
use crate::middleware::auth_middleware;
use crate::services::{AuthService, HouseService, JwtService, MongoDb};
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: HouseConfig,
    pub db: MongoDb,
    pub jwt: JwtService,
    pub auth_service: AuthService,
    pub house_service: HouseService,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: HouseConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let jwt = JwtService::new(&config.jwt);
        let auth_service = AuthService::new(db.clone(), jwt.clone());
        let house_service = HouseService::new(db.clone());

        let state = AppState {
            config: config.clone(),
            db,
            jwt,
            auth_service,
            house_service,
        };

        let protected_routes = Router::new()
            .route("/protected", get(handlers::protected))
            .route("/owner-dashboard", get(handlers::owner_dashboard))
            .route("/add-house", post(handlers::add_house))
            .route("/edit-house/:id", put(handlers::edit_house))
            .route("/delete-house/:id", delete(handlers::delete_house))
            .route_layer(from_fn_with_state(state.clone(), auth_middleware));

        // The original frontend is a browser app served from another origin.
        let app = Router::new()
            .route("/", get(handlers::greeting))
            .route("/health", get(handlers::health_check))
            .route("/register", post(handlers::register).get(handlers::list_users))
            .route("/login", post(handlers::login))
            .merge(protected_routes)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
