use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use gatehouse_adapters::{
    config::AllowedOrigins,
    http::routes::{login, logout, register},
};
use gatehouse_core::{CredentialHasher, SessionStore, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Main authentication service that provides the register/login/logout routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService with the provided stores and hasher
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal shared handles. Each route is
    /// given only the state it needs.
    pub fn new<U, H, S>(user_store: U, hasher: H, session_store: S) -> Self
    where
        U: UserStore + Clone + 'static,
        H: CredentialHasher + Clone + 'static,
        S: SessionStore + Clone + 'static,
    {
        let router = Router::new()
            // Register needs the user store and the hasher
            .route("/register", post(register::<U, H>))
            .with_state((user_store.clone(), hasher.clone()))
            // Login needs the user store, the hasher, and the session store
            .route("/login", post(login::<U, H, S>))
            .with_state((user_store, hasher, session_store.clone()))
            // Logout only needs the session store
            .route("/logout", get(logout::<S>))
            .with_state(session_store);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a nested router that can be mounted on
    /// another router
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
