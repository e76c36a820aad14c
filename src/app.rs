use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::Layer;
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use serde::Serialize;

use crate::config::SecurityConfig;
use crate::handlers;
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// One entry of the sitemap served at `/`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub auth: bool,
}

/// Every route mounted by `public_routes` and `post_routes`, served as the
/// sitemap. Router tests check each entry is mounted with the listed auth.
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo { method: "GET", path: "/", auth: false },
    RouteInfo { method: "GET", path: "/health", auth: false },
    RouteInfo { method: "GET", path: "/user", auth: false },
    RouteInfo { method: "POST", path: "/user", auth: false },
    RouteInfo { method: "POST", path: "/login", auth: false },
    RouteInfo { method: "POST", path: "/post", auth: true },
    RouteInfo { method: "GET", path: "/get", auth: true },
    RouteInfo { method: "DELETE", path: "/post/:id", auth: true },
];

/// Full application: routes, global layers and trailing-slash normalisation.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let config = state.config.clone();

    let mut router = Router::new()
        .merge(public_routes())
        .merge(post_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if let Some(cors) = cors_layer(&config.security) {
        router = router.layer(cors);
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    // Applied outside the router so it rewrites the path before routing
    NormalizePathLayer::trim_trailing_slash().layer(router.with_state(state))
}

fn public_routes() -> Router<AppState> {
    use handlers::public::{self, auth};

    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Greeting and registration share a path
        .route("/user", get(public::user_get).post(auth::register_post))
        .route("/login", post(auth::login_post))
}

fn post_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::posts;

    Router::new()
        .route("/post", post(posts::post_create))
        .route("/get", get(posts::posts_list))
        .route("/post/:id", delete(posts::post_delete))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }

    if security.cors_origins.is_empty() || security.cors_origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
