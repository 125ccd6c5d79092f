pub mod error;
pub mod routes;

use axum::response::Redirect;
use axum::routing::{get, get_service, post};
use axum::Router;
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::directory::ActivityDirectory;
use crate::web::routes::{activities, activity};

/// Builds the application router around a directory handle.
pub fn app(directory: ActivityDirectory) -> Router {
    Router::new()
        // 307 so clients keep following to the front-end.
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activity::unregister_handler),
        )
        // Static front-end
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(directory)
}
