mod doc;
mod dtos;
mod error;
mod extract;
mod routes;
mod utils;

use axum::{
    Router,
    routing::{get, post, put},
};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::extract::ApiClaims;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let issuer_url = std::env::var("OIDC_ISSUER_URL").expect("OIDC_ISSUER_URL is not set");

    let oauth2_resource_server = OAuth2ResourceServer::<ApiClaims>::builder()
        .issuer_url(issuer_url.as_str())
        .build()
        .await
        .expect("Failed to build OAuth2ResourceServer");

    let api = Router::new()
        .route("/", get(routes::auth::whoami))
        .route(
            "/courses",
            get(routes::course::list_courses).post(routes::course::create_course),
        )
        .route(
            "/courses/{id}",
            get(routes::course::get_course)
                .put(routes::course::update_course)
                .delete(routes::course::delete_course),
        )
        .route(
            "/sections/{course_id}",
            get(routes::section::get_course_sections).post(routes::section::create_section),
        )
        .route(
            "/sections/{course_id}/{section_id}",
            get(routes::section::get_section)
                .put(routes::section::update_section)
                .delete(routes::section::delete_section),
        )
        .route("/videos", post(routes::video::create_video))
        .route(
            "/videos/all/{section_id}/{course_id}",
            get(routes::video::get_section_videos),
        )
        .route(
            "/videos/{video_id}/{course_id}",
            get(routes::video::get_video),
        )
        .route(
            "/videos/{video_id}",
            put(routes::video::update_video).delete(routes::video::delete_video),
        )
        .route("/enrollments", get(routes::enrollment::my_courses))
        .route(
            "/enrollments/student/orders",
            get(routes::enrollment::my_orders),
        )
        .route(
            "/enrollments/order/{course_id}",
            post(routes::enrollment::order_course),
        )
        .route("/enrollments/orders", get(routes::enrollment::all_orders))
        .route(
            "/enrollments/orders/course/{course_id}",
            get(routes::enrollment::course_orders),
        )
        .route(
            "/enrollments/orders/student/{student_id}",
            get(routes::enrollment::student_orders),
        )
        .route(
            "/enrollments/orders/approve",
            put(routes::enrollment::approve_order),
        )
        .route(
            "/enrollments/orders/waiting",
            get(routes::enrollment::all_waiting_orders).put(routes::enrollment::mark_order_waiting),
        )
        .route(
            "/enrollments/orders/waiting/{course_id}",
            get(routes::enrollment::course_waiting_orders),
        )
        .route(
            "/enrollments/orders/waiting/student/{student_id}",
            get(routes::enrollment::student_waiting_orders),
        )
        .route(
            "/students",
            get(routes::student::list_students).post(routes::student::register_student),
        )
        .layer(ServiceBuilder::new().layer(oauth2_resource_server.into_layer()));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::ApiDoc::openapi()))
        .route("/health", get(routes::health::health))
        .merge(api)
        .layer(CompressionLayer::new());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .unwrap();
}
