//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together, since `routes!` groups methods by path.
///
/// # Registered Endpoints
/// - `GET|POST /api/{resource}` - Paginated index & create
/// - `GET|PUT|DELETE /api/{resource}/{id}` - Show, update & destroy
/// - `GET /api/affairs/new`, `GET /api/attorneys/new` - Blank forms
/// - `GET /api/affairs/{id}/edit`, `GET /api/attorneys/{id}/edit` - Edit forms
/// - `GET /api/summary` - Record counts
///
/// where `{resource}` is one of `clients`, `attorneys`, `affairs` or `assignments`.
///
/// # Returns
/// An Axum `Router<AppState>` with every route and the Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bufete", description = "Bufete law office records API"), tags(
        (name = controller::client::CLIENT_TAG, description = "Client API routes"),
        (name = controller::attorney::ATTORNEY_TAG, description = "Attorney API routes"),
        (name = controller::affair::AFFAIR_TAG, description = "Affair API routes"),
        (name = controller::assignment::ASSIGNMENT_TAG, description = "Assignment API routes"),
        (name = controller::summary::SUMMARY_TAG, description = "Record summary API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::client::get_clients,
            controller::client::create_client
        ))
        .routes(routes!(
            controller::client::get_client,
            controller::client::update_client,
            controller::client::delete_client
        ))
        .routes(routes!(
            controller::attorney::get_attorneys,
            controller::attorney::create_attorney
        ))
        .routes(routes!(controller::attorney::new_attorney))
        .routes(routes!(
            controller::attorney::get_attorney,
            controller::attorney::update_attorney,
            controller::attorney::delete_attorney
        ))
        .routes(routes!(controller::attorney::edit_attorney))
        .routes(routes!(
            controller::affair::get_affairs,
            controller::affair::create_affair
        ))
        .routes(routes!(controller::affair::new_affair))
        .routes(routes!(
            controller::affair::get_affair,
            controller::affair::update_affair,
            controller::affair::delete_affair
        ))
        .routes(routes!(controller::affair::edit_affair))
        .routes(routes!(
            controller::assignment::get_assignments,
            controller::assignment::create_assignment
        ))
        .routes(routes!(
            controller::assignment::get_assignment,
            controller::assignment::update_assignment,
            controller::assignment::delete_assignment
        ))
        .routes(routes!(controller::summary::get_summary))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
