//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification. Swagger UI
//! serves the generated document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are grouped into a single `routes!` call so that axum registers
/// them as one method router.
///
/// # Registered Endpoints
/// - `GET /api/auth/logout` - Logout current user
/// - `GET|PATCH /api/user` - Current user profile
/// - `GET|POST /api/teams` - List teams or create a team
/// - `GET|POST /api/teams/members` - List or add team members
/// - `GET|POST /api/projects` - List or create projects
/// - `GET|POST /api/items` - List or create items
/// - `GET|PATCH|DELETE /api/items/{id}` - Read, update or delete an item
/// - `GET|POST /api/audits` - Audit feed or record an audit
/// - `DELETE /api/audits/{id}` - Delete an audit
/// - `POST /api/findings` - Record a finding
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Vigil", description = "Vigil audit tracking API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User profile API routes"),
        (name = controller::team::TEAM_TAG, description = "Team & membership API routes"),
        (name = controller::project::PROJECT_TAG, description = "Project API routes"),
        (name = controller::item::ITEM_TAG, description = "Auditable item API routes"),
        (name = controller::audit::AUDIT_TAG, description = "Audit API routes"),
        (name = controller::finding::FINDING_TAG, description = "Audit finding API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::user::get_current_user,
            controller::user::update_current_user
        ))
        .routes(routes!(
            controller::team::get_teams,
            controller::team::create_team
        ))
        .routes(routes!(
            controller::team::get_team_members,
            controller::team::add_team_member
        ))
        .routes(routes!(
            controller::project::get_projects,
            controller::project::create_project
        ))
        .routes(routes!(
            controller::item::get_items,
            controller::item::create_item
        ))
        .routes(routes!(
            controller::item::get_item,
            controller::item::update_item,
            controller::item::delete_item
        ))
        .routes(routes!(
            controller::audit::get_audits,
            controller::audit::create_audit
        ))
        .routes(routes!(controller::audit::delete_audit))
        .routes(routes!(controller::finding::create_finding))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
