//! HTTP routing and OpenAPI documentation.
//!
//! Every handler is registered through utoipa's [`OpenApiRouter`] so its path annotation
//! lands in the generated document, served at `/api/docs/openapi.json` with Swagger UI at
//! `/api/docs`. Handlers sharing a path are registered together in one `routes!` call.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{
    router::{OpenApiRouter, UtoipaMethodRouterExt},
    routes,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState, service::resume::MAX_RESUME_BYTES};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// The resume upload route accepts bodies up to the resume size limit plus some slack so the
/// service, not the extractor, reports oversized uploads.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Job Board", description = "Job board API"),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Sign up, sign in and session routes"),
            (name = controller::profile::PROFILE_TAG, description = "Profile routes"),
            (name = controller::job::JOB_TAG, description = "Job posting routes"),
            (name = controller::application::APPLICATION_TAG, description = "Job application routes"),
            (name = controller::saved_job::SAVED_JOB_TAG, description = "Saved job routes"),
            (name = controller::resume::RESUME_TAG, description = "Resume storage routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::sign_up))
        .routes(routes!(controller::auth::sign_in))
        .routes(routes!(controller::auth::sign_out))
        .routes(routes!(controller::auth::get_me))
        .routes(routes!(controller::profile::get_profile))
        .routes(routes!(controller::profile::update_own_profile))
        .routes(routes!(
            controller::job::list_jobs,
            controller::job::create_job
        ))
        .routes(routes!(controller::job::list_own_jobs))
        .routes(routes!(
            controller::job::get_job,
            controller::job::update_job,
            controller::job::delete_job
        ))
        .routes(routes!(
            controller::application::apply,
            controller::application::list_job_applications
        ))
        .routes(routes!(controller::application::list_own_applications))
        .routes(routes!(controller::application::update_application_status))
        .routes(routes!(controller::saved_job::list_saved_jobs))
        .routes(routes!(
            controller::saved_job::save_job,
            controller::saved_job::remove_saved_job
        ))
        .routes(
            routes!(controller::resume::upload_resume)
                .layer(DefaultBodyLimit::max(MAX_RESUME_BYTES + 64 * 1024)),
        )
        .routes(routes!(controller::resume::get_resume))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
