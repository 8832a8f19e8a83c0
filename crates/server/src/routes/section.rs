use crate::dtos::content::{Gated, SectionResponse};
use crate::error::ApiError;
use crate::extract::{Caller, require_staff};
use axum::{Json, extract::Path, http::StatusCode};
use database::{
    db::create_connection,
    services::{access::AccessService, course::CourseService, section::SectionService},
};
use models::access::AccessDecision;
use sea_orm::prelude::Uuid;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SectionBody {
    pub title: String,
}

/// All sections of a course with their videos, gated on the caller's
/// enrollment
#[utoipa::path(
    get,
    path = "/sections/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Sections of the course, or a pending explanation for students without an approved enrollment"),
        (status = 404, description = "Course not found")
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn get_course_sections(
    Caller(caller): Caller,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Gated<Vec<SectionResponse>>>, ApiError> {
    let db = create_connection().await?;

    if !CourseService::exists(&db, course_id).await? {
        return Err(ApiError::not_found("course"));
    }

    match AccessService::course_content(&db, &caller, course_id).await? {
        AccessDecision::Granted => {
            let sections = SectionService::for_course_with_videos(&db, course_id).await?;
            let body = sections
                .into_iter()
                .map(|(section, videos)| SectionResponse::new(section, videos))
                .collect();
            Ok(Json(Gated::Content(body)))
        }
        AccessDecision::Pending(message) => Ok(Json(Gated::Pending { message })),
    }
}

/// One section of a course with its videos, gated on the caller's
/// enrollment
#[utoipa::path(
    get,
    path = "/sections/{course_id}/{section_id}",
    params(
        ("course_id" = String, Path, description = "Course ID"),
        ("section_id" = String, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "The section, or a pending explanation for students without an approved enrollment"),
        (status = 404, description = "Course or section not found")
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn get_section(
    Caller(caller): Caller,
    Path((course_id, section_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Gated<SectionResponse>>, ApiError> {
    let db = create_connection().await?;

    let (section, videos) =
        SectionService::get_in_course_with_videos(&db, course_id, section_id).await?;

    match AccessService::course_content(&db, &caller, course_id).await? {
        AccessDecision::Granted => Ok(Json(Gated::Content(SectionResponse::new(section, videos)))),
        AccessDecision::Pending(message) => Ok(Json(Gated::Pending { message })),
    }
}

/// Add a section to a course
#[utoipa::path(
    post,
    path = "/sections/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    request_body = SectionBody,
    responses(
        (status = 201, description = "Section created", body = SectionResponse),
        (status = 400, description = "Blank title"),
        (status = 404, description = "Course not found"),
        (status = 403, description = "Caller is not staff")
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn create_section(
    Caller(caller): Caller,
    Path(course_id): Path<Uuid>,
    Json(body): Json<SectionBody>,
) -> Result<(StatusCode, Json<SectionResponse>), ApiError> {
    require_staff(&caller, "create sections")?;

    if body.title.trim().is_empty() {
        return Err(ApiError::Validation("section title must not be blank".to_string()));
    }

    let db = create_connection().await?;
    let created = SectionService::create(&db, course_id, body.title).await?;

    Ok((StatusCode::CREATED, Json(SectionResponse::new(created, vec![]))))
}

/// Rename a section
#[utoipa::path(
    put,
    path = "/sections/{course_id}/{section_id}",
    params(
        ("course_id" = String, Path, description = "Course ID"),
        ("section_id" = String, Path, description = "Section ID")
    ),
    request_body = SectionBody,
    responses(
        (status = 204, description = "Section updated"),
        (status = 400, description = "Blank title"),
        (status = 404, description = "Course or section not found"),
        (status = 403, description = "Caller is not staff")
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn update_section(
    Caller(caller): Caller,
    Path((course_id, section_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<SectionBody>,
) -> Result<StatusCode, ApiError> {
    require_staff(&caller, "update sections")?;

    if body.title.trim().is_empty() {
        return Err(ApiError::Validation("section title must not be blank".to_string()));
    }

    let db = create_connection().await?;
    SectionService::rename(&db, course_id, section_id, body.title).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a section and its videos
#[utoipa::path(
    delete,
    path = "/sections/{course_id}/{section_id}",
    params(
        ("course_id" = String, Path, description = "Course ID"),
        ("section_id" = String, Path, description = "Section ID")
    ),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 404, description = "Course or section not found"),
        (status = 403, description = "Caller is not staff")
    ),
    security(("jwt" = [])),
    tag = "Sections"
)]
pub async fn delete_section(
    Caller(caller): Caller,
    Path((course_id, section_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    require_staff(&caller, "delete sections")?;

    let db = create_connection().await?;
    SectionService::delete(&db, course_id, section_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
