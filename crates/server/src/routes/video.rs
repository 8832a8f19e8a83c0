use crate::dtos::content::{Gated, VideoResponse};
use crate::error::ApiError;
use crate::extract::{Caller, require_staff};
use axum::{Json, extract::Path, http::StatusCode};
use database::{
    db::create_connection,
    services::{access::AccessService, video::VideoService},
};
use models::access::AccessDecision;
use sea_orm::prelude::Uuid;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVideoRequest {
    #[schema(value_type = String)]
    pub section_id: Uuid,
    pub title: String,
    /// Opaque reference into the media store
    pub media_path: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub media_path: Option<String>,
}

/// All videos of a section, gated on the caller's enrollment in the course
#[utoipa::path(
    get,
    path = "/videos/all/{section_id}/{course_id}",
    params(
        ("section_id" = String, Path, description = "Section ID"),
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Videos of the section, or a pending explanation for students without an approved enrollment"),
        (status = 404, description = "Section not found under this course")
    ),
    security(("jwt" = [])),
    tag = "Videos"
)]
pub async fn get_section_videos(
    Caller(caller): Caller,
    Path((section_id, course_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Gated<Vec<VideoResponse>>>, ApiError> {
    let db = create_connection().await?;

    let videos = VideoService::for_section_in_course(&db, course_id, section_id).await?;

    match AccessService::course_content(&db, &caller, course_id).await? {
        AccessDecision::Granted => Ok(Json(Gated::Content(
            videos.into_iter().map(VideoResponse::from).collect(),
        ))),
        AccessDecision::Pending(message) => Ok(Json(Gated::Pending { message })),
    }
}

/// One video, gated on the caller's enrollment in the course
#[utoipa::path(
    get,
    path = "/videos/{video_id}/{course_id}",
    params(
        ("video_id" = String, Path, description = "Video ID"),
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The video, or a pending explanation for students without an approved enrollment"),
        (status = 404, description = "Video not found under this course")
    ),
    security(("jwt" = [])),
    tag = "Videos"
)]
pub async fn get_video(
    Caller(caller): Caller,
    Path((video_id, course_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Gated<VideoResponse>>, ApiError> {
    let db = create_connection().await?;

    let video = VideoService::get_in_course(&db, course_id, video_id).await?;

    match AccessService::course_content(&db, &caller, course_id).await? {
        AccessDecision::Granted => Ok(Json(Gated::Content(video.into()))),
        AccessDecision::Pending(message) => Ok(Json(Gated::Pending { message })),
    }
}

/// Attach a video to a section
#[utoipa::path(
    post,
    path = "/videos",
    request_body = CreateVideoRequest,
    responses(
        (status = 201, description = "Video created", body = VideoResponse),
        (status = 400, description = "Blank title or media path"),
        (status = 404, description = "Section not found"),
        (status = 403, description = "Caller is not staff")
    ),
    security(("jwt" = [])),
    tag = "Videos"
)]
pub async fn create_video(
    Caller(caller): Caller,
    Json(body): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<VideoResponse>), ApiError> {
    require_staff(&caller, "upload videos")?;

    if body.title.trim().is_empty() || body.media_path.trim().is_empty() {
        return Err(ApiError::Validation(
            "video title and media path must not be blank".to_string(),
        ));
    }

    let db = create_connection().await?;
    let created = VideoService::create(&db, body.section_id, body.title, body.media_path).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update a video's title or media reference
#[utoipa::path(
    put,
    path = "/videos/{video_id}",
    params(
        ("video_id" = String, Path, description = "Video ID")
    ),
    request_body = UpdateVideoRequest,
    responses(
        (status = 204, description = "Video updated"),
        (status = 404, description = "Video not found"),
        (status = 403, description = "Caller is not staff")
    ),
    security(("jwt" = [])),
    tag = "Videos"
)]
pub async fn update_video(
    Caller(caller): Caller,
    Path(video_id): Path<Uuid>,
    Json(body): Json<UpdateVideoRequest>,
) -> Result<StatusCode, ApiError> {
    require_staff(&caller, "update videos")?;

    let db = create_connection().await?;
    VideoService::update(&db, video_id, body.title, body.media_path).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a video
#[utoipa::path(
    delete,
    path = "/videos/{video_id}",
    params(
        ("video_id" = String, Path, description = "Video ID")
    ),
    responses(
        (status = 204, description = "Video deleted"),
        (status = 404, description = "Video not found"),
        (status = 403, description = "Caller is not staff")
    ),
    security(("jwt" = [])),
    tag = "Videos"
)]
pub async fn delete_video(
    Caller(caller): Caller,
    Path(video_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_staff(&caller, "delete videos")?;

    let db = create_connection().await?;
    VideoService::delete(&db, video_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
