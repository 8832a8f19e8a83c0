use crate::dtos::course::{
    CourseQueryParams, CourseResponse, CreateCourseRequest, PaginatedCoursesResponse,
    PaginationMeta, UpdateCourseRequest,
};
use crate::error::ApiError;
use crate::extract::{Caller, require_staff};
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{
    db::create_connection,
    services::course::{CourseChanges, CourseService, NewCourse},
};
use sea_orm::prelude::Uuid;

/// Get paginated list of courses
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = PaginatedCoursesResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn list_courses(
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<PaginatedCoursesResponse>, ApiError> {
    if params.page == 0 || params.per_page == 0 {
        return Err(ApiError::Validation(
            "page and per_page must be at least 1".to_string(),
        ));
    }

    let db = create_connection().await?;
    let (courses, total_items) = CourseService::list_paginated(
        &db,
        params.page,
        params.per_page,
        params.search,
        params.delivery,
    )
    .await?;

    let pagination = PaginationMeta::new(params.page, params.per_page, total_items);

    Ok(Json(PaginatedCoursesResponse {
        courses: courses.into_iter().map(CourseResponse::from).collect(),
        pagination,
    }))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn get_course(Path(id): Path<Uuid>) -> Result<Json<CourseResponse>, ApiError> {
    let db = create_connection().await?;

    match CourseService::get(&db, id).await? {
        Some(course) => Ok(Json(course.into())),
        None => Err(ApiError::not_found("course")),
    }
}

/// Publish a new course
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Blank title or description"),
        (status = 403, description = "Caller is not staff")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn create_course(
    Caller(caller): Caller,
    Json(body): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    require_staff(&caller, "create courses")?;

    if body.title.trim().is_empty() || body.description.trim().is_empty() {
        return Err(ApiError::Validation(
            "course title and description must not be blank".to_string(),
        ));
    }

    let db = create_connection().await?;
    let created = CourseService::create(
        &db,
        NewCourse {
            title: body.title,
            description: body.description,
            duration_minutes: body.duration_minutes,
            price_cents: body.price_cents,
            delivery: body.delivery,
            image_path: body.image_path,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update an existing course
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 403, description = "Caller is not staff")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn update_course(
    Caller(caller): Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    require_staff(&caller, "update courses")?;

    if let Some(title) = &body.title
        && title.trim().is_empty()
    {
        return Err(ApiError::Validation("course title must not be blank".to_string()));
    }

    let db = create_connection().await?;
    let updated = CourseService::update(
        &db,
        id,
        CourseChanges {
            title: body.title,
            description: body.description,
            duration_minutes: body.duration_minutes,
            price_cents: body.price_cents,
            delivery: body.delivery,
            image_path: body.image_path.map(Some),
        },
    )
    .await?;

    Ok(Json(updated.into()))
}

/// Delete a course together with its sections and videos
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found"),
        (status = 403, description = "Caller is not staff")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn delete_course(
    Caller(caller): Caller,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_staff(&caller, "delete courses")?;

    let db = create_connection().await?;
    CourseService::delete(&db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
