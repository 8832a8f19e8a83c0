use crate::dtos::student::{RegisterStudentRequest, StudentResponse};
use crate::error::ApiError;
use crate::extract::{Caller, require_role};
use axum::{Json, http::StatusCode};
use database::{db::create_connection, services::student::StudentService};
use models::caller::Role;

/// Provision a student record mirroring an identity-provider user
#[utoipa::path(
    post,
    path = "/students",
    request_body = RegisterStudentRequest,
    responses(
        (status = 201, description = "Student registered", body = StudentResponse),
        (status = 400, description = "Blank id, name or email"),
        (status = 409, description = "A student with this id already exists"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn register_student(
    Caller(caller): Caller,
    Json(body): Json<RegisterStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    require_role(&caller, Role::Admin, "register students")?;

    if body.id.trim().is_empty()
        || body.display_name.trim().is_empty()
        || body.email.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "student id, name and email must not be blank".to_string(),
        ));
    }

    let db = create_connection().await?;
    let created = StudentService::register(&db, body.id, body.display_name, body.email).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List all registered students
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All registered students", body = [StudentResponse]),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn list_students(
    Caller(caller): Caller,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    require_role(&caller, Role::Admin, "list students")?;

    let db = create_connection().await?;
    let students = StudentService::list(&db).await?;

    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}
