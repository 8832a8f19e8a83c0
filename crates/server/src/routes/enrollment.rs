use crate::dtos::course::CourseResponse;
use crate::dtos::enrollment::{EnrollmentRef, EnrollmentResponse};
use crate::error::ApiError;
use crate::extract::{Caller, require_role};
use axum::{Json, extract::Path, http::StatusCode};
use database::{
    db::create_connection,
    services::enrollment::{DuplicateOrderPolicy, EnrollmentService},
};
use models::caller::Role;
use models::status::EnrollmentStatus;
use sea_orm::prelude::Uuid;

/// Place an order for a course on behalf of the calling student
#[utoipa::path(
    post,
    path = "/enrollments/order/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 201, description = "Order placed", body = EnrollmentResponse),
        (status = 404, description = "Course or student not found"),
        (status = 409, description = "This student already ordered this course"),
        (status = 403, description = "Caller is not a student")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn order_course(
    Caller(caller): Caller,
    Path(course_id): Path<Uuid>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ApiError> {
    require_role(&caller, Role::Student, "order courses")?;

    let db = create_connection().await?;
    let created = EnrollmentService::place_order(
        &db,
        course_id,
        &caller.user_id,
        DuplicateOrderPolicy::default(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// The calling student's approved courses
#[utoipa::path(
    get,
    path = "/enrollments",
    responses(
        (status = 200, description = "Approved courses of the caller", body = [CourseResponse]),
        (status = 403, description = "Caller is not a student")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn my_courses(Caller(caller): Caller) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    require_role(&caller, Role::Student, "view your courses")?;

    let db = create_connection().await?;
    let courses = EnrollmentService::approved_courses(&db, &caller.user_id).await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// The calling student's orders that are still moving through the lifecycle
#[utoipa::path(
    get,
    path = "/enrollments/student/orders",
    responses(
        (status = 200, description = "Ordered and waiting-for-payment records of the caller", body = [EnrollmentResponse]),
        (status = 403, description = "Caller is not a student")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn my_orders(Caller(caller): Caller) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    require_role(&caller, Role::Student, "view your orders")?;

    let db = create_connection().await?;
    let orders = EnrollmentService::open_orders(&db, &caller.user_id).await?;

    Ok(Json(orders.into_iter().map(EnrollmentResponse::from).collect()))
}

/// All orders awaiting an admin decision
#[utoipa::path(
    get,
    path = "/enrollments/orders",
    responses(
        (status = 200, description = "All ordered enrollments", body = [EnrollmentResponse]),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn all_orders(Caller(caller): Caller) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    require_role(&caller, Role::Admin, "view orders")?;

    let db = create_connection().await?;
    let orders = EnrollmentService::all_in_status(&db, EnrollmentStatus::Ordered).await?;

    Ok(Json(orders.into_iter().map(EnrollmentResponse::from).collect()))
}

/// All orders for one course
#[utoipa::path(
    get,
    path = "/enrollments/orders/course/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Ordered enrollments of the course", body = [EnrollmentResponse]),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn course_orders(
    Caller(caller): Caller,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    require_role(&caller, Role::Admin, "view orders")?;

    let db = create_connection().await?;
    let orders =
        EnrollmentService::course_orders_in_status(&db, course_id, EnrollmentStatus::Ordered)
            .await?;

    Ok(Json(orders.into_iter().map(EnrollmentResponse::from).collect()))
}

/// All orders placed by one student
#[utoipa::path(
    get,
    path = "/enrollments/orders/student/{student_id}",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Ordered enrollments of the student", body = [EnrollmentResponse]),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn student_orders(
    Caller(caller): Caller,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    require_role(&caller, Role::Admin, "view orders")?;

    let db = create_connection().await?;
    let orders =
        EnrollmentService::student_orders_in_status(&db, &student_id, EnrollmentStatus::Ordered)
            .await?;

    Ok(Json(orders.into_iter().map(EnrollmentResponse::from).collect()))
}

/// All orders marked as waiting for payment
#[utoipa::path(
    get,
    path = "/enrollments/orders/waiting",
    responses(
        (status = 200, description = "All waiting-for-payment enrollments", body = [EnrollmentResponse]),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn all_waiting_orders(
    Caller(caller): Caller,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    require_role(&caller, Role::Admin, "view orders")?;

    let db = create_connection().await?;
    let orders =
        EnrollmentService::all_in_status(&db, EnrollmentStatus::WaitingForPayment).await?;

    Ok(Json(orders.into_iter().map(EnrollmentResponse::from).collect()))
}

/// Waiting-for-payment orders for one course
#[utoipa::path(
    get,
    path = "/enrollments/orders/waiting/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Waiting-for-payment enrollments of the course", body = [EnrollmentResponse]),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn course_waiting_orders(
    Caller(caller): Caller,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    require_role(&caller, Role::Admin, "view orders")?;

    let db = create_connection().await?;
    let orders = EnrollmentService::course_orders_in_status(
        &db,
        course_id,
        EnrollmentStatus::WaitingForPayment,
    )
    .await?;

    Ok(Json(orders.into_iter().map(EnrollmentResponse::from).collect()))
}

/// Waiting-for-payment orders of one student
#[utoipa::path(
    get,
    path = "/enrollments/orders/waiting/student/{student_id}",
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Waiting-for-payment enrollments of the student", body = [EnrollmentResponse]),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn student_waiting_orders(
    Caller(caller): Caller,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    require_role(&caller, Role::Admin, "view orders")?;

    let db = create_connection().await?;
    let orders = EnrollmentService::student_orders_in_status(
        &db,
        &student_id,
        EnrollmentStatus::WaitingForPayment,
    )
    .await?;

    Ok(Json(orders.into_iter().map(EnrollmentResponse::from).collect()))
}

/// Approve an order, unlocking the course content for the student
#[utoipa::path(
    put,
    path = "/enrollments/orders/approve",
    request_body = EnrollmentRef,
    responses(
        (status = 204, description = "Order approved"),
        (status = 404, description = "No enrollment for this pair"),
        (status = 409, description = "The current status does not allow approval"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn approve_order(
    Caller(caller): Caller,
    Json(order): Json<EnrollmentRef>,
) -> Result<StatusCode, ApiError> {
    require_role(&caller, Role::Admin, "approve orders")?;

    let db = create_connection().await?;
    EnrollmentService::mark_approved(&db, order.course_id, &order.student_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mark an order as waiting for payment
#[utoipa::path(
    put,
    path = "/enrollments/orders/waiting",
    request_body = EnrollmentRef,
    responses(
        (status = 204, description = "Order marked as waiting for payment"),
        (status = 404, description = "No enrollment for this pair"),
        (status = 409, description = "The current status does not allow this move"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("jwt" = [])),
    tag = "Enrollments"
)]
pub async fn mark_order_waiting(
    Caller(caller): Caller,
    Json(order): Json<EnrollmentRef>,
) -> Result<StatusCode, ApiError> {
    require_role(&caller, Role::Admin, "mark orders")?;

    let db = create_connection().await?;
    EnrollmentService::mark_waiting_for_payment(&db, order.course_id, &order.student_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
