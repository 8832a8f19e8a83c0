use crate::routes::{auth, course, enrollment, health, section, student, video};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::whoami,
        health::health,
        course::list_courses,
        course::get_course,
        course::create_course,
        course::update_course,
        course::delete_course,
        section::get_course_sections,
        section::get_section,
        section::create_section,
        section::update_section,
        section::delete_section,
        video::get_section_videos,
        video::get_video,
        video::create_video,
        video::update_video,
        video::delete_video,
        enrollment::order_course,
        enrollment::my_courses,
        enrollment::my_orders,
        enrollment::all_orders,
        enrollment::course_orders,
        enrollment::student_orders,
        enrollment::all_waiting_orders,
        enrollment::course_waiting_orders,
        enrollment::student_waiting_orders,
        enrollment::approve_order,
        enrollment::mark_order_waiting,
        student::register_student,
        student::list_students
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Authentication related endpoints"),
        (name = "Courses", description = "Course catalog endpoints"),
        (name = "Sections", description = "Gated course content endpoints"),
        (name = "Videos", description = "Gated video content endpoints"),
        (name = "Enrollments", description = "Order and approval lifecycle endpoints"),
        (name = "Students", description = "Student directory endpoints"),
    ),
    info(
        title = "Course Market API",
        version = "1.0.0",
        description = "Online course marketplace API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
