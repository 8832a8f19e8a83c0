use chrono::NaiveDateTime;
use database::entities::course;
use models::delivery::DeliveryMode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub price_cents: i64,
    #[schema(value_type = String)]
    pub delivery: DeliveryMode,
    pub image_path: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<course::Model> for CourseResponse {
    fn from(course: course::Model) -> Self {
        Self {
            id: course.id.to_string(),
            title: course.title,
            description: course.description,
            duration_minutes: course.duration_minutes,
            price_cents: course.price_cents,
            delivery: course.delivery,
            image_path: course.image_path,
            created_at: course.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub courses: Vec<CourseResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: u64, per_page: u64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(per_page);

        Self {
            page,
            per_page,
            total_pages,
            total_items,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    pub search: Option<String>,

    #[param(value_type = Option<String>)]
    #[schema(value_type = Option<String>)]
    pub delivery: Option<DeliveryMode>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub price_cents: i64,
    #[schema(value_type = String)]
    pub delivery: DeliveryMode,
    pub image_path: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub price_cents: Option<i64>,
    #[schema(value_type = Option<String>)]
    pub delivery: Option<DeliveryMode>,
    pub image_path: Option<String>,
}

#[cfg(test)]
mod test {
    use super::PaginationMeta;

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, 20, 45);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(!meta.has_prev);

        let last = PaginationMeta::new(3, 20, 45);
        assert!(!last.has_next);
        assert!(last.has_prev);

        let empty = PaginationMeta::new(1, 20, 0);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next);
    }
}
