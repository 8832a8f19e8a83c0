use crate::entities::course;
use models::delivery::DeliveryMode;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};
use thiserror::Error;
use uuid::Uuid;

/// Failures of the catalog services (courses, sections, videos).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course does not exist")]
    CourseNotFound,
    #[error("section does not exist")]
    SectionNotFound,
    #[error("video does not exist")]
    VideoNotFound,
    #[error(transparent)]
    Db(#[from] DbErr),
}

pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub delivery: DeliveryMode,
    pub image_path: Option<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Default)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub price_cents: Option<i64>,
    pub delivery: Option<DeliveryMode>,
    pub image_path: Option<Option<String>>,
}

pub struct CourseService;

impl CourseService {
    pub async fn create(
        db: &DatabaseConnection,
        new_course: NewCourse,
    ) -> Result<course::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        course::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new_course.title),
            description: Set(new_course.description),
            duration_minutes: Set(new_course.duration_minutes),
            price_cents: Set(new_course.price_cents),
            delivery: Set(new_course.delivery),
            image_path: Set(new_course.image_path),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
    }

    pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<course::Model>, DbErr> {
        course::Entity::find_by_id(id).one(db).await
    }

    pub async fn exists(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        Ok(course::Entity::find_by_id(id).count(db).await? > 0)
    }

    /// Query courses with pagination and filtering
    pub async fn list_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        search: Option<String>,
        delivery: Option<DeliveryMode>,
    ) -> Result<(Vec<course::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(search) = search
            && !search.is_empty()
        {
            let search_condition = Condition::any()
                .add(course::Column::Title.like(format!("%{search}%")))
                .add(course::Column::Description.like(format!("%{search}%")));
            condition = condition.add(search_condition);
        }

        if let Some(delivery) = delivery {
            condition = condition.add(course::Column::Delivery.eq(delivery));
        }

        let query = course::Entity::find().filter(condition);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let courses = paginator.fetch_page(page - 1).await?; // SeaORM uses 0-based pages

        Ok((courses, total_items))
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: CourseChanges,
    ) -> Result<course::Model, CatalogError> {
        let existing = course::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(CatalogError::CourseNotFound)?;

        let mut active: course::ActiveModel = existing.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(duration_minutes) = changes.duration_minutes {
            active.duration_minutes = Set(duration_minutes);
        }
        if let Some(price_cents) = changes.price_cents {
            active.price_cents = Set(price_cents);
        }
        if let Some(delivery) = changes.delivery {
            active.delivery = Set(delivery);
        }
        if let Some(image_path) = changes.image_path {
            active.image_path = Set(image_path);
        }
        active.updated_at = Set(chrono::Utc::now().naive_utc());

        let updated = course::Entity::update(active).exec(db).await?;
        Ok(updated)
    }

    /// Deletes the course; sections and videos go with it through the
    /// cascading foreign keys. Enrollments of other courses are untouched.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), CatalogError> {
        let result = course::Entity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(CatalogError::CourseNotFound);
        }

        Ok(())
    }
}
