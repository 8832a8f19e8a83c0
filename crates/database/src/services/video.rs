use crate::entities::{section, video};
use crate::services::course::CatalogError;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

pub struct VideoService;

impl VideoService {
    /// All videos of a section, addressed under the course the section
    /// belongs to. A mismatched course is reported as a missing section so
    /// an approval for one course can never unlock another course's videos.
    pub async fn for_section_in_course(
        db: &DatabaseConnection,
        course_id: Uuid,
        section_id: Uuid,
    ) -> Result<Vec<video::Model>, CatalogError> {
        let section = section::Entity::find_by_id(section_id)
            .one(db)
            .await?
            .filter(|s| s.course_id == course_id)
            .ok_or(CatalogError::SectionNotFound)?;

        let videos = video::Entity::find()
            .filter(video::Column::SectionId.eq(section.id))
            .all(db)
            .await?;

        Ok(videos)
    }

    /// One video, addressed under the course it belongs to.
    pub async fn get_in_course(
        db: &DatabaseConnection,
        course_id: Uuid,
        video_id: Uuid,
    ) -> Result<video::Model, CatalogError> {
        let video = video::Entity::find_by_id(video_id)
            .one(db)
            .await?
            .ok_or(CatalogError::VideoNotFound)?;

        let section = section::Entity::find_by_id(video.section_id)
            .one(db)
            .await?
            .ok_or(CatalogError::SectionNotFound)?;

        if section.course_id != course_id {
            return Err(CatalogError::VideoNotFound);
        }

        Ok(video)
    }

    pub async fn create(
        db: &DatabaseConnection,
        section_id: Uuid,
        title: String,
        media_path: String,
    ) -> Result<video::Model, CatalogError> {
        if section::Entity::find_by_id(section_id).one(db).await?.is_none() {
            return Err(CatalogError::SectionNotFound);
        }

        let now = chrono::Utc::now().naive_utc();
        let created = video::ActiveModel {
            id: Set(Uuid::new_v4()),
            section_id: Set(section_id),
            title: Set(title),
            media_path: Set(media_path),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        Ok(created)
    }

    pub async fn update(
        db: &DatabaseConnection,
        video_id: Uuid,
        title: Option<String>,
        media_path: Option<String>,
    ) -> Result<video::Model, CatalogError> {
        let video = video::Entity::find_by_id(video_id)
            .one(db)
            .await?
            .ok_or(CatalogError::VideoNotFound)?;

        let mut active: video::ActiveModel = video.into();
        if let Some(title) = title {
            active.title = Set(title);
        }
        if let Some(media_path) = media_path {
            active.media_path = Set(media_path);
        }
        active.updated_at = Set(chrono::Utc::now().naive_utc());

        let updated = video::Entity::update(active).exec(db).await?;
        Ok(updated)
    }

    pub async fn delete(db: &DatabaseConnection, video_id: Uuid) -> Result<(), CatalogError> {
        let result = video::Entity::delete_by_id(video_id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(CatalogError::VideoNotFound);
        }

        Ok(())
    }
}
