use crate::entities::{course, section, video};
use crate::services::course::CatalogError;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use std::collections::HashMap;
use uuid::Uuid;

pub struct SectionService;

impl SectionService {
    /// All sections of a course with their videos. A course without
    /// sections yields an empty list, not an error.
    pub async fn for_course_with_videos(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> Result<Vec<(section::Model, Vec<video::Model>)>, CatalogError> {
        if course::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Err(CatalogError::CourseNotFound);
        }

        let sections = section::Entity::find()
            .filter(section::Column::CourseId.eq(course_id))
            .all(db)
            .await?;

        if sections.is_empty() {
            return Ok(vec![]);
        }

        let section_ids: Vec<Uuid> = sections.iter().map(|s| s.id).collect();

        // Batch fetch all videos for all sections
        let videos = video::Entity::find()
            .filter(video::Column::SectionId.is_in(section_ids))
            .all(db)
            .await?;

        let mut videos_by_section: HashMap<Uuid, Vec<video::Model>> = HashMap::new();
        for video in videos {
            videos_by_section
                .entry(video.section_id)
                .or_default()
                .push(video);
        }

        let results = sections
            .into_iter()
            .map(|section| {
                let section_videos = videos_by_section.remove(&section.id).unwrap_or_default();
                (section, section_videos)
            })
            .collect();

        Ok(results)
    }

    /// One section of a course with its videos. A section addressed under a
    /// course it does not belong to is reported as missing.
    pub async fn get_in_course_with_videos(
        db: &DatabaseConnection,
        course_id: Uuid,
        section_id: Uuid,
    ) -> Result<(section::Model, Vec<video::Model>), CatalogError> {
        let section = Self::find_in_course(db, course_id, section_id).await?;

        let videos = video::Entity::find()
            .filter(video::Column::SectionId.eq(section.id))
            .all(db)
            .await?;

        Ok((section, videos))
    }

    pub async fn create(
        db: &DatabaseConnection,
        course_id: Uuid,
        title: String,
    ) -> Result<section::Model, CatalogError> {
        if course::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Err(CatalogError::CourseNotFound);
        }

        let now = chrono::Utc::now().naive_utc();
        let created = section::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            title: Set(title),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        Ok(created)
    }

    pub async fn rename(
        db: &DatabaseConnection,
        course_id: Uuid,
        section_id: Uuid,
        title: String,
    ) -> Result<section::Model, CatalogError> {
        let section = Self::find_in_course(db, course_id, section_id).await?;

        let mut active: section::ActiveModel = section.into();
        active.title = Set(title);
        active.updated_at = Set(chrono::Utc::now().naive_utc());

        let updated = section::Entity::update(active).exec(db).await?;
        Ok(updated)
    }

    /// Deletes the section; its videos go with it through the cascading
    /// foreign key.
    pub async fn delete(
        db: &DatabaseConnection,
        course_id: Uuid,
        section_id: Uuid,
    ) -> Result<(), CatalogError> {
        let section = Self::find_in_course(db, course_id, section_id).await?;

        section::Entity::delete_by_id(section.id).exec(db).await?;
        Ok(())
    }

    async fn find_in_course(
        db: &DatabaseConnection,
        course_id: Uuid,
        section_id: Uuid,
    ) -> Result<section::Model, CatalogError> {
        if course::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Err(CatalogError::CourseNotFound);
        }

        let section: Option<section::Model> =
            section::Entity::find_by_id(section_id).one(db).await?;

        match section {
            Some(section) if section.course_id == course_id => Ok(section),
            _ => Err(CatalogError::SectionNotFound),
        }
    }
}
