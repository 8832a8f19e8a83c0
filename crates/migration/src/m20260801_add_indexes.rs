use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Sections and videos are always fetched by their parent
        manager
            .create_index(
                Index::create()
                    .name("idx-sections-course_id")
                    .table(Sections::Table)
                    .col(Sections::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-videos-section_id")
                    .table(Videos::Table)
                    .col(Videos::SectionId)
                    .to_owned(),
            )
            .await?;

        // The admin order views filter on status; the student views filter
        // on student_id
        manager
            .create_index(
                Index::create()
                    .name("idx-enrollments-status")
                    .table(Enrollments::Table)
                    .col(Enrollments::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-enrollments-student_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-sections-course_id")
                    .table(Sections::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-videos-section_id")
                    .table(Videos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-enrollments-status")
                    .table(Enrollments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-enrollments-student_id")
                    .table(Enrollments::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Sections {
    Table,
    CourseId,
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    SectionId,
}

#[derive(DeriveIden)]
enum Enrollments {
    Table,
    Status,
    StudentId,
}
