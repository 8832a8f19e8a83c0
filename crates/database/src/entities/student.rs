use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Local mirror of the identity provider's user record. The id is the
/// provider's stable subject, so it is a plain string rather than a UUID
/// minted here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

// Many-to-many relationship with courses through enrollments
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::enrollment::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::enrollment::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
