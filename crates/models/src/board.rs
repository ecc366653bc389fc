use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::member;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "board")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub member_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Member,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Member => Entity::belongs_to(member::Entity).from(Column::MemberId).to(member::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() { return Err(errors::ModelError::Validation("title required".into())); }
    if title.len() > 255 { return Err(errors::ModelError::Validation("title too long (max 255)".into())); }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, member_id: i64, title: &str, content: &str) -> Result<Model, errors::ModelError> {
    validate_title(title)?;
    let am = ActiveModel {
        member_id: Set(member_id),
        title: Set(title.to_string()),
        content: Set(content.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
