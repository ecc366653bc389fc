use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{board, member};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub board_id: i64,
    pub member_id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Board, Member }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Board => Entity::belongs_to(board::Entity).from(Column::BoardId).to(board::Column::Id).into(),
            Relation::Member => Entity::belongs_to(member::Entity).from(Column::MemberId).to(member::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
