//! Migrator listing the board schema migrations in dependency order:
//! member before board before comment, indexes last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_member;
mod m20220101_000002_create_board;
mod m20220101_000003_create_comment;
mod m20220101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_member::Migration),
            Box::new(m20220101_000002_create_board::Migration),
            Box::new(m20220101_000003_create_comment::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000004_add_indexes::Migration),
        ]
    }
}
