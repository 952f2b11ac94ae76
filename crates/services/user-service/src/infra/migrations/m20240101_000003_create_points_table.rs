//! Migration: Create points table referencing users and memories.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;
use super::m20240101_000002_create_memories_table::Memories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Points::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Points::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Points::X).double().not_null())
                    .col(ColumnDef::new(Points::Y).double().not_null())
                    .col(ColumnDef::new(Points::UserId).string().not_null())
                    .col(ColumnDef::new(Points::MemoryId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_points_user_id")
                            .from(Points::Table, Points::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_points_memory_id")
                            .from(Points::Table, Points::MemoryId)
                            .to(Memories::Table, Memories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_points_user_id")
                    .table(Points::Table)
                    .col(Points::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Points::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Points {
    Table,
    Id,
    X,
    Y,
    UserId,
    MemoryId,
}
