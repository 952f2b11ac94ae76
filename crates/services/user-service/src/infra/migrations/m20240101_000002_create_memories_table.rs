//! Migration: Create memories table owned by users.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Memories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Memories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Memories::UserId).string().not_null())
                    .col(ColumnDef::new(Memories::Title).string().not_null())
                    .col(
                        ColumnDef::new(Memories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_memories_user_id")
                            .from(Memories::Table, Memories::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_memories_user_id")
                    .table(Memories::Table)
                    .col(Memories::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Memories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Memories {
    Table,
    Id,
    UserId,
    Title,
    CreatedAt,
}
