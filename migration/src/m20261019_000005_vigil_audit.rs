use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261019_000002_vigil_user::VigilUser, m20261019_000004_vigil_item::VigilItem,
};

static IDX_AUDIT_ITEM_ID: &str = "idx-vigil_audit-item_id";
static IDX_AUDIT_CREATED_AT: &str = "idx-vigil_audit-created_at";
static FK_AUDIT_ITEM_ID: &str = "fk-vigil_audit-item_id";
static FK_AUDIT_USER_ID: &str = "fk-vigil_audit-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VigilAudit::Table)
                    .if_not_exists()
                    .col(pk_auto(VigilAudit::Id))
                    .col(integer(VigilAudit::ItemId))
                    .col(integer(VigilAudit::UserId))
                    .col(string(VigilAudit::Status))
                    .col(text_null(VigilAudit::Notes))
                    .col(timestamp(VigilAudit::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUDIT_ITEM_ID)
                    .table(VigilAudit::Table)
                    .col(VigilAudit::ItemId)
                    .to_owned(),
            )
            .await?;

        // Audit lists are always read newest-first
        manager
            .create_index(
                Index::create()
                    .name(IDX_AUDIT_CREATED_AT)
                    .table(VigilAudit::Table)
                    .col(VigilAudit::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUDIT_ITEM_ID)
                    .from_tbl(VigilAudit::Table)
                    .from_col(VigilAudit::ItemId)
                    .to_tbl(VigilItem::Table)
                    .to_col(VigilItem::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUDIT_USER_ID)
                    .from_tbl(VigilAudit::Table)
                    .from_col(VigilAudit::UserId)
                    .to_tbl(VigilUser::Table)
                    .to_col(VigilUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AUDIT_USER_ID)
                    .table(VigilAudit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AUDIT_ITEM_ID)
                    .table(VigilAudit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUDIT_CREATED_AT)
                    .table(VigilAudit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUDIT_ITEM_ID)
                    .table(VigilAudit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VigilAudit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VigilAudit {
    Table,
    Id,
    ItemId,
    UserId,
    Status,
    Notes,
    CreatedAt,
}
