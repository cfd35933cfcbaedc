use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000005_vigil_audit::VigilAudit;

static IDX_FINDING_AUDIT_ID: &str = "idx-vigil_finding-audit_id";
static FK_FINDING_AUDIT_ID: &str = "fk-vigil_finding-audit_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VigilFinding::Table)
                    .if_not_exists()
                    .col(pk_auto(VigilFinding::Id))
                    .col(integer(VigilFinding::AuditId))
                    .col(string(VigilFinding::Severity))
                    .col(text(VigilFinding::Notes))
                    .col(timestamp(VigilFinding::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FINDING_AUDIT_ID)
                    .table(VigilFinding::Table)
                    .col(VigilFinding::AuditId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FINDING_AUDIT_ID)
                    .from_tbl(VigilFinding::Table)
                    .from_col(VigilFinding::AuditId)
                    .to_tbl(VigilAudit::Table)
                    .to_col(VigilAudit::Id)
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
                    .name(FK_FINDING_AUDIT_ID)
                    .table(VigilFinding::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FINDING_AUDIT_ID)
                    .table(VigilFinding::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VigilFinding::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VigilFinding {
    Table,
    Id,
    AuditId,
    Severity,
    Notes,
    CreatedAt,
}
