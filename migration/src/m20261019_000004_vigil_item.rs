use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000003_vigil_project::VigilProject;

static IDX_ITEM_PROJECT_ID: &str = "idx-vigil_item-project_id";
static FK_ITEM_PROJECT_ID: &str = "fk-vigil_item-project_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VigilItem::Table)
                    .if_not_exists()
                    .col(pk_auto(VigilItem::Id))
                    .col(integer(VigilItem::ProjectId))
                    .col(string(VigilItem::Name))
                    .col(text_null(VigilItem::Description))
                    .col(integer_null(VigilItem::FrequencyValue))
                    .col(string_null(VigilItem::FrequencyUnit))
                    .col(timestamp(VigilItem::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEM_PROJECT_ID)
                    .table(VigilItem::Table)
                    .col(VigilItem::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEM_PROJECT_ID)
                    .from_tbl(VigilItem::Table)
                    .from_col(VigilItem::ProjectId)
                    .to_tbl(VigilProject::Table)
                    .to_col(VigilProject::Id)
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
                    .name(FK_ITEM_PROJECT_ID)
                    .table(VigilItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEM_PROJECT_ID)
                    .table(VigilItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VigilItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VigilItem {
    Table,
    Id,
    ProjectId,
    Name,
    Description,
    FrequencyValue,
    FrequencyUnit,
    CreatedAt,
}
