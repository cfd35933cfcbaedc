use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_vigil_team::VigilTeam;

static IDX_PROJECT_TEAM_ID: &str = "idx-vigil_project-team_id";
static FK_PROJECT_TEAM_ID: &str = "fk-vigil_project-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VigilProject::Table)
                    .if_not_exists()
                    .col(pk_auto(VigilProject::Id))
                    .col(integer(VigilProject::TeamId))
                    .col(string(VigilProject::Name))
                    .col(timestamp(VigilProject::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROJECT_TEAM_ID)
                    .table(VigilProject::Table)
                    .col(VigilProject::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_TEAM_ID)
                    .from_tbl(VigilProject::Table)
                    .from_col(VigilProject::TeamId)
                    .to_tbl(VigilTeam::Table)
                    .to_col(VigilTeam::Id)
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
                    .name(FK_PROJECT_TEAM_ID)
                    .table(VigilProject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROJECT_TEAM_ID)
                    .table(VigilProject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VigilProject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VigilProject {
    Table,
    Id,
    TeamId,
    Name,
    CreatedAt,
}
