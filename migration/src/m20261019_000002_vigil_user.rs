use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_vigil_team::VigilTeam;

static IDX_USER_TEAM_ID: &str = "idx-vigil_user-team_id";
static FK_USER_TEAM_ID: &str = "fk-vigil_user-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VigilUser::Table)
                    .if_not_exists()
                    .col(pk_auto(VigilUser::Id))
                    .col(integer_null(VigilUser::TeamId))
                    .col(string(VigilUser::Name))
                    .col(string_uniq(VigilUser::Email))
                    .col(string_null(VigilUser::Image))
                    .col(timestamp(VigilUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_TEAM_ID)
                    .table(VigilUser::Table)
                    .col(VigilUser::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_TEAM_ID)
                    .from_tbl(VigilUser::Table)
                    .from_col(VigilUser::TeamId)
                    .to_tbl(VigilTeam::Table)
                    .to_col(VigilTeam::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_TEAM_ID)
                    .table(VigilUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_TEAM_ID)
                    .table(VigilUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VigilUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VigilUser {
    Table,
    Id,
    TeamId,
    Name,
    Email,
    Image,
    CreatedAt,
}
