use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_REDIRECT_OVERVIEW_PAGE: &str = "idx_player_redirect_overview_page";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerRedirect::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerRedirect::Id))
                    .col(string_uniq(PlayerRedirect::Name))
                    .col(string(PlayerRedirect::OverviewPage))
                    .col(timestamp(PlayerRedirect::CreatedAt))
                    .col(timestamp(PlayerRedirect::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Redirect rows are enumerated per canonical entity during alias-set
        // aggregation. No foreign key: the player table is ingested separately
        // and redirect targets may arrive first.
        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_REDIRECT_OVERVIEW_PAGE)
                    .table(PlayerRedirect::Table)
                    .col(PlayerRedirect::OverviewPage)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_REDIRECT_OVERVIEW_PAGE)
                    .table(PlayerRedirect::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerRedirect::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerRedirect {
    Table,
    Id,
    Name,
    OverviewPage,
    CreatedAt,
    UpdatedAt,
}
