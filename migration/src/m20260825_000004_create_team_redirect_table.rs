use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAM_REDIRECT_OVERVIEW_PAGE: &str = "idx_team_redirect_overview_page";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamRedirect::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamRedirect::Id))
                    .col(string_uniq(TeamRedirect::Name))
                    .col(string(TeamRedirect::OverviewPage))
                    .col(timestamp(TeamRedirect::CreatedAt))
                    .col(timestamp(TeamRedirect::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_REDIRECT_OVERVIEW_PAGE)
                    .table(TeamRedirect::Table)
                    .col(TeamRedirect::OverviewPage)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_REDIRECT_OVERVIEW_PAGE)
                    .table(TeamRedirect::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamRedirect::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamRedirect {
    Table,
    Id,
    Name,
    OverviewPage,
    CreatedAt,
    UpdatedAt,
}
