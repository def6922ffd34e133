use sea_orm_migration::{prelude::*, schema::*};

static IDX_TOURNAMENT_PLAYER_NAME: &str = "idx_tournament_player_name";
static IDX_TOURNAMENT_PLAYER_LINK: &str = "idx_tournament_player_link";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(TournamentPlayer::Id))
                    .col(string(TournamentPlayer::Name))
                    .col(string_null(TournamentPlayer::Link))
                    .col(string(TournamentPlayer::Team))
                    .col(string_null(TournamentPlayer::Role))
                    .col(string(TournamentPlayer::Tournament))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_PLAYER_NAME)
                    .table(TournamentPlayer::Table)
                    .col(TournamentPlayer::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_PLAYER_LINK)
                    .table(TournamentPlayer::Table)
                    .col(TournamentPlayer::Link)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOURNAMENT_PLAYER_LINK)
                    .table(TournamentPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOURNAMENT_PLAYER_NAME)
                    .table(TournamentPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TournamentPlayer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TournamentPlayer {
    Table,
    Id,
    Name,
    Link,
    Team,
    Role,
    Tournament,
}
