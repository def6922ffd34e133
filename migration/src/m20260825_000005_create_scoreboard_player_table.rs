use sea_orm_migration::{prelude::*, schema::*};

static IDX_SCOREBOARD_PLAYER_NAME: &str = "idx_scoreboard_player_name";
static IDX_SCOREBOARD_PLAYER_LINK: &str = "idx_scoreboard_player_link";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScoreboardPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(ScoreboardPlayer::Id))
                    .col(string(ScoreboardPlayer::Name))
                    .col(string_null(ScoreboardPlayer::Link))
                    .col(string(ScoreboardPlayer::Champion))
                    .col(integer(ScoreboardPlayer::Kills))
                    .col(integer(ScoreboardPlayer::Deaths))
                    .col(integer(ScoreboardPlayer::Assists))
                    .col(string(ScoreboardPlayer::Team))
                    .col(string(ScoreboardPlayer::Tournament))
                    .col(string(ScoreboardPlayer::GameId))
                    .col(date_time(ScoreboardPlayer::PlayedAt))
                    .to_owned(),
            )
            .await?;

        // Fact rows reference players by recorded name strings only; both
        // columns are searched by the appearance queries.
        manager
            .create_index(
                Index::create()
                    .name(IDX_SCOREBOARD_PLAYER_NAME)
                    .table(ScoreboardPlayer::Table)
                    .col(ScoreboardPlayer::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SCOREBOARD_PLAYER_LINK)
                    .table(ScoreboardPlayer::Table)
                    .col(ScoreboardPlayer::Link)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SCOREBOARD_PLAYER_LINK)
                    .table(ScoreboardPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SCOREBOARD_PLAYER_NAME)
                    .table(ScoreboardPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ScoreboardPlayer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ScoreboardPlayer {
    Table,
    Id,
    Name,
    Link,
    Champion,
    Kills,
    Deaths,
    Assists,
    Team,
    Tournament,
    GameId,
    PlayedAt,
}
