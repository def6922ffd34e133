pub use super::player::Entity as Player;
pub use super::player_redirect::Entity as PlayerRedirect;
pub use super::scoreboard_player::Entity as ScoreboardPlayer;
pub use super::team::Entity as Team;
pub use super::team_redirect::Entity as TeamRedirect;
pub use super::tournament_player::Entity as TournamentPlayer;
