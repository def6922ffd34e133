pub mod player;
pub mod player_redirect;
pub mod scoreboard_player;
pub mod team;
pub mod team_redirect;
pub mod tournament_player;

pub mod prelude;
