mod list_player_appearances;
mod list_player_rosters;
