mod resolve_player;
mod resolve_team;
