pub const TEAM_A_ID: &str = "team-a";
pub const TEAM_B_ID: &str = "team-b";

pub const DEFAULT_TEAM_A_NAME: &str = "Team A";
pub const DEFAULT_TEAM_B_NAME: &str = "Team B";
