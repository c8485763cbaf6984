use crate::{Game, GameResult};

/// 0-based week indices of the postseason (wild card through Super Bowl).
pub const PLAYOFF_WEEKS: std::ops::RangeInclusive<u8> = 18..=22;

impl Game {
    pub fn is_played(&self) -> bool {
        self.status != GameResult::NotPlayed
    }

    /// `None` for unplayed games and ties.
    pub fn winner_team_id(&self) -> Option<u32> {
        match self.status {
            GameResult::HomeWin => Some(self.home_team_id),
            GameResult::AwayWin => Some(self.away_team_id),
            GameResult::NotPlayed | GameResult::Tie => None,
        }
    }

    /// 1-based week number as shown to users.
    pub fn week(&self) -> u8 {
        self.week_index.saturating_add(1)
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// Distinct 1-based weeks present in the schedule, ascending.
pub fn available_weeks(games: &[Game]) -> Vec<u8> {
    let mut weeks: Vec<u8> = games.iter().map(Game::week).collect();
    weeks.sort_unstable();
    weeks.dedup();
    weeks
}

pub fn latest_week(games: &[Game]) -> Option<u8> {
    games.iter().map(Game::week).max()
}

/// Games of a 1-based week, ordered by schedule id.
pub fn games_for_week(games: &[Game], week: u8) -> Vec<&Game> {
    let mut out: Vec<&Game> = games.iter().filter(|g| g.week() == week).collect();
    out.sort_by_key(|g| g.schedule_id);
    out
}

pub fn playoff_games(games: &[Game]) -> Vec<&Game> {
    games
        .iter()
        .filter(|g| PLAYOFF_WEEKS.contains(&g.week_index))
        .collect()
}
