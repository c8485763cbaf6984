pub mod client;
pub mod format;
pub mod playoffs;
pub mod schedule;
pub mod stats;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use playoffs::{
    BracketMatchup, Conference, PlayoffPicture, PlayoffRound, PlayoffTeam, advance_bracket,
    seed_playoffs,
};
pub use stats::{
    AggregatedStatLine, PlayerStats, SeasonLine, SeasonStats, StatCategory, StatEntry, StatError,
    StatField, StatFilter, aggregate_stats, attach_players, leaders,
};

// ---------------------------------------------------------------------------
// Domain types: clean model, independent of the export wire format
// ---------------------------------------------------------------------------

/// Which league a set of arrays belongs to. Passed explicitly into every
/// computation instead of living in a global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the dashboard needs for one league, fetched in one go.
#[derive(Debug, Clone, Default)]
pub struct LeagueSnapshot {
    pub league: LeagueId,
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    pub standings: Vec<Standing>,
    pub games: Vec<Game>,
    pub stats: PlayerStats,
    /// Categories that could not be grouped. Each one is left empty; the
    /// rest of the snapshot is unaffected.
    pub stat_errors: Vec<StatError>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl LeagueSnapshot {
    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }

    pub fn player(&self, roster_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.roster_id == roster_id)
    }

    /// A team's players, best overall first.
    pub fn roster(&self, team_id: u32) -> Vec<&Player> {
        let mut roster: Vec<&Player> =
            self.players.iter().filter(|p| p.team_id == team_id && !p.is_free_agent).collect();
        roster.sort_by(|a, b| {
            b.overall
                .cmp(&a.overall)
                .then_with(|| a.position.cmp(&b.position))
                .then_with(|| a.last_name.cmp(&b.last_name))
        });
        roster
    }

    /// Teams grouped by conference, then division, then name.
    pub fn team_directory(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams.iter().collect();
        teams.sort_by(|a, b| {
            a.conference_label()
                .cmp(b.conference_label())
                .then_with(|| a.division_label().cmp(b.division_label()))
                .then_with(|| a.display_name.cmp(&b.display_name))
        });
        teams
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Player {
    pub roster_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub overall: u8,
    pub team_id: u32, // 0 = free agent
    pub team_abbr: String,
    pub dev_trait: DevTrait,
    pub age: u8,
    pub years_pro: u8,
    pub contract_salary: u64,
    pub cap_hit: u64,
    pub contract_bonus: u64,
    pub contract_years_left: u8,
    pub is_free_agent: bool,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub team_id: u32,
    pub display_name: String, // "Ravens"
    pub city_name: String,    // "Baltimore"
    pub nick_name: String,
    pub abbr: String, // "BAL"
    pub div_name: String,
    pub conf_name: String,
    pub owner_name: Option<String>,
    pub ovr_rating: Option<u8>,
}

impl Team {
    pub fn conference_label(&self) -> &str {
        if self.conf_name.trim().is_empty() { "Unknown Conference" } else { &self.conf_name }
    }

    pub fn division_label(&self) -> &str {
        if self.div_name.trim().is_empty() { "Unknown Division" } else { &self.div_name }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standing {
    pub team_id: u32,
    pub team_name: String,
    pub wins: u16,
    pub losses: u16,
    pub ties: u16,
    /// League-wide rank, pre-computed upstream with tiebreakers applied.
    /// `UNRANKED` when the export has none.
    pub rank: u16,
    pub conference_rank: u16,
    pub division_rank: u16,
    pub conference_name: String,
    pub division_name: String,
    pub win_pct: Option<f64>,
    pub pts_for: i32,
    pub pts_against: i32,
    pub net_pts: i32,
    pub to_diff: i32,
    pub streak: Option<String>,
}

impl Standing {
    /// Sorts after every real rank.
    pub const UNRANKED: u16 = u16::MAX;

    pub fn is_ranked(&self) -> bool {
        self.rank != Self::UNRANKED
    }
}

/// One schedule entry. `week_index` is 0-based as exported by the game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    pub schedule_id: u32,
    pub week_index: u8,
    pub season_index: u16,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_score: u16,
    pub away_score: u16,
    pub status: GameResult,
    pub stage_index: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameResult {
    #[default]
    NotPlayed,
    AwayWin,
    HomeWin,
    Tie,
}

impl GameResult {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => GameResult::AwayWin,
            2 => GameResult::HomeWin,
            3 => GameResult::Tie,
            _ => GameResult::NotPlayed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DevTrait {
    #[default]
    Normal,
    Star,
    Superstar,
    XFactor,
}

impl DevTrait {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => DevTrait::Star,
            2 => DevTrait::Superstar,
            3 => DevTrait::XFactor,
            _ => DevTrait::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DevTrait::Normal => "Normal",
            DevTrait::Star => "Star",
            DevTrait::Superstar => "Superstar",
            DevTrait::XFactor => "X-Factor",
        }
    }
}
