use crate::app::MenuItem;
use madden_api::format::format_stat;
use madden_api::playoffs::PlayoffRound;
use madden_api::schedule::{available_weeks, latest_week};
use madden_api::stats::{CategoryStats, positions};
use madden_api::{
    BracketMatchup, Conference, Game, LeagueSnapshot, Player, PlayoffPicture, SeasonLine,
    SeasonStats, StatCategory, StatField, StatFilter, Standing, Team, advance_bracket,
    aggregate_stats, attach_players, leaders, seed_playoffs,
};

// ---------------------------------------------------------------------------
// Loaded league data and everything derived from it
// ---------------------------------------------------------------------------

/// One loaded snapshot plus the season totals and playoff picture computed
/// from it. Rebuilt wholesale on every refresh.
#[derive(Debug, Default)]
pub struct LeagueData {
    pub snapshot: LeagueSnapshot,
    pub season: SeasonStats,
    pub picture: PlayoffPicture,
    /// Distinct player positions for the stats filter.
    pub positions: Vec<String>,
    /// Teams ordered by abbreviation for the stats team filter.
    pub team_order: Vec<u32>,
    /// Teams in Teams tab order: conference, division, name.
    pub directory: Vec<u32>,
}

impl LeagueData {
    pub fn new(snapshot: LeagueSnapshot) -> Self {
        let season = aggregate_stats(&snapshot.league, &snapshot.stats);
        let seeded = seed_playoffs(&snapshot.league, &snapshot.standings, &snapshot.teams);
        let picture = advance_bracket(&seeded, &snapshot.games);
        let positions = positions(&snapshot.players);

        let mut teams: Vec<&Team> = snapshot.teams.iter().collect();
        teams.sort_by(|a, b| a.abbr.cmp(&b.abbr).then(a.team_id.cmp(&b.team_id)));
        let team_order = teams.iter().map(|t| t.team_id).collect();
        let directory = snapshot.team_directory().iter().map(|t| t.team_id).collect();

        Self {
            snapshot,
            season,
            picture,
            positions,
            team_order,
            directory,
        }
    }

    pub fn directory_team(&self, idx: usize) -> Option<&Team> {
        self.directory.get(idx).and_then(|id| self.snapshot.team(*id))
    }

    /// Rows for the stats table under the current category, filter and sort.
    pub fn stat_rows(&self, stats: &StatsState) -> Vec<StatRow> {
        let players = &self.snapshot.players;
        let teams = &self.snapshot.teams;
        let (filter, sort) = (&stats.filter, stats.sort);
        match stats.category {
            StatCategory::Passing => stat_rows(&self.season.passing, players, teams, filter, sort),
            StatCategory::Rushing => stat_rows(&self.season.rushing, players, teams, filter, sort),
            StatCategory::Receiving => {
                stat_rows(&self.season.receiving, players, teams, filter, sort)
            }
            StatCategory::Defense => stat_rows(&self.season.defense, players, teams, filter, sort),
            StatCategory::Kicking => stat_rows(&self.season.kicking, players, teams, filter, sort),
            StatCategory::Punting => stat_rows(&self.season.punting, players, teams, filter, sort),
        }
    }
}

/// One formatted leaderboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub roster_id: u32,
    pub name: String,
    pub position: String,
    pub team: String, // "FA" for free agents
    pub games: u32,
    pub values: Vec<String>,
}

pub fn stat_rows<S: CategoryStats>(
    lines: &[SeasonLine<S>],
    players: &[Player],
    teams: &[Team],
    filter: &StatFilter,
    sort: StatField,
) -> Vec<StatRow> {
    let joined = attach_players(lines, players, teams);
    leaders(&joined, filter, sort)
        .into_iter()
        .map(|line| StatRow {
            roster_id: line.roster_id,
            name: line.player.full_name(),
            position: line.player.position.clone(),
            team: line
                .team
                .map(|t| t.abbr.clone())
                .unwrap_or_else(|| "FA".to_string()),
            games: line.line.games,
            values: S::CATEGORY
                .columns()
                .iter()
                .map(|field| format_stat(*field, line.value(*field)))
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct StandingsState {
    /// `None` shows the whole league.
    pub conference: Option<Conference>,
    pub scroll_offset: u16,
}

impl StandingsState {
    pub fn cycle_conference(&mut self) {
        self.conference = match self.conference {
            None => Some(Conference::Afc),
            Some(Conference::Afc) => Some(Conference::Nfc),
            Some(Conference::Nfc) => None,
        };
        self.scroll_offset = 0;
    }
}

/// Rank-ordered copy of the standings; the input order is left alone.
pub fn standings_view(standings: &[Standing], conference: Option<Conference>) -> Vec<&Standing> {
    let mut rows: Vec<&Standing> = standings
        .iter()
        .filter(|s| {
            conference.is_none_or(|c| Conference::from_name(&s.conference_name) == Some(c))
        })
        .collect();
    rows.sort_by_key(|s| (s.rank, s.team_id));
    rows
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct StatsState {
    pub category: StatCategory,
    pub sort: StatField,
    pub filter: StatFilter,
    /// Typed characters go to the name search while set.
    pub searching: bool,
    pub selected: usize,
}

impl Default for StatsState {
    fn default() -> Self {
        let category = StatCategory::default();
        Self {
            category,
            sort: category.default_sort(),
            filter: StatFilter::default(),
            searching: false,
            selected: 0,
        }
    }
}

impl StatsState {
    pub fn next_category(&mut self) {
        self.set_category(self.category.next());
    }

    pub fn prev_category(&mut self) {
        self.set_category(self.category.prev());
    }

    fn set_category(&mut self, category: StatCategory) {
        self.category = category;
        self.sort = category.default_sort();
        self.selected = 0;
    }

    pub fn cycle_sort(&mut self) {
        let columns = self.category.columns();
        let idx = columns.iter().position(|f| *f == self.sort);
        self.sort = match idx {
            Some(i) => columns[(i + 1) % columns.len()],
            None => self.category.default_sort(),
        };
        self.selected = 0;
    }

    pub fn cycle_position(&mut self, positions: &[String]) {
        self.filter.position = next_in(positions, self.filter.position.as_ref()).cloned();
        self.selected = 0;
    }

    pub fn cycle_team(&mut self, team_order: &[u32]) {
        self.filter.team_id = next_in(team_order, self.filter.team_id.as_ref()).copied();
        self.selected = 0;
    }

    pub fn push_search(&mut self, c: char) {
        self.filter.search.push(c);
        self.selected = 0;
    }

    pub fn pop_search(&mut self) {
        self.filter.search.pop();
        self.selected = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filter = StatFilter::default();
        self.searching = false;
        self.selected = 0;
    }

    pub fn select_down(&mut self, row_count: usize) {
        if self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// Walk `None -> first -> ... -> last -> None`.
fn next_in<'a, T: PartialEq>(items: &'a [T], current: Option<&T>) -> Option<&'a T> {
    match current {
        None => items.first(),
        Some(cur) => {
            let idx = items.iter().position(|i| i == cur)?;
            items.get(idx + 1)
        }
    }
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ScheduleState {
    /// 1-based week on display.
    pub week: Option<u8>,
    pub selected: usize,
}

impl ScheduleState {
    /// Keep the viewed week across refreshes unless it vanished; default to
    /// the latest week.
    pub fn on_loaded(&mut self, games: &[Game]) {
        let weeks = available_weeks(games);
        if self.week.is_none_or(|w| !weeks.contains(&w)) {
            self.week = latest_week(games);
            self.selected = 0;
        }
    }

    pub fn next_week(&mut self, games: &[Game]) {
        let weeks = available_weeks(games);
        if let Some(current) = self.week
            && let Some(next) = weeks.iter().find(|w| **w > current)
        {
            self.week = Some(*next);
            self.selected = 0;
        }
    }

    pub fn prev_week(&mut self, games: &[Game]) {
        let weeks = available_weeks(games);
        if let Some(current) = self.week
            && let Some(prev) = weeks.iter().rev().find(|w| **w < current)
        {
            self.week = Some(*prev);
            self.selected = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Playoffs
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct PlayoffState {
    pub view_round: PlayoffRound,
    /// Index within `view_round`'s matchups.
    pub selected_game: usize,
}

impl PlayoffState {
    pub fn navigate_round_next(&mut self) {
        if let Some(next) = self.view_round.next() {
            self.view_round = next;
            self.selected_game = 0;
        }
    }

    pub fn navigate_round_prev(&mut self) {
        if let Some(prev) = self.view_round.prev() {
            self.view_round = prev;
            self.selected_game = 0;
        }
    }

    pub fn navigate_game_down(&mut self, picture: &PlayoffPicture) {
        let max = picture.round(self.view_round).count().saturating_sub(1);
        if self.selected_game < max {
            self.selected_game += 1;
        }
    }

    pub fn navigate_game_up(&mut self) {
        self.selected_game = self.selected_game.saturating_sub(1);
    }

    pub fn selected<'a>(&self, picture: &'a PlayoffPicture) -> Option<&'a BracketMatchup> {
        picture.round(self.view_round).nth(self.selected_game)
    }

    /// Open on the earliest round that still has unplayed games.
    pub fn on_loaded(&mut self, picture: &PlayoffPicture) {
        self.view_round = PlayoffRound::ALL
            .into_iter()
            .find(|round| picture.round(*round).any(|m| !m.is_played))
            .unwrap_or(PlayoffRound::SuperBowl);
        self.selected_game = 0;
    }
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TeamsState {
    /// Index into `LeagueData::directory`.
    pub selected: usize,
    pub roster_offset: u16,
}

impl TeamsState {
    pub fn on_loaded(&mut self, team_count: usize) {
        if self.selected >= team_count {
            self.selected = team_count.saturating_sub(1);
            self.roster_offset = 0;
        }
    }

    pub fn select_down(&mut self, team_count: usize) {
        if self.selected + 1 < team_count {
            self.selected += 1;
            self.roster_offset = 0;
        }
    }

    pub fn select_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.roster_offset = 0;
        }
    }

    pub fn roster_down(&mut self, roster_len: usize) {
        let max = roster_len.saturating_sub(1) as u16;
        self.roster_offset = (self.roster_offset + 1).min(max);
    }

    pub fn roster_up(&mut self) {
        self.roster_offset = self.roster_offset.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Top-level state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub last_error: Option<String>,
    pub last_loaded_at: Option<String>,
    pub league: Option<LeagueData>,
    pub standings: StandingsState,
    pub stats: StatsState,
    pub schedule: ScheduleState,
    pub playoffs: PlayoffState,
    pub teams: TeamsState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
