use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, LeagueData};
use chrono::Local;
use log::warn;
use madden_api::LeagueSnapshot;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Standings,
    Stats,
    Schedule,
    Playoffs,
    Teams,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn with_settings(settings: AppSettings) -> Self {
        let app = Self {
            state: AppState::new(),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_league_loaded(&mut self, snapshot: LeagueSnapshot) {
        if snapshot.league != self.settings.league && !self.settings.league.as_str().is_empty() {
            warn!(
                "snapshot is for league {}, configured league is {}",
                snapshot.league, self.settings.league
            );
        }
        let data = LeagueData::new(snapshot);

        self.state.schedule.on_loaded(&data.snapshot.games);
        self.state.playoffs.on_loaded(&data.picture);
        self.state.teams.on_loaded(data.directory.len());
        let rows = data.stat_rows(&self.state.stats).len();
        self.state.stats.selected = self.state.stats.selected.min(rows.saturating_sub(1));

        self.state.league = Some(data);
        self.state.last_error = None;
        self.state.last_loaded_at = Some(Local::now().format("%H:%M").to_string());
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        if next != MenuItem::Stats {
            self.state.stats.searching = false;
        }
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Standings
    // -----------------------------------------------------------------------

    pub fn standings_scroll_down(&mut self) {
        let max = self
            .state
            .league
            .as_ref()
            .map_or(0, |l| l.snapshot.standings.len().saturating_sub(1)) as u16;
        self.state.standings.scroll_offset = (self.state.standings.scroll_offset + 1).min(max);
    }

    pub fn standings_scroll_up(&mut self) {
        self.state.standings.scroll_offset = self.state.standings.scroll_offset.saturating_sub(1);
    }

    pub fn standings_cycle_conference(&mut self) {
        self.state.standings.cycle_conference();
    }

    // -----------------------------------------------------------------------
    // Stats, delegated to StatsState
    // -----------------------------------------------------------------------

    pub fn stats_next_category(&mut self) {
        self.state.stats.next_category();
    }

    pub fn stats_prev_category(&mut self) {
        self.state.stats.prev_category();
    }

    pub fn stats_cycle_sort(&mut self) {
        self.state.stats.cycle_sort();
    }

    pub fn stats_cycle_position(&mut self) {
        if let Some(league) = &self.state.league {
            self.state.stats.cycle_position(&league.positions);
        }
    }

    pub fn stats_cycle_team(&mut self) {
        if let Some(league) = &self.state.league {
            self.state.stats.cycle_team(&league.team_order);
        }
    }

    pub fn stats_select_down(&mut self) {
        let rows = self
            .state
            .league
            .as_ref()
            .map_or(0, |l| l.stat_rows(&self.state.stats).len());
        self.state.stats.select_down(rows);
    }

    pub fn stats_select_up(&mut self) {
        self.state.stats.select_up();
    }

    pub fn stats_start_search(&mut self) {
        self.state.stats.searching = true;
    }

    pub fn stats_stop_search(&mut self) {
        self.state.stats.searching = false;
    }

    pub fn stats_search_push(&mut self, c: char) {
        self.state.stats.push_search(c);
    }

    pub fn stats_search_pop(&mut self) {
        self.state.stats.pop_search();
    }

    pub fn stats_clear_filters(&mut self) {
        self.state.stats.clear_filters();
    }

    // -----------------------------------------------------------------------
    // Schedule
    // -----------------------------------------------------------------------

    pub fn schedule_next_week(&mut self) {
        if let Some(league) = &self.state.league {
            self.state.schedule.next_week(&league.snapshot.games);
        }
    }

    pub fn schedule_prev_week(&mut self) {
        if let Some(league) = &self.state.league {
            self.state.schedule.prev_week(&league.snapshot.games);
        }
    }

    pub fn schedule_select_down(&mut self) {
        let (Some(league), Some(week)) = (&self.state.league, self.state.schedule.week) else {
            return;
        };
        let count = madden_api::schedule::games_for_week(&league.snapshot.games, week).len();
        if self.state.schedule.selected + 1 < count {
            self.state.schedule.selected += 1;
        }
    }

    pub fn schedule_select_up(&mut self) {
        self.state.schedule.selected = self.state.schedule.selected.saturating_sub(1);
    }

    // -----------------------------------------------------------------------
    // Playoffs, delegated to PlayoffState
    // -----------------------------------------------------------------------

    pub fn playoffs_next_round(&mut self) {
        self.state.playoffs.navigate_round_next();
    }

    pub fn playoffs_prev_round(&mut self) {
        self.state.playoffs.navigate_round_prev();
    }

    pub fn playoffs_game_down(&mut self) {
        if let Some(league) = &self.state.league {
            self.state.playoffs.navigate_game_down(&league.picture);
        }
    }

    pub fn playoffs_game_up(&mut self) {
        self.state.playoffs.navigate_game_up();
    }

    // -----------------------------------------------------------------------
    // Teams
    // -----------------------------------------------------------------------

    pub fn teams_select_down(&mut self) {
        let count = self.state.league.as_ref().map_or(0, |l| l.directory.len());
        self.state.teams.select_down(count);
    }

    pub fn teams_select_up(&mut self) {
        self.state.teams.select_up();
    }

    pub fn teams_roster_down(&mut self) {
        let roster_len = self.state.league.as_ref().map_or(0, |l| {
            l.directory_team(self.state.teams.selected)
                .map_or(0, |t| l.snapshot.roster(t.team_id).len())
        });
        self.state.teams.roster_down(roster_len);
    }

    pub fn teams_roster_up(&mut self) {
        self.state.teams.roster_up();
    }
}
