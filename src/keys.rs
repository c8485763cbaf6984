use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    // Name search swallows every printable key until Esc or Enter.
    if guard.state.active_tab == MenuItem::Stats && guard.state.stats.searching {
        match (key_event.code, key_event.modifiers) {
            (Char('c'), KeyModifiers::CONTROL) => {
                crate::cleanup_terminal();
                std::process::exit(0);
            }
            (KeyCode::Esc | KeyCode::Enter, _) => guard.stats_stop_search(),
            (KeyCode::Backspace, _) => guard.stats_search_pop(),
            (Char(c), _) => guard.stats_search_push(c),
            _ => {}
        }
        return;
    }

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Standings),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Stats),
        (_, Char('3'), _) => guard.update_tab(MenuItem::Schedule),
        (_, Char('4'), _) => guard.update_tab(MenuItem::Playoffs),
        (_, Char('5'), _) => guard.update_tab(MenuItem::Teams),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Standings
        (MenuItem::Standings, Char('j') | KeyCode::Down, _) => guard.standings_scroll_down(),
        (MenuItem::Standings, Char('k') | KeyCode::Up, _) => guard.standings_scroll_up(),
        (MenuItem::Standings, Char('c'), _) => guard.standings_cycle_conference(),

        // Stats
        (MenuItem::Stats, Char('l') | KeyCode::Right, _) => guard.stats_next_category(),
        (MenuItem::Stats, Char('h') | KeyCode::Left, _) => guard.stats_prev_category(),
        (MenuItem::Stats, Char('j') | KeyCode::Down, _) => guard.stats_select_down(),
        (MenuItem::Stats, Char('k') | KeyCode::Up, _) => guard.stats_select_up(),
        (MenuItem::Stats, Char('s'), _) => guard.stats_cycle_sort(),
        (MenuItem::Stats, Char('p'), _) => guard.stats_cycle_position(),
        (MenuItem::Stats, Char('t'), _) => guard.stats_cycle_team(),
        (MenuItem::Stats, Char('/'), _) => guard.stats_start_search(),
        (MenuItem::Stats, Char('x'), _) => guard.stats_clear_filters(),

        // Schedule
        (MenuItem::Schedule, Char('l') | KeyCode::Right, _) => guard.schedule_next_week(),
        (MenuItem::Schedule, Char('h') | KeyCode::Left, _) => guard.schedule_prev_week(),
        (MenuItem::Schedule, Char('j') | KeyCode::Down, _) => guard.schedule_select_down(),
        (MenuItem::Schedule, Char('k') | KeyCode::Up, _) => guard.schedule_select_up(),

        // Playoffs
        (MenuItem::Playoffs, Char('l') | KeyCode::Right, _) => guard.playoffs_next_round(),
        (MenuItem::Playoffs, Char('h') | KeyCode::Left, _) => guard.playoffs_prev_round(),
        (MenuItem::Playoffs, Char('j') | KeyCode::Down, _) => guard.playoffs_game_down(),
        (MenuItem::Playoffs, Char('k') | KeyCode::Up, _) => guard.playoffs_game_up(),

        // Teams
        (MenuItem::Teams, Char('j') | KeyCode::Down, _) => guard.teams_select_down(),
        (MenuItem::Teams, Char('k') | KeyCode::Up, _) => guard.teams_select_up(),
        (MenuItem::Teams, Char('J') | KeyCode::PageDown, _) => guard.teams_roster_down(),
        (MenuItem::Teams, Char('K') | KeyCode::PageUp, _) => guard.teams_roster_up(),

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),
        (_, Char('R'), _) => {
            drop(guard);
            let _ = network_requests.send(NetworkRequest::RefreshLeague).await;
        }

        _ => {}
    }
}
