use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::bracket::{
    BracketColor, BracketGrid, CONFERENCE_HEIGHT, ConferenceBracketView, SuperBowlView, resolve,
};
use crate::state::app_state::{LeagueData, StatRow, standings_view};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use madden_api::format::{format_money, format_record, format_win_pct, season_label, week_label};
use madden_api::schedule::games_for_week;
use madden_api::{Conference, DevTrait, Game, GameResult, PlayoffPicture, Team};

static TABS: &[&str; 5] = &["Standings", "Stats", "Schedule", "Playoffs", "Teams"];

const NAME_W: usize = 22;
const STAT_W: usize = 7;

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Standings => draw_standings(f, layout.main, app),
            MenuItem::Stats => draw_stats(f, layout.main, app),
            MenuItem::Schedule => draw_schedule(f, layout.main, app),
            MenuItem::Playoffs => draw_playoffs(f, layout.main, app),
            MenuItem::Teams => draw_teams(f, layout.main, app),
            MenuItem::Help => draw_help(f, layout.main),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });
    if let Err(e) = result {
        error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Standings => 0,
        MenuItem::Stats => 1,
        MenuItem::Schedule => 2,
        MenuItem::Playoffs => 3,
        MenuItem::Teams => 4,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let league = app
        .state
        .league
        .as_ref()
        .map(|l| l.snapshot.league.to_string())
        .unwrap_or_else(|| app.settings.league.to_string());
    let updated = app
        .state
        .last_loaded_at
        .as_deref()
        .map(|t| format!(" {t}"))
        .unwrap_or_default();
    let status = Paragraph::new(format!("League {league}{updated}  Help: ? "))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(status, tab_bar[1]);
}

/// Shown in place of a view until the first load lands.
fn draw_no_data(f: &mut Frame, area: Rect, app: &App) {
    let msg = if let Some(err) = app.state.last_error.as_deref() {
        format!("League load failed:\n{err}\n\nPress R to retry")
    } else {
        "Loading league data...".to_string()
    };
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

fn legend(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).style(Style::default().fg(Color::DarkGray))
}

fn team_label(league: &LeagueData, team_id: u32) -> String {
    match league.snapshot.team(team_id) {
        Some(team) if !team.abbr.is_empty() => team.abbr.clone(),
        Some(team) => team.display_name.clone(),
        None => format!("#{team_id}"),
    }
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

fn draw_standings(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.state.standings.conference {
        Some(conference) => format!(" Standings: {conference} "),
        None => " Standings ".to_string(),
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(league) = app.state.league.as_ref() else {
        draw_no_data(f, inner, app);
        return;
    };

    let [key_legend, header, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Fill(1)])
            .areas(inner);
    f.render_widget(legend("Keys: j/k=scroll  c=conference  R=reload"), key_legend);
    f.render_widget(
        Paragraph::new(format!(
            "{:>3}  {:<NAME_W$} {:>8} {:>6} {:>5} {:>5} {:>5} {:>4} {:>5}  {}",
            "#", "Team", "Record", "Pct", "PF", "PA", "Net", "TO", "Strk", "Division"
        ))
        .style(Style::default().add_modifier(Modifier::BOLD)),
        header,
    );

    let rows = standings_view(&league.snapshot.standings, app.state.standings.conference);
    if rows.is_empty() {
        f.render_widget(legend("No standings for this league"), body);
        return;
    }

    let lines: Vec<Line> = rows
        .iter()
        .skip(app.state.standings.scroll_offset as usize)
        .map(|s| {
            let name = if s.team_name.is_empty() {
                team_label(league, s.team_id)
            } else {
                s.team_name.clone()
            };
            let rank = if s.is_ranked() { s.rank.to_string() } else { "-".to_string() };
            Line::from(format!(
                "{:>3}  {:<NAME_W$} {:>8} {:>6} {:>5} {:>5} {:>5} {:>4} {:>5}  {}",
                rank,
                clip(&name, NAME_W),
                format_record(s.wins, s.losses, s.ties),
                format_win_pct(s.win_pct),
                s.pts_for,
                s.pts_against,
                s.net_pts,
                s.to_diff,
                s.streak.as_deref().unwrap_or("-"),
                s.division_name
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), body);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let stats = &app.state.stats;
    let block = default_border(Color::White).title(format!(" {} Leaders ", stats.category.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(league) = app.state.league.as_ref() else {
        draw_no_data(f, inner, app);
        return;
    };

    let [key_legend, filters, header, body, summary] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(inner);

    f.render_widget(
        legend("Keys: h/l=category  j/k=move  s=sort  p=position  t=team  /=search  x=clear"),
        key_legend,
    );

    let search = if stats.searching {
        format!("{}_", stats.filter.search)
    } else if stats.filter.search.is_empty() {
        "-".to_string()
    } else {
        stats.filter.search.clone()
    };
    let position = stats.filter.position.as_deref().unwrap_or("All");
    let team = stats
        .filter
        .team_id
        .map(|id| team_label(league, id))
        .unwrap_or_else(|| "All".to_string());
    let search_style = if stats.searching {
        resolve(BracketColor::Accent)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Search: "),
            Span::styled(search, search_style),
            Span::raw(format!("  Position: {position}  Team: {team}  Sort: {}", stats.sort.header())),
        ])),
        filters,
    );

    let mut header_spans = vec![Span::styled(
        format!("  {:<NAME_W$} {:<4} {:<4} {:>3}", "Player", "Pos", "Team", "GP"),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for field in stats.category.columns() {
        let style = if *field == stats.sort {
            resolve(BracketColor::Accent)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        header_spans.push(Span::styled(format!(" {:>STAT_W$}", field.header()), style));
    }
    f.render_widget(Paragraph::new(Line::from(header_spans)), header);

    let rows = league.stat_rows(stats);
    let category_error =
        league.snapshot.stat_errors.iter().find(|e| e.category() == stats.category);
    if let Some(err) = category_error {
        f.render_widget(
            Paragraph::new(format!("{err}; this category was not loaded"))
                .style(Style::default().fg(Color::Red)),
            body,
        );
    } else if rows.is_empty() {
        f.render_widget(legend("No players match"), body);
    } else {
        let visible = (body.height as usize).max(1);
        let offset = stats.selected.saturating_sub(visible - 1);
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, row)| stat_line(row, idx == stats.selected))
            .collect();
        f.render_widget(Paragraph::new(lines), body);
    }

    if let Some(row) = rows.get(stats.selected) {
        draw_player_summary(f, summary, league, row);
    }
}

fn stat_line(row: &StatRow, selected: bool) -> Line<'static> {
    let marker = if selected { '>' } else { ' ' };
    let mut text = format!(
        "{marker} {:<NAME_W$} {:<4} {:<4} {:>3}",
        clip(&row.name, NAME_W),
        clip(&row.position, 4),
        clip(&row.team, 4),
        row.games
    );
    for value in &row.values {
        text.push_str(&format!(" {value:>STAT_W$}"));
    }
    let style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::styled(text, style)
}

fn draw_player_summary(f: &mut Frame, area: Rect, league: &LeagueData, row: &StatRow) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(player) = league.snapshot.player(row.roster_id) else {
        return;
    };
    let team = if player.is_free_agent || player.team_id == 0 {
        "Free Agent".to_string()
    } else {
        team_label(league, player.team_id)
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(player.full_name(), resolve(BracketColor::Primary)),
            Span::raw(format!(
                "  {}  {team}  OVR {}  {} Dev  {}  Age {}",
                player.position,
                player.overall,
                player.dev_trait.label(),
                season_label(player.years_pro),
                player.age
            )),
        ]),
        Line::styled(
            format!(
                "Salary {}  Cap hit {}  Bonus {}  {} yrs left",
                format_money(player.contract_salary),
                format_money(player.cap_hit),
                format_money(player.contract_bonus),
                player.contract_years_left
            ),
            Style::default().fg(Color::Gray),
        ),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

fn draw_schedule(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.state.schedule.week {
        Some(week) => format!(" {} ", week_label(week).unwrap_or_else(|_| format!("Week {week}"))),
        None => " Schedule ".to_string(),
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(league) = app.state.league.as_ref() else {
        draw_no_data(f, inner, app);
        return;
    };

    let [key_legend, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
    f.render_widget(legend("Keys: h/l=week  j/k=move  R=reload"), key_legend);

    let Some(week) = app.state.schedule.week else {
        f.render_widget(legend("No games scheduled"), body);
        return;
    };

    let lines: Vec<Line> = games_for_week(&league.snapshot.games, week)
        .into_iter()
        .enumerate()
        .map(|(idx, game)| schedule_line(league, game, idx == app.state.schedule.selected))
        .collect();
    f.render_widget(Paragraph::new(lines), body);
}

fn schedule_line(league: &LeagueData, game: &Game, selected: bool) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let away = team_label(league, game.away_team_id);
    let home = team_label(league, game.home_team_id);
    let base = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let winner = resolve(BracketColor::Winner);

    if !game.is_played() {
        return Line::from(vec![
            Span::styled(format!("{marker}{away:<6} @ {home:<6}"), base),
            Span::styled("  Scheduled", resolve(BracketColor::Dim)),
        ]);
    }

    let (away_style, home_style) = match game.status {
        GameResult::AwayWin => (winner, base),
        GameResult::HomeWin => (base, winner),
        _ => (base, base),
    };
    Line::from(vec![
        Span::styled(marker.to_string(), base),
        Span::styled(format!("{away:<6} {:>3}", game.away_score), away_style),
        Span::styled(" @ ", base),
        Span::styled(format!("{home:<6} {:>3}", game.home_score), home_style),
        Span::styled("  FINAL", resolve(BracketColor::Dim)),
    ])
}

// ---------------------------------------------------------------------------
// Playoffs
// ---------------------------------------------------------------------------

fn draw_playoffs(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Playoffs ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(league) = app.state.league.as_ref() else {
        draw_no_data(f, inner, app);
        return;
    };
    let picture = &league.picture;

    if !picture.is_determined() {
        let [message, seeds] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);
        f.render_widget(
            Paragraph::new("Playoff picture not yet determined")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            message,
        );
        draw_seeds(f, seeds, picture);
        return;
    }

    let [header, brackets, super_bowl, seeds] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(CONFERENCE_HEIGHT + 2),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let playoffs = &app.state.playoffs;
    let selected = playoffs.selected(picture);
    let selected_id = selected.map(|m| m.id.as_str());
    let detail = selected
        .map(|m| {
            let side = |t: Option<&madden_api::PlayoffTeam>| {
                t.map(|t| format!("({}) {}", t.seed, t.team.display_name))
                    .unwrap_or_else(|| "TBD".to_string())
            };
            format!("  {} vs {}", side(m.home.as_ref()), side(m.away.as_ref()))
        })
        .unwrap_or_default();
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(playoffs.view_round.label(), resolve(BracketColor::Accent)),
            Span::raw(detail),
            Span::styled("   h/l=round  j/k=game", Style::default().fg(Color::DarkGray)),
        ])),
        header,
    );

    let [afc_pane, _gap, nfc_pane] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(brackets);
    for (conference, pane) in [(Conference::Afc, afc_pane), (Conference::Nfc, nfc_pane)] {
        let focused = selected.is_some_and(|m| m.conference == Some(conference));
        let pane_block = default_border(if focused { Color::Yellow } else { Color::DarkGray })
            .title(format!(" {conference} "));
        let pane_inner = pane_block.inner(pane);
        f.render_widget(pane_block, pane);

        let grid = match conference {
            Conference::Afc => BracketGrid::compute(pane_inner.width),
            Conference::Nfc => BracketGrid::compute_mirrored(pane_inner.width),
        };
        f.render_widget(
            ConferenceBracketView {
                picture,
                conference,
                grid: &grid,
                selected: selected_id,
                scroll_offset: 0,
            },
            pane_inner,
        );
    }

    f.render_widget(
        SuperBowlView {
            matchup: picture.matchup("superbowl"),
            selected: selected_id == Some("superbowl"),
        },
        super_bowl,
    );

    draw_seeds(f, seeds, picture);
}

fn draw_seeds(f: &mut Frame, area: Rect, picture: &PlayoffPicture) {
    if area.height < 2 {
        return;
    }
    let [afc, nfc] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    for (conference, column) in [(Conference::Afc, afc), (Conference::Nfc, nfc)] {
        let mut lines = vec![Line::styled(
            format!("{conference} seeds"),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        lines.extend(picture.seeds(conference).iter().map(|t| {
            let s = &t.standing;
            Line::from(format!(
                "{:>2}  {:<20} {:>7}  {}",
                t.seed,
                clip(&t.team.display_name, 20),
                format_record(s.wins, s.losses, s.ties),
                t.division
            ))
        }));
        f.render_widget(Paragraph::new(lines), column);
    }
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

const TEAM_LIST_W: u16 = 46;

fn draw_teams(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Teams ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(league) = app.state.league.as_ref() else {
        draw_no_data(f, inner, app);
        return;
    };

    let [key_legend, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
    f.render_widget(legend("Keys: j/k=team  J/K=scroll roster  R=reload"), key_legend);

    if league.directory.is_empty() {
        f.render_widget(legend("No teams for this league"), body);
        return;
    }

    let [list, roster] =
        Layout::horizontal([Constraint::Length(TEAM_LIST_W), Constraint::Fill(1)]).areas(body);
    draw_team_list(f, list, league, app.state.teams.selected);
    if let Some(team) = league.directory_team(app.state.teams.selected) {
        draw_roster(f, roster, league, team, app.state.teams.roster_offset);
    }
}

/// Conference and division headings with the teams under them.
fn draw_team_list(f: &mut Frame, area: Rect, league: &LeagueData, selected: usize) {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;
    let mut last: Option<(&str, &str)> = None;

    for (idx, team) in league.directory.iter().filter_map(|id| league.snapshot.team(*id)).enumerate() {
        let (conference, division) = (team.conference_label(), team.division_label());
        if last.is_none_or(|(c, _)| c != conference) {
            lines.push(Line::styled(conference.to_string(), heading.fg(Color::White)));
        }
        if last != Some((conference, division)) {
            lines.push(Line::styled(format!(" {division}"), resolve(BracketColor::Primary)));
        }
        last = Some((conference, division));

        let is_selected = idx == selected;
        if is_selected {
            selected_line = lines.len();
        }
        let marker = if is_selected { '>' } else { ' ' };
        let owner = team.owner_name.as_deref().unwrap_or("");
        let ovr = team.ovr_rating.map(|o| o.to_string()).unwrap_or_else(|| "-".to_string());
        let style = if is_selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::styled(
            format!("{marker}  {:<20} {:<14} {:>3}", clip(&team.display_name, 20), clip(owner, 14), ovr),
            style,
        ));
    }

    let visible = (area.height as usize).max(1);
    let offset = selected_line.saturating_sub(visible - 1);
    let lines: Vec<Line> = lines.into_iter().skip(offset).take(visible).collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_roster(f: &mut Frame, area: Rect, league: &LeagueData, team: &Team, offset: u16) {
    let roster = league.snapshot.roster(team.team_id);
    let block = default_border(Color::DarkGray)
        .title(format!(" {} roster ({}) ", team.display_name, roster.len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [header, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
    f.render_widget(
        Paragraph::new(format!(
            "{:<4} {:<NAME_W$} {:>3} {:<9} {:>3} {:>8} {:>8} {:>3}",
            "Pos", "Player", "OVR", "Dev", "Age", "Salary", "Cap hit", "Yrs"
        ))
        .style(Style::default().add_modifier(Modifier::BOLD)),
        header,
    );

    if roster.is_empty() {
        f.render_widget(legend("No players on this roster"), body);
        return;
    }

    let lines: Vec<Line> = roster
        .iter()
        .skip(offset as usize)
        .map(|p| {
            let dev_style = match p.dev_trait {
                DevTrait::XFactor => resolve(BracketColor::Accent),
                DevTrait::Superstar | DevTrait::Star => resolve(BracketColor::Primary),
                DevTrait::Normal => Style::default().fg(Color::Gray),
            };
            Line::from(vec![
                Span::raw(format!(
                    "{:<4} {:<NAME_W$} {:>3} ",
                    clip(&p.position, 4),
                    clip(&p.full_name(), NAME_W),
                    p.overall
                )),
                Span::styled(format!("{:<9}", p.dev_trait.label()), dev_style),
                Span::raw(format!(
                    " {:>3} {:>8} {:>8} {:>3}",
                    p.age,
                    format_money(p.contract_salary),
                    format_money(p.cap_hit),
                    p.contract_years_left
                )),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), body);
}

// ---------------------------------------------------------------------------
// Help, logs, spinner
// ---------------------------------------------------------------------------

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(Color::White).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = [
        "Global",
        "  1-5        switch tab",
        "  R          reload league data",
        "  f          toggle full screen",
        "  \"          toggle log pane",
        "  q, ctrl-c  quit",
        "  Esc        leave help",
        "",
        "Standings:  j/k scroll   c cycle conference",
        "Stats:      h/l category   j/k move   s sort column   p position   t team",
        "            / search by name (Enter/Esc to finish)   x clear filters",
        "Schedule:   h/l week   j/k move",
        "Playoffs:   h/l round   j/k matchup",
        "Teams:      j/k team   J/K scroll roster",
    ];
    f.render_widget(
        Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>()),
        inner,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logger = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray));
    f.render_widget(logger, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(2), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
