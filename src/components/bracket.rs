use madden_api::{BracketMatchup, Conference, PlayoffPicture, PlayoffTeam};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::Widget;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketColor {
    Primary,
    Accent,
    Dim,
    Winner,
}

pub fn resolve(color: BracketColor) -> Style {
    match color {
        BracketColor::Primary => Style::default().fg(Color::Rgb(0, 122, 195)),
        BracketColor::Accent => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        BracketColor::Dim => Style::default().fg(Color::Indexed(240)),
        BracketColor::Winner => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Rows per game cell: home line, status line, away line.
pub const GAME_HEIGHT: u16 = 3;

/// Slot heights per depth (d=0 wild card column, d=2 conference title game).
/// SH[0] = GAME_HEIGHT; SH[d] = 2 * SH[d-1] + 1.
const SH: [u16; 3] = [
    GAME_HEIGHT,                    // Wild card:    3
    2 * GAME_HEIGHT + 1,            // Divisional:   7
    2 * (2 * GAME_HEIGHT + 1) + 1,  // Championship: 15
];

/// Rows consumed by one conference bracket.
pub const CONFERENCE_HEIGHT: u16 = SH[2];

/// Width of the connector zone between adjacent round columns.
pub const CONNECTOR_WIDTH: u16 = 3;

const CELL_W_FULL: u16 = 22;

/// Cells per depth: the bye plus three wild card games, two divisional
/// games, one championship.
const CELL_COUNTS: [usize; 3] = [4, 2, 1];

// ---------------------------------------------------------------------------
// GameCell / BracketGrid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct GameCell {
    /// Row of the status line, relative to the top of the conference pane.
    pub center_row: u16,
    pub col: u16,
    pub cell_width: u16,
    pub depth: usize,
    pub game_idx: usize,
}

/// Pre-computed layout for one conference: wild card | divisional | title game.
#[derive(Debug, Clone)]
pub struct BracketGrid {
    /// Depth-major: 4 + 2 + 1 cells.
    pub cells: Vec<GameCell>,
    /// Starting column of each depth.
    pub round_cols: [u16; 3],
    pub cell_width: u16,
    /// Wild card column on the right, title game on the left.
    pub mirrored: bool,
}

impl BracketGrid {
    /// Center rows follow the triangle formula
    /// `center[d][i] = SH[d]/2 + i * (SH[d+1] - SH[d])`:
    ///
    ///   Wild card    (d=0): [1, 5, 9, 13]
    ///   Divisional   (d=1): [3, 11]
    ///   Championship (d=2): [7]
    pub fn compute(pane_width: u16) -> Self {
        Self::compute_inner(pane_width, false)
    }

    pub fn compute_mirrored(pane_width: u16) -> Self {
        Self::compute_inner(pane_width, true)
    }

    fn compute_inner(pane_width: u16, mirrored: bool) -> Self {
        let per_col = pane_width.saturating_sub(CONNECTOR_WIDTH * 2) / 3;
        let cell_width = per_col.clamp(1, CELL_W_FULL);
        let stride = cell_width + CONNECTOR_WIDTH;
        let round_cols = if mirrored {
            [stride * 2, stride, 0]
        } else {
            [0, stride, stride * 2]
        };

        let first_center = [SH[0] / 2, SH[1] / 2, SH[2] / 2];
        let spacing = [SH[1] - SH[0], SH[2] - SH[1], 0];

        let mut cells = Vec::with_capacity(7);
        for depth in 0..3 {
            for i in 0..CELL_COUNTS[depth] {
                cells.push(GameCell {
                    center_row: first_center[depth] + i as u16 * spacing[depth],
                    col: round_cols[depth],
                    cell_width,
                    depth,
                    game_idx: i,
                });
            }
        }

        Self { cells, round_cols, cell_width, mirrored }
    }

    pub fn cells_for_depth(&self, depth: usize) -> &[GameCell] {
        const OFFSETS: [usize; 4] = [0, 4, 6, 7];
        &self.cells[OFFSETS[depth]..OFFSETS[depth + 1]]
    }

    pub fn total_width(&self) -> u16 {
        (self.cell_width + CONNECTOR_WIDTH) * 2 + self.cell_width
    }
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// What one grid cell shows.
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    Empty,
    /// The top seed, idle during wild card weekend.
    Bye(&'a PlayoffTeam),
    Game(&'a BracketMatchup),
}

impl<'a> Slot<'a> {
    fn matchup(self) -> Option<&'a BracketMatchup> {
        match self {
            Slot::Game(m) => Some(m),
            _ => None,
        }
    }
}

/// Slots per depth for one conference, in grid order.
pub fn conference_slots(picture: &PlayoffPicture, conference: Conference) -> [Vec<Slot<'_>>; 3] {
    let slug = conference.slug();
    let game = |id: String| picture.matchup(&id).map_or(Slot::Empty, Slot::Game);

    let bye = picture
        .seeds(conference)
        .iter()
        .find(|t| t.seed == 1)
        .map_or(Slot::Empty, Slot::Bye);
    let mut wild_card = vec![bye];
    wild_card.extend((1..=3).map(|i| game(format!("{slug}-wc-{i}"))));

    [
        wild_card,
        (1..=2).map(|i| game(format!("{slug}-div-{i}"))).collect(),
        vec![game(format!("{slug}-championship"))],
    ]
}

// ---------------------------------------------------------------------------
// ConferenceBracketView widget
// ---------------------------------------------------------------------------

/// One conference, wild card round through the conference championship.
pub struct ConferenceBracketView<'a> {
    pub picture: &'a PlayoffPicture,
    pub conference: Conference,
    pub grid: &'a BracketGrid,
    /// Id of the highlighted matchup, if it lives in this conference.
    pub selected: Option<&'a str>,
    pub scroll_offset: u16,
}

impl Widget for ConferenceBracketView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < GAME_HEIGHT {
            return;
        }

        let slots = conference_slots(self.picture, self.conference);

        for cell in &self.grid.cells {
            let slot = slots[cell.depth].get(cell.game_idx).copied().unwrap_or(Slot::Empty);
            let selected = slot
                .matchup()
                .is_some_and(|m| self.selected == Some(m.id.as_str()));
            draw_game_cell(slot, cell, selected, area, self.scroll_offset, buf);
        }

        for depth in 0..2usize {
            let child_cells = self.grid.cells_for_depth(depth);
            let parent_cells = self.grid.cells_for_depth(depth + 1);
            let conn_x_base = if self.grid.mirrored {
                area.x + self.grid.round_cols[depth].saturating_sub(CONNECTOR_WIDTH)
            } else {
                area.x + self.grid.round_cols[depth] + self.grid.cell_width
            };

            for (j, parent) in parent_cells.iter().enumerate() {
                draw_connector(
                    child_cells[2 * j].center_row,
                    parent.center_row,
                    child_cells[2 * j + 1].center_row,
                    conn_x_base,
                    area,
                    self.scroll_offset,
                    self.grid.mirrored,
                    buf,
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SuperBowlView widget
// ---------------------------------------------------------------------------

/// The title game centered under both conference panes, with the champion
/// once it is decided.
pub struct SuperBowlView<'a> {
    pub matchup: Option<&'a BracketMatchup>,
    pub selected: bool,
}

impl Widget for SuperBowlView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 10 {
            return;
        }

        let accent = resolve(BracketColor::Accent);
        let title = "── SUPER BOWL ──";
        let tx = area.x + area.width.saturating_sub(title.chars().count() as u16) / 2;
        buf.set_string(tx, area.y, title, accent);

        if area.height < 1 + GAME_HEIGHT {
            return;
        }

        let cell_width = area.width.min(CELL_W_FULL);
        let cell = GameCell {
            center_row: 2,
            col: area.width.saturating_sub(cell_width) / 2,
            cell_width,
            depth: 0,
            game_idx: 0,
        };
        let slot = self.matchup.map_or(Slot::Empty, Slot::Game);
        draw_game_cell(slot, &cell, self.selected, area, 0, buf);

        if area.height > 1 + GAME_HEIGHT
            && let Some(champion) = self.matchup.and_then(BracketMatchup::winner_team)
        {
            let line = format!("Champion: {}", team_name(champion));
            let lx = area.x + area.width.saturating_sub(line.chars().count() as u16) / 2;
            buf.set_string(lx, area.y + 1 + GAME_HEIGHT, line, resolve(BracketColor::Winner));
        }
    }
}

// ---------------------------------------------------------------------------
// Shared drawing helpers
// ---------------------------------------------------------------------------

/// Bracket-relative row to absolute screen y; `None` when scrolled off.
fn screen_y(bracket_row: u16, scroll: u16, area: Rect) -> Option<u16> {
    if bracket_row < scroll {
        return None;
    }
    let rel = bracket_row - scroll;
    if rel >= area.height {
        return None;
    }
    Some(area.y + rel)
}

fn draw_game_cell(
    slot: Slot<'_>,
    cell: &GameCell,
    selected: bool,
    area: Rect,
    scroll: u16,
    buf: &mut Buffer,
) {
    let x = area.x + cell.col;
    if x >= area.x + area.width {
        return;
    }
    let avail_w = (area.x + area.width).saturating_sub(x) as usize;

    let base_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let rows = [
        (cell.center_row.saturating_sub(1), 0u8),
        (cell.center_row, 1),
        (cell.center_row.saturating_add(1), 2),
    ];
    for (bracket_row, row_idx) in rows {
        let Some(sy) = screen_y(bracket_row, scroll, area) else {
            continue;
        };

        let content = format_slot_row(slot, row_idx, cell.cell_width as usize);
        let text: String = content.chars().take(avail_w).collect();

        let style = match row_idx {
            1 => match slot {
                Slot::Game(m) if !m.is_played && m.home.is_some() && m.away.is_some() => {
                    resolve(BracketColor::Primary)
                }
                _ => resolve(BracketColor::Dim),
            },
            _ if is_winner_row(slot, row_idx) => resolve(BracketColor::Winner),
            _ => base_style,
        };

        buf.set_string(x, sy, &text, style);
    }
}

fn is_winner_row(slot: Slot<'_>, row_idx: u8) -> bool {
    let Slot::Game(m) = slot else {
        return false;
    };
    let team = if row_idx == 0 { m.home.as_ref() } else { m.away.as_ref() };
    match (team, m.winner) {
        (Some(team), Some(winner)) => team.team_id() == winner,
        _ => false,
    }
}

/// `row_idx`: 0 = home line, 1 = status line, 2 = away line.
fn format_slot_row(slot: Slot<'_>, row_idx: u8, width: usize) -> String {
    match (slot, row_idx) {
        (Slot::Empty, _) => " ".repeat(width),
        (Slot::Bye(team), 0) => format_team_line(Some(team), None, width),
        (Slot::Bye(_), 1) => pad(" BYE".to_string(), width),
        (Slot::Bye(_), _) => " ".repeat(width),
        (Slot::Game(m), 0) => format_team_line(m.home.as_ref(), m.home_score, width),
        (Slot::Game(m), 2) => format_team_line(m.away.as_ref(), m.away_score, width),
        (Slot::Game(m), _) => format_status_line(m, width),
    }
}

fn team_name(team: &PlayoffTeam) -> &str {
    if team.team.abbr.is_empty() {
        &team.team.display_name
    } else {
        &team.team.abbr
    }
}

/// `"[seed] [name] [score] "`, always exactly `width` columns.
fn format_team_line(team: Option<&PlayoffTeam>, score: Option<u16>, width: usize) -> String {
    let seed = match team {
        Some(t) => format!("{:2}", t.seed),
        None => "  ".to_string(),
    };
    let name = team.map_or("TBD", team_name);
    let score_str = match score {
        Some(s) => format!("{s:3}"),
        None => "   ".to_string(),
    };
    let name_w = width.saturating_sub(8);
    let name_trunc: String = name.chars().take(name_w).collect();
    let line = format!("{seed} {name_trunc:<name_w$} {score_str} ");
    pad(line, width)
}

fn format_status_line(matchup: &BracketMatchup, width: usize) -> String {
    let raw = if matchup.is_played {
        " FINAL".to_string()
    } else {
        format!(" {}", matchup.round.label())
    };
    pad(raw, width)
}

fn pad(text: String, width: usize) -> String {
    let padded = format!("{text:<width$}");
    if padded.chars().count() > width {
        padded.chars().take(width).collect()
    } else {
        padded
    }
}

/// Box-drawing connector between one parent and its two children.
///
/// ```text
///  child_top  ──┐
///               │
///  parent     ──├──
///               │
///  child_bot  ──┘
/// ```
#[allow(clippy::too_many_arguments)]
fn draw_connector(
    r_top: u16,
    r_mid: u16,
    r_bot: u16,
    conn_base_x: u16,
    area: Rect,
    scroll: u16,
    mirrored: bool,
    buf: &mut Buffer,
) {
    let style = resolve(BracketColor::Dim);
    let col_a = conn_base_x;
    let col_b = conn_base_x + 1;
    let col_c = conn_base_x + 2;
    let limit_x = area.x + area.width;

    let mut put = |x: u16, row: u16, ch: char| {
        if x < limit_x
            && let Some(sy) = screen_y(row, scroll, area)
        {
            put_char(buf, x, sy, ch, style);
        }
    };

    if mirrored {
        put(col_b, r_top, '┌');
        put(col_c, r_top, '─');
        for row in (r_top + 1)..r_mid {
            put(col_b, row, '│');
        }
        put(col_a, r_mid, '─');
        put(col_b, r_mid, '┤');
        for row in (r_mid + 1)..r_bot {
            put(col_b, row, '│');
        }
        put(col_b, r_bot, '└');
        put(col_c, r_bot, '─');
    } else {
        put(col_a, r_top, '─');
        put(col_b, r_top, '┐');
        for row in (r_top + 1)..r_mid {
            put(col_b, row, '│');
        }
        put(col_a, r_mid, '─');
        put(col_b, r_mid, '├');
        put(col_c, r_mid, '─');
        for row in (r_mid + 1)..r_bot {
            put(col_b, row, '│');
        }
        put(col_a, r_bot, '─');
        put(col_b, r_bot, '┘');
    }
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
