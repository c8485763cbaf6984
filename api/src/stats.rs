//! Season stat aggregation.
//!
//! Per-game entries arrive as one typed list per category. They are grouped by
//! roster id, summed field by field, and derived rates are computed once from
//! the totals.

use crate::{LeagueId, Player, Team};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// ---------------------------------------------------------------------------
// Categories and fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatCategory {
    #[default]
    Passing,
    Rushing,
    Receiving,
    Defense,
    Kicking,
    Punting,
}

impl StatCategory {
    pub const ALL: [StatCategory; 6] = [
        StatCategory::Passing,
        StatCategory::Rushing,
        StatCategory::Receiving,
        StatCategory::Defense,
        StatCategory::Kicking,
        StatCategory::Punting,
    ];

    /// Collection key used by the league export.
    pub fn wire_key(&self) -> &'static str {
        match self {
            StatCategory::Passing => "MADDEN_PASSING_STAT",
            StatCategory::Rushing => "MADDEN_RUSHING_STAT",
            StatCategory::Receiving => "MADDEN_RECEIVING_STAT",
            StatCategory::Defense => "MADDEN_DEFENSIVE_STAT",
            StatCategory::Kicking => "MADDEN_KICKING_STAT",
            StatCategory::Punting => "MADDEN_PUNTING_STAT",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StatCategory::Passing => "Passing",
            StatCategory::Rushing => "Rushing",
            StatCategory::Receiving => "Receiving",
            StatCategory::Defense => "Defensive",
            StatCategory::Kicking => "Kicking",
            StatCategory::Punting => "Punting",
        }
    }

    /// Table columns, in display order.
    pub fn columns(&self) -> &'static [StatField] {
        use StatField::*;
        match self {
            StatCategory::Passing => &[PassComp, PassAtt, PassYds, PassTds, PassInts, PasserRating],
            StatCategory::Rushing => &[RushAtt, RushYds, RushTds, RushFum, RushYdsPerAtt],
            StatCategory::Receiving => &[RecCatches, RecYds, RecTds, RecDrops, RecYdsPerCatch],
            StatCategory::Defense => &[
                DefTotalTackles,
                DefSacks,
                DefInts,
                DefFumRec,
                DefForcedFum,
                DefTds,
                DefDeflections,
            ],
            StatCategory::Kicking => &[FgMade, FgAtt, FgLongest, XpMade, XpAtt, KickPts],
            StatCategory::Punting => &[
                PuntAtt,
                PuntYds,
                PuntYdsPerAtt,
                PuntNetYdsPerAtt,
                PuntsIn20,
                PuntTbs,
            ],
        }
    }

    pub fn default_sort(&self) -> StatField {
        match self {
            StatCategory::Passing => StatField::PassYds,
            StatCategory::Rushing => StatField::RushYds,
            StatCategory::Receiving => StatField::RecYds,
            StatCategory::Defense => StatField::DefTotalTackles,
            StatCategory::Kicking => StatField::KickPts,
            StatCategory::Punting => StatField::PuntYds,
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    PassComp,
    PassAtt,
    PassYds,
    PassTds,
    PassInts,
    PassSacks,
    PasserRating,
    RushAtt,
    RushYds,
    RushTds,
    RushFum,
    RushYdsPerAtt,
    RecCatches,
    RecYds,
    RecTds,
    RecDrops,
    RecYdsPerCatch,
    DefTotalTackles,
    DefSacks,
    DefInts,
    DefFumRec,
    DefForcedFum,
    DefTds,
    DefDeflections,
    FgMade,
    FgAtt,
    Fg50PlusMade,
    Fg50PlusAtt,
    FgLongest,
    XpMade,
    XpAtt,
    KickPts,
    PuntAtt,
    PuntYds,
    PuntNetYds,
    PuntYdsPerAtt,
    PuntNetYdsPerAtt,
    PuntsIn20,
    PuntTbs,
    PuntsBlocked,
}

impl StatField {
    pub fn header(&self) -> &'static str {
        use StatField::*;
        match self {
            PassComp => "Comp",
            PassAtt | RushAtt | PuntAtt => "Att",
            PassYds | RushYds | RecYds | PuntYds => "Yds",
            PassTds | RushTds | RecTds | DefTds => "TD",
            PassInts => "INT",
            PassSacks => "Sck",
            PasserRating => "RTG",
            RushFum => "Fum",
            RushYdsPerAtt | RecYdsPerCatch | PuntYdsPerAtt => "Avg",
            RecCatches => "Rec",
            RecDrops => "Drops",
            DefTotalTackles => "Tkl",
            DefSacks => "Sck",
            DefInts => "Int",
            DefFumRec => "FR",
            DefForcedFum => "FF",
            DefDeflections => "PD",
            FgMade => "FGM",
            FgAtt => "FGA",
            Fg50PlusMade => "50+M",
            Fg50PlusAtt => "50+A",
            FgLongest => "Lng",
            XpMade => "XPM",
            XpAtt => "XPA",
            KickPts => "Pts",
            PuntNetYds => "Net",
            PuntNetYdsPerAtt => "Net Avg",
            PuntsIn20 => "In 20",
            PuntTbs => "TB",
            PuntsBlocked => "Blk",
        }
    }

    /// Rates computed from totals rather than summed.
    pub fn is_rate(&self) -> bool {
        matches!(
            self,
            StatField::PasserRating
                | StatField::RushYdsPerAtt
                | StatField::RecYdsPerCatch
                | StatField::PuntYdsPerAtt
                | StatField::PuntNetYdsPerAtt
        )
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Identity of one recorded stat line: one player, one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub roster_id: u32,
    pub schedule_id: u32,
    pub week_index: u8,
    pub season_index: u16,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatEntry<S> {
    pub key: EntryKey,
    pub stats: S,
}

/// Numbers for one category. The same struct holds a single game's entry and
/// a player's season totals; derived fields are only filled on totals.
pub trait CategoryStats: Clone + Default + fmt::Debug {
    const CATEGORY: StatCategory;

    /// Fold one entry's counting fields into running totals.
    fn accumulate(&mut self, entry: &Self);

    /// Compute derived fields from the summed totals.
    fn finalize(&mut self);

    fn value(&self, field: StatField) -> Option<f64>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassingStats {
    pub pass_comp: Option<u32>,
    pub pass_att: Option<u32>,
    pub pass_yds: Option<i32>,
    pub pass_tds: Option<u32>,
    pub pass_ints: Option<u32>,
    pub pass_sacks: Option<u32>,
    pub passer_rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RushingStats {
    pub rush_att: Option<u32>,
    pub rush_yds: Option<i32>,
    pub rush_tds: Option<u32>,
    pub rush_fum: Option<u32>,
    pub rush_yds_per_att: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceivingStats {
    pub rec_catches: Option<u32>,
    pub rec_yds: Option<i32>,
    pub rec_tds: Option<u32>,
    pub rec_drops: Option<u32>,
    pub rec_yds_per_catch: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefenseStats {
    pub def_total_tackles: Option<u32>,
    pub def_sacks: Option<f64>, // half sacks exist
    pub def_ints: Option<u32>,
    pub def_fum_rec: Option<u32>,
    pub def_forced_fum: Option<u32>,
    pub def_tds: Option<u32>,
    pub def_deflections: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KickingStats {
    pub fg_made: Option<u32>,
    pub fg_att: Option<u32>,
    pub fg_50_plus_made: Option<u32>,
    pub fg_50_plus_att: Option<u32>,
    pub fg_longest: Option<u32>,
    pub xp_made: Option<u32>,
    pub xp_att: Option<u32>,
    pub kick_pts: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PuntingStats {
    pub punt_att: Option<u32>,
    pub punt_yds: Option<i32>,
    pub punt_net_yds: Option<i32>,
    pub punts_in_20: Option<u32>,
    pub punt_tbs: Option<u32>,
    pub punts_blocked: Option<u32>,
    pub punt_yds_per_att: Option<f64>,
    pub punt_net_yds_per_att: Option<f64>,
}

fn add<T: Copy + std::ops::Add<Output = T>>(total: &mut Option<T>, value: Option<T>) {
    if let Some(v) = value {
        *total = Some(match *total {
            Some(t) => t + v,
            None => v,
        });
    }
}

fn keep_max(total: &mut Option<u32>, value: Option<u32>) {
    if let Some(v) = value {
        *total = Some(total.map_or(v, |t| t.max(v)));
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// `num / den`, or `None` when either side was never recorded or `den` is 0.
fn per(num: Option<i32>, den: Option<u32>) -> Option<f64> {
    let num = num?;
    let den = den.filter(|d| *d > 0)?;
    Some(round1(f64::from(num) / f64::from(den)))
}

fn as_f64<T: Into<f64>>(v: Option<T>) -> Option<f64> {
    v.map(Into::into)
}

/// NFL passer rating. Each component is clamped to [0, 2.375].
pub fn passer_rating(comp: u32, att: u32, yds: i32, tds: u32, ints: u32) -> Option<f64> {
    if att == 0 {
        return None;
    }
    let att = f64::from(att);
    let clamp = |x: f64| x.clamp(0.0, 2.375);
    let a = clamp((f64::from(comp) / att - 0.3) * 5.0);
    let b = clamp((f64::from(yds) / att - 3.0) * 0.25);
    let c = clamp(f64::from(tds) / att * 20.0);
    let d = clamp(2.375 - f64::from(ints) / att * 25.0);
    Some(round1((a + b + c + d) / 6.0 * 100.0))
}

impl CategoryStats for PassingStats {
    const CATEGORY: StatCategory = StatCategory::Passing;

    fn accumulate(&mut self, e: &Self) {
        add(&mut self.pass_comp, e.pass_comp);
        add(&mut self.pass_att, e.pass_att);
        add(&mut self.pass_yds, e.pass_yds);
        add(&mut self.pass_tds, e.pass_tds);
        add(&mut self.pass_ints, e.pass_ints);
        add(&mut self.pass_sacks, e.pass_sacks);
    }

    fn finalize(&mut self) {
        self.passer_rating = self.pass_att.and_then(|att| {
            passer_rating(
                self.pass_comp.unwrap_or(0),
                att,
                self.pass_yds.unwrap_or(0),
                self.pass_tds.unwrap_or(0),
                self.pass_ints.unwrap_or(0),
            )
        });
    }

    fn value(&self, field: StatField) -> Option<f64> {
        match field {
            StatField::PassComp => as_f64(self.pass_comp),
            StatField::PassAtt => as_f64(self.pass_att),
            StatField::PassYds => as_f64(self.pass_yds),
            StatField::PassTds => as_f64(self.pass_tds),
            StatField::PassInts => as_f64(self.pass_ints),
            StatField::PassSacks => as_f64(self.pass_sacks),
            StatField::PasserRating => self.passer_rating,
            _ => None,
        }
    }
}

impl CategoryStats for RushingStats {
    const CATEGORY: StatCategory = StatCategory::Rushing;

    fn accumulate(&mut self, e: &Self) {
        add(&mut self.rush_att, e.rush_att);
        add(&mut self.rush_yds, e.rush_yds);
        add(&mut self.rush_tds, e.rush_tds);
        add(&mut self.rush_fum, e.rush_fum);
    }

    fn finalize(&mut self) {
        self.rush_yds_per_att = per(self.rush_yds, self.rush_att);
    }

    fn value(&self, field: StatField) -> Option<f64> {
        match field {
            StatField::RushAtt => as_f64(self.rush_att),
            StatField::RushYds => as_f64(self.rush_yds),
            StatField::RushTds => as_f64(self.rush_tds),
            StatField::RushFum => as_f64(self.rush_fum),
            StatField::RushYdsPerAtt => self.rush_yds_per_att,
            _ => None,
        }
    }
}

impl CategoryStats for ReceivingStats {
    const CATEGORY: StatCategory = StatCategory::Receiving;

    fn accumulate(&mut self, e: &Self) {
        add(&mut self.rec_catches, e.rec_catches);
        add(&mut self.rec_yds, e.rec_yds);
        add(&mut self.rec_tds, e.rec_tds);
        add(&mut self.rec_drops, e.rec_drops);
    }

    fn finalize(&mut self) {
        self.rec_yds_per_catch = per(self.rec_yds, self.rec_catches);
    }

    fn value(&self, field: StatField) -> Option<f64> {
        match field {
            StatField::RecCatches => as_f64(self.rec_catches),
            StatField::RecYds => as_f64(self.rec_yds),
            StatField::RecTds => as_f64(self.rec_tds),
            StatField::RecDrops => as_f64(self.rec_drops),
            StatField::RecYdsPerCatch => self.rec_yds_per_catch,
            _ => None,
        }
    }
}

impl CategoryStats for DefenseStats {
    const CATEGORY: StatCategory = StatCategory::Defense;

    fn accumulate(&mut self, e: &Self) {
        add(&mut self.def_total_tackles, e.def_total_tackles);
        add(&mut self.def_sacks, e.def_sacks);
        add(&mut self.def_ints, e.def_ints);
        add(&mut self.def_fum_rec, e.def_fum_rec);
        add(&mut self.def_forced_fum, e.def_forced_fum);
        add(&mut self.def_tds, e.def_tds);
        add(&mut self.def_deflections, e.def_deflections);
    }

    fn finalize(&mut self) {}

    fn value(&self, field: StatField) -> Option<f64> {
        match field {
            StatField::DefTotalTackles => as_f64(self.def_total_tackles),
            StatField::DefSacks => self.def_sacks,
            StatField::DefInts => as_f64(self.def_ints),
            StatField::DefFumRec => as_f64(self.def_fum_rec),
            StatField::DefForcedFum => as_f64(self.def_forced_fum),
            StatField::DefTds => as_f64(self.def_tds),
            StatField::DefDeflections => as_f64(self.def_deflections),
            _ => None,
        }
    }
}

impl CategoryStats for KickingStats {
    const CATEGORY: StatCategory = StatCategory::Kicking;

    fn accumulate(&mut self, e: &Self) {
        add(&mut self.fg_made, e.fg_made);
        add(&mut self.fg_att, e.fg_att);
        add(&mut self.fg_50_plus_made, e.fg_50_plus_made);
        add(&mut self.fg_50_plus_att, e.fg_50_plus_att);
        keep_max(&mut self.fg_longest, e.fg_longest);
        add(&mut self.xp_made, e.xp_made);
        add(&mut self.xp_att, e.xp_att);
        add(&mut self.kick_pts, e.kick_pts);
    }

    fn finalize(&mut self) {}

    fn value(&self, field: StatField) -> Option<f64> {
        match field {
            StatField::FgMade => as_f64(self.fg_made),
            StatField::FgAtt => as_f64(self.fg_att),
            StatField::Fg50PlusMade => as_f64(self.fg_50_plus_made),
            StatField::Fg50PlusAtt => as_f64(self.fg_50_plus_att),
            StatField::FgLongest => as_f64(self.fg_longest),
            StatField::XpMade => as_f64(self.xp_made),
            StatField::XpAtt => as_f64(self.xp_att),
            StatField::KickPts => as_f64(self.kick_pts),
            _ => None,
        }
    }
}

impl CategoryStats for PuntingStats {
    const CATEGORY: StatCategory = StatCategory::Punting;

    fn accumulate(&mut self, e: &Self) {
        add(&mut self.punt_att, e.punt_att);
        add(&mut self.punt_yds, e.punt_yds);
        add(&mut self.punt_net_yds, e.punt_net_yds);
        add(&mut self.punts_in_20, e.punts_in_20);
        add(&mut self.punt_tbs, e.punt_tbs);
        add(&mut self.punts_blocked, e.punts_blocked);
    }

    fn finalize(&mut self) {
        self.punt_yds_per_att = per(self.punt_yds, self.punt_att);
        self.punt_net_yds_per_att = per(self.punt_net_yds, self.punt_att);
    }

    fn value(&self, field: StatField) -> Option<f64> {
        match field {
            StatField::PuntAtt => as_f64(self.punt_att),
            StatField::PuntYds => as_f64(self.punt_yds),
            StatField::PuntNetYds => as_f64(self.punt_net_yds),
            StatField::PuntYdsPerAtt => self.punt_yds_per_att,
            StatField::PuntNetYdsPerAtt => self.punt_net_yds_per_att,
            StatField::PuntsIn20 => as_f64(self.punts_in_20),
            StatField::PuntTbs => as_f64(self.punt_tbs),
            StatField::PuntsBlocked => as_f64(self.punts_blocked),
            _ => None,
        }
    }
}

/// One category's entry list, tagged by category.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryEntries {
    Passing(Vec<StatEntry<PassingStats>>),
    Rushing(Vec<StatEntry<RushingStats>>),
    Receiving(Vec<StatEntry<ReceivingStats>>),
    Defense(Vec<StatEntry<DefenseStats>>),
    Kicking(Vec<StatEntry<KickingStats>>),
    Punting(Vec<StatEntry<PuntingStats>>),
}

impl CategoryEntries {
    pub fn category(&self) -> StatCategory {
        match self {
            CategoryEntries::Passing(_) => StatCategory::Passing,
            CategoryEntries::Rushing(_) => StatCategory::Rushing,
            CategoryEntries::Receiving(_) => StatCategory::Receiving,
            CategoryEntries::Defense(_) => StatCategory::Defense,
            CategoryEntries::Kicking(_) => StatCategory::Kicking,
            CategoryEntries::Punting(_) => StatCategory::Punting,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CategoryEntries::Passing(v) => v.len(),
            CategoryEntries::Rushing(v) => v.len(),
            CategoryEntries::Receiving(v) => v.len(),
            CategoryEntries::Defense(v) => v.len(),
            CategoryEntries::Kicking(v) => v.len(),
            CategoryEntries::Punting(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw per-game entries for every category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    pub passing: Vec<StatEntry<PassingStats>>,
    pub rushing: Vec<StatEntry<RushingStats>>,
    pub receiving: Vec<StatEntry<ReceivingStats>>,
    pub defense: Vec<StatEntry<DefenseStats>>,
    pub kicking: Vec<StatEntry<KickingStats>>,
    pub punting: Vec<StatEntry<PuntingStats>>,
}

impl PlayerStats {
    /// Append a category's entries to the matching list.
    pub fn insert(&mut self, entries: CategoryEntries) {
        match entries {
            CategoryEntries::Passing(v) => self.passing.extend(v),
            CategoryEntries::Rushing(v) => self.rushing.extend(v),
            CategoryEntries::Receiving(v) => self.receiving.extend(v),
            CategoryEntries::Defense(v) => self.defense.extend(v),
            CategoryEntries::Kicking(v) => self.kicking.extend(v),
            CategoryEntries::Punting(v) => self.punting.extend(v),
        }
    }

    pub fn len(&self) -> usize {
        self.passing.len()
            + self.rushing.len()
            + self.receiving.len()
            + self.defense.len()
            + self.kicking.len()
            + self.punting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// One player's season totals for one category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonLine<S> {
    pub roster_id: u32,
    /// Number of entries merged into this line.
    pub games: u32,
    pub stats: S,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonStats {
    pub league: LeagueId,
    pub passing: Vec<SeasonLine<PassingStats>>,
    pub rushing: Vec<SeasonLine<RushingStats>>,
    pub receiving: Vec<SeasonLine<ReceivingStats>>,
    pub defense: Vec<SeasonLine<DefenseStats>>,
    pub kicking: Vec<SeasonLine<KickingStats>>,
    pub punting: Vec<SeasonLine<PuntingStats>>,
}

/// Merge every category's entries into one line per player. Lines come out
/// ordered by roster id. Players without entries in a category get no line.
pub fn aggregate_stats(league: &LeagueId, stats: &PlayerStats) -> SeasonStats {
    debug!("aggregating {} stat entries for league {league}", stats.len());
    SeasonStats {
        league: league.clone(),
        passing: aggregate_category(&stats.passing),
        rushing: aggregate_category(&stats.rushing),
        receiving: aggregate_category(&stats.receiving),
        defense: aggregate_category(&stats.defense),
        kicking: aggregate_category(&stats.kicking),
        punting: aggregate_category(&stats.punting),
    }
}

pub fn aggregate_category<S: CategoryStats>(entries: &[StatEntry<S>]) -> Vec<SeasonLine<S>> {
    let mut by_player: BTreeMap<u32, SeasonLine<S>> = BTreeMap::new();
    for entry in entries {
        let roster_id = entry.key.roster_id;
        let line = by_player.entry(roster_id).or_insert_with(|| SeasonLine {
            roster_id,
            games: 0,
            stats: S::default(),
        });
        line.games += 1;
        line.stats.accumulate(&entry.stats);
    }

    by_player
        .into_values()
        .map(|mut line| {
            line.stats.finalize();
            line
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Player join, filtering and leaderboards
// ---------------------------------------------------------------------------

/// A season line joined to its owning player and (unless a free agent) team.
#[derive(Debug, Clone)]
pub struct AggregatedStatLine<'a, S> {
    pub roster_id: u32,
    pub player: &'a Player,
    pub team: Option<&'a Team>,
    pub line: &'a SeasonLine<S>,
}

impl<S: CategoryStats> AggregatedStatLine<'_, S> {
    pub fn value(&self, field: StatField) -> Option<f64> {
        self.line.stats.value(field)
    }
}

/// Join lines to players and teams. Lines whose roster id matches no player
/// are dropped.
pub fn attach_players<'a, S: CategoryStats>(
    lines: &'a [SeasonLine<S>],
    players: &'a [Player],
    teams: &'a [Team],
) -> Vec<AggregatedStatLine<'a, S>> {
    let player_map: HashMap<u32, &Player> = players.iter().map(|p| (p.roster_id, p)).collect();
    let team_map: HashMap<u32, &Team> = teams.iter().map(|t| (t.team_id, t)).collect();

    lines
        .iter()
        .filter_map(|line| {
            let Some(player) = player_map.get(&line.roster_id).copied() else {
                debug!(
                    "{} line for unknown roster id {} skipped",
                    S::CATEGORY.title(),
                    line.roster_id
                );
                return None;
            };
            Some(AggregatedStatLine {
                roster_id: line.roster_id,
                player,
                team: team_map.get(&player.team_id).copied(),
                line,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatFilter {
    /// Case-insensitive substring of first or last name.
    pub search: String,
    pub position: Option<String>,
    pub team_id: Option<u32>,
}

impl StatFilter {
    pub fn matches(&self, player: &Player) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty()
            && !player.first_name.to_lowercase().contains(&search)
            && !player.last_name.to_lowercase().contains(&search)
        {
            return false;
        }
        if let Some(position) = &self.position
            && &player.position != position
        {
            return false;
        }
        if let Some(team_id) = self.team_id
            && player.team_id != team_id
        {
            return false;
        }
        true
    }
}

/// Filter, then sort descending by `sort`. Missing values sort as 0 and ties
/// keep their input order.
pub fn leaders<'a, S: CategoryStats>(
    lines: &[AggregatedStatLine<'a, S>],
    filter: &StatFilter,
    sort: StatField,
) -> Vec<AggregatedStatLine<'a, S>> {
    let mut rows: Vec<AggregatedStatLine<'a, S>> =
        lines.iter().filter(|l| filter.matches(l.player)).cloned().collect();
    rows.sort_by(|a, b| {
        let av = a.value(sort).unwrap_or(0.0);
        let bv = b.value(sort).unwrap_or(0.0);
        bv.total_cmp(&av)
    });
    rows
}

/// Distinct player positions, sorted, for filter choices.
pub fn positions(players: &[Player]) -> Vec<String> {
    let mut out: Vec<String> = players.iter().map(|p| p.position.clone()).collect();
    out.sort();
    out.dedup();
    out
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    /// An entry cannot be grouped without its roster id.
    MissingRosterId { category: StatCategory, index: usize },
}

impl StatError {
    pub fn category(&self) -> StatCategory {
        match self {
            StatError::MissingRosterId { category, .. } => *category,
        }
    }
}

impl fmt::Display for StatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatError::MissingRosterId { category, index } => write!(
                f,
                "{} entry #{index} has no rosterId",
                category.title()
            ),
        }
    }
}

impl std::error::Error for StatError {}
