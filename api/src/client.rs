use crate::stats::{
    CategoryEntries, DefenseStats, EntryKey, KickingStats, PassingStats, PlayerStats,
    PuntingStats, ReceivingStats, RushingStats, StatCategory, StatEntry, StatError,
};
use crate::wire::{RawGame, RawPlayer, RawSnapshot, RawStanding, RawStatEntry, RawTeam};
use crate::{DevTrait, Game, GameResult, LeagueId, LeagueSnapshot, Player, Standing, Team};
use chrono::Utc;
use log::{debug, warn};
use reqwest::{Client, Request};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

/// Client for a league data route serving the exported arrays as JSON.
#[derive(Debug, Clone)]
pub struct LeagueApi {
    client: Client,
    base_url: String,
    timeout: Duration,
    snapshot: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Route `type` parameter for a stat category.
pub fn stat_type(category: StatCategory) -> &'static str {
    match category {
        StatCategory::Passing => "passingStats",
        StatCategory::Rushing => "rushingStats",
        StatCategory::Receiving => "receivingStats",
        StatCategory::Defense => "defensiveStats",
        StatCategory::Kicking => "kickingStats",
        StatCategory::Punting => "puntingStats",
    }
}

impl LeagueApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("league-hub/0.1 (terminal league dashboard)")
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
            snapshot: None,
        }
    }

    /// Read league data from a local snapshot file instead of the network.
    pub fn with_snapshot(mut self, path: Option<PathBuf>) -> Self {
        self.snapshot = path;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn uses_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Load every array for one league.
    ///
    /// The snapshot file wins when configured. Otherwise all ten route types
    /// are requested concurrently and the first hard failure aborts the load.
    /// A stat category that cannot be grouped is reported in `stat_errors`
    /// and left empty.
    pub async fn fetch_league(&self, league: &LeagueId) -> ApiResult<LeagueSnapshot> {
        if let Some(path) = &self.snapshot {
            return load_snapshot(path, league).await;
        }

        let (players, teams, standings, games) = tokio::try_join!(
            self.fetch_list::<RawPlayer>("players", league),
            self.fetch_list::<RawTeam>("teams", league),
            self.fetch_list::<RawStanding>("standings", league),
            self.fetch_list::<RawGame>("schedules", league),
        )?;
        let (passing, rushing, receiving, defense, kicking, punting) = tokio::try_join!(
            self.fetch_stats(StatCategory::Passing, league),
            self.fetch_stats(StatCategory::Rushing, league),
            self.fetch_stats(StatCategory::Receiving, league),
            self.fetch_stats(StatCategory::Defense, league),
            self.fetch_stats(StatCategory::Kicking, league),
            self.fetch_stats(StatCategory::Punting, league),
        )?;

        let (stats, stat_errors) = collect_stats([
            (StatCategory::Passing, passing),
            (StatCategory::Rushing, rushing),
            (StatCategory::Receiving, receiving),
            (StatCategory::Defense, defense),
            (StatCategory::Kicking, kicking),
            (StatCategory::Punting, punting),
        ]);

        let snapshot = LeagueSnapshot {
            league: league.clone(),
            players: players.into_iter().map(map_player).collect(),
            teams: teams.into_iter().map(map_team).collect(),
            standings: standings.into_iter().map(map_standing).collect(),
            games: games.into_iter().map(map_game).collect(),
            stats,
            stat_errors,
            fetched_at: Some(Utc::now()),
        };
        debug!(
            "league {league}: {} players, {} teams, {} games, {} stat entries",
            snapshot.players.len(),
            snapshot.teams.len(),
            snapshot.games.len(),
            snapshot.stats.len()
        );
        Ok(snapshot)
    }

    async fn fetch_stats(
        &self,
        category: StatCategory,
        league: &LeagueId,
    ) -> ApiResult<Vec<RawStatEntry>> {
        self.fetch_list(stat_type(category), league).await
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        kind: &str,
        league: &LeagueId,
    ) -> ApiResult<Vec<T>> {
        let endpoint = format!("{}/api/madden-data", self.base_url);
        let request = self
            .client
            .get(&endpoint)
            .query(&[("type", kind), ("leagueId", league.as_str())])
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::Network(e, endpoint))?;
        self.send::<Vec<T>>(request).await
    }

    async fn send<T: Default + DeserializeOwned>(&self, request: Request) -> ApiResult<T> {
        let url = request.url().to_string();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url)),
            Err(e) => {
                if let Some(status) = e.status()
                    && status.is_client_error()
                {
                    warn!("{url} answered {status}, treating as empty");
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url))
                }
            }
        }
    }
}

async fn load_snapshot(path: &Path, league: &LeagueId) -> ApiResult<LeagueSnapshot> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ApiError::NotFound(format!("could not read {}: {e}", path.display())))?;
    let raw: RawSnapshot = serde_json::from_str(&content)
        .map_err(|e| ApiError::Other(format!("invalid snapshot json at {}: {e}", path.display())))?;
    debug!("league {league}: loaded snapshot {}", path.display());
    Ok(map_snapshot(raw, league))
}

/// Map a snapshot document. A league id inside the document takes precedence
/// over the requested one.
pub fn map_snapshot(raw: RawSnapshot, league: &LeagueId) -> LeagueSnapshot {
    let league = raw.league_id.map(LeagueId::new).unwrap_or_else(|| league.clone());
    let (stats, stat_errors) = collect_stats([
        (StatCategory::Passing, raw.passing_stats),
        (StatCategory::Rushing, raw.rushing_stats),
        (StatCategory::Receiving, raw.receiving_stats),
        (StatCategory::Defense, raw.defensive_stats),
        (StatCategory::Kicking, raw.kicking_stats),
        (StatCategory::Punting, raw.punting_stats),
    ]);

    LeagueSnapshot {
        league,
        players: raw.players.into_iter().map(map_player).collect(),
        teams: raw.teams.into_iter().map(map_team).collect(),
        standings: raw.standings.into_iter().map(map_standing).collect(),
        games: raw.schedules.into_iter().map(map_game).collect(),
        stats,
        stat_errors,
        fetched_at: None,
    }
}

/// A failing category stays empty and its error is kept for the caller.
fn collect_stats(
    categories: [(StatCategory, Vec<RawStatEntry>); 6],
) -> (PlayerStats, Vec<StatError>) {
    let mut stats = PlayerStats::default();
    let mut errors = Vec::new();
    for (category, raw) in categories {
        match map_stat_entries(category, raw) {
            Ok(entries) => stats.insert(entries),
            Err(e) => {
                warn!("{e}; {} stats left empty", category.title());
                errors.push(e);
            }
        }
    }
    (stats, errors)
}

/// Division shown for standings rows the export left unlabelled.
pub const UNKNOWN_DIVISION: &str = "Unknown";

// ---------------------------------------------------------------------------
// Mapping: export wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_player(p: RawPlayer) -> Player {
    let team_id = p.team_id.unwrap_or_default();
    Player {
        roster_id: p.roster_id.unwrap_or_default(),
        first_name: p.first_name.unwrap_or_default(),
        last_name: p.last_name.unwrap_or_default(),
        position: p.position.unwrap_or_default(),
        overall: p.overall.unwrap_or_default(),
        team_id,
        team_abbr: p.team_abbr.unwrap_or_default(),
        dev_trait: DevTrait::from_code(p.dev_trait.unwrap_or_default()),
        age: p.age.unwrap_or_default(),
        years_pro: p.years_pro.unwrap_or_default(),
        contract_salary: p.contract_salary.unwrap_or_default(),
        cap_hit: p.cap_hit.unwrap_or_default(),
        contract_bonus: p.contract_bonus.unwrap_or_default(),
        contract_years_left: p.contract_years_left.unwrap_or_default(),
        is_free_agent: p.is_free_agent.unwrap_or(team_id == 0),
    }
}

fn map_team(t: RawTeam) -> Team {
    let nick_name = t.nick_name.unwrap_or_default();
    Team {
        team_id: t.team_id.unwrap_or_default(),
        display_name: t
            .display_name
            .or(t.team_name)
            .unwrap_or_else(|| nick_name.clone()),
        city_name: t.city_name.unwrap_or_default(),
        nick_name,
        abbr: t.team_abbr.unwrap_or_default(),
        div_name: t.div_name.unwrap_or_default(),
        conf_name: t.conf_name.unwrap_or_default(),
        owner_name: t.owner_name.filter(|o| !o.trim().is_empty()),
        ovr_rating: t.ovr_rating,
    }
}

fn map_standing(s: RawStanding) -> Standing {
    let pts_for = s.pts_for.unwrap_or_default();
    let pts_against = s.pts_against.unwrap_or_default();
    Standing {
        team_id: s.team_id.unwrap_or_default(),
        team_name: s.team_name.unwrap_or_default(),
        wins: s.wins.unwrap_or_default(),
        losses: s.losses.unwrap_or_default(),
        ties: s.ties.unwrap_or_default(),
        rank: s.rank.unwrap_or(Standing::UNRANKED),
        conference_rank: s.conference_rank.unwrap_or_default(),
        division_rank: s.division_rank.unwrap_or_default(),
        conference_name: s.conference_name.unwrap_or_default(),
        division_name: s
            .division_name
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_DIVISION.to_string()),
        win_pct: s.win_pct,
        pts_for,
        pts_against,
        net_pts: s.net_pts.unwrap_or(pts_for - pts_against),
        to_diff: s.to_diff.unwrap_or_default(),
        streak: s.streak,
    }
}

fn map_game(g: RawGame) -> Game {
    Game {
        schedule_id: g.schedule_id.unwrap_or_default(),
        week_index: g.week_index.unwrap_or_default(),
        season_index: g.season_index.unwrap_or_default(),
        home_team_id: g.home_team_id.unwrap_or_default(),
        away_team_id: g.away_team_id.unwrap_or_default(),
        home_score: g.home_score.unwrap_or_default(),
        away_score: g.away_score.unwrap_or_default(),
        status: GameResult::from_code(g.game_status.unwrap_or_default()),
        stage_index: g.stage_index.unwrap_or_default(),
    }
}

/// Convert one category's raw entries. An entry without a roster id cannot be
/// attributed to anyone and fails the whole category.
pub fn map_stat_entries(
    category: StatCategory,
    raw: Vec<RawStatEntry>,
) -> Result<CategoryEntries, StatError> {
    let keyed = raw
        .into_iter()
        .enumerate()
        .map(|(index, e)| -> Result<(EntryKey, RawStatEntry), StatError> {
            let roster_id = e
                .roster_id
                .ok_or(StatError::MissingRosterId { category, index })?;
            let key = EntryKey {
                roster_id,
                schedule_id: e.schedule_id.unwrap_or_default(),
                week_index: e.week_index.unwrap_or_default(),
                season_index: e.season_index.unwrap_or_default(),
            };
            Ok((key, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    fn entries<S>(
        keyed: Vec<(EntryKey, RawStatEntry)>,
        f: impl Fn(RawStatEntry) -> S,
    ) -> Vec<StatEntry<S>> {
        keyed
            .into_iter()
            .map(|(key, e)| StatEntry { key, stats: f(e) })
            .collect()
    }

    Ok(match category {
        StatCategory::Passing => CategoryEntries::Passing(entries(keyed, |e| PassingStats {
            pass_comp: e.pass_comp,
            pass_att: e.pass_att,
            pass_yds: e.pass_yds,
            pass_tds: e.pass_tds,
            pass_ints: e.pass_ints,
            pass_sacks: e.pass_sacks,
            passer_rating: None,
        })),
        StatCategory::Rushing => CategoryEntries::Rushing(entries(keyed, |e| RushingStats {
            rush_att: e.rush_att,
            rush_yds: e.rush_yds,
            rush_tds: e.rush_tds,
            rush_fum: e.rush_fum,
            rush_yds_per_att: None,
        })),
        StatCategory::Receiving => {
            CategoryEntries::Receiving(entries(keyed, |e| ReceivingStats {
                rec_catches: e.rec_catches,
                rec_yds: e.rec_yds,
                rec_tds: e.rec_tds,
                rec_drops: e.rec_drops,
                rec_yds_per_catch: None,
            }))
        }
        StatCategory::Defense => CategoryEntries::Defense(entries(keyed, |e| DefenseStats {
            def_total_tackles: e.def_total_tackles,
            def_sacks: e.def_sacks,
            def_ints: e.def_ints,
            def_fum_rec: e.def_fum_rec,
            def_forced_fum: e.def_forced_fum,
            def_tds: e.def_tds,
            def_deflections: e.def_deflections,
        })),
        StatCategory::Kicking => CategoryEntries::Kicking(entries(keyed, |e| KickingStats {
            fg_made: e.fg_made,
            fg_att: e.fg_att,
            fg_50_plus_made: e.fg_50_plus_made,
            fg_50_plus_att: e.fg_50_plus_att,
            fg_longest: e.fg_longest,
            xp_made: e.xp_made,
            xp_att: e.xp_att,
            kick_pts: e.kick_pts,
        })),
        StatCategory::Punting => CategoryEntries::Punting(entries(keyed, |e| PuntingStats {
            punt_att: e.punt_att,
            punt_yds: e.punt_yds,
            punt_net_yds: e.punt_net_yds,
            punts_in_20: e.punts_in_20,
            punt_tbs: e.punt_tbs,
            punts_blocked: e.punts_blocked,
            punt_yds_per_att: None,
            punt_net_yds_per_att: None,
        })),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_types_match_route() {
        assert_eq!(stat_type(StatCategory::Defense), "defensiveStats");
        assert_eq!(stat_type(StatCategory::Punting), "puntingStats");
    }

    #[test]
    fn missing_roster_id_is_reported_with_position() {
        let raw = vec![
            RawStatEntry { roster_id: Some(1), ..Default::default() },
            RawStatEntry { rush_yds: Some(12), ..Default::default() },
        ];
        let err = map_stat_entries(StatCategory::Rushing, raw).unwrap_err();
        assert_eq!(
            err,
            StatError::MissingRosterId { category: StatCategory::Rushing, index: 1 }
        );
    }

    #[test]
    fn stat_entries_keep_only_their_category() {
        let raw = vec![RawStatEntry {
            roster_id: Some(21),
            schedule_id: Some(900),
            week_index: Some(4),
            pass_yds: Some(250),
            rush_yds: Some(30),
            ..Default::default()
        }];
        let CategoryEntries::Passing(entries) = map_stat_entries(StatCategory::Passing, raw).unwrap()
        else {
            panic!("expected passing entries");
        };
        assert_eq!(entries[0].key.roster_id, 21);
        assert_eq!(entries[0].key.week_index, 4);
        assert_eq!(entries[0].stats.pass_yds, Some(250));
        assert_eq!(entries[0].stats.passer_rating, None);
    }

    #[test]
    fn player_without_team_is_free_agent() {
        let p = map_player(RawPlayer {
            roster_id: Some(5),
            dev_trait: Some(2),
            ..Default::default()
        });
        assert!(p.is_free_agent);
        assert_eq!(p.dev_trait, DevTrait::Superstar);
    }

    #[test]
    fn unranked_standing_sorts_last_in_unknown_division() {
        let s = map_standing(RawStanding { team_id: Some(8), ..Default::default() });
        assert_eq!(s.rank, Standing::UNRANKED);
        assert!(!s.is_ranked());
        assert_eq!(s.division_name, UNKNOWN_DIVISION);

        let blank = map_standing(RawStanding {
            rank: Some(3),
            division_name: Some("  ".into()),
            ..Default::default()
        });
        assert_eq!(blank.rank, 3);
        assert_eq!(blank.division_name, UNKNOWN_DIVISION);
    }

    #[test]
    fn unattributable_stats_only_empty_their_category() {
        let raw: RawSnapshot = serde_json::from_str(
            r#"{"standings":[{"teamId":1,"rank":1},{"teamId":2,"rank":2}],
                "teams":[{"teamId":1},{"teamId":2}],
                "schedules":[{"scheduleId":1}],
                "kickingStats":[{"fGMade":1}],
                "passingStats":[{"rosterId":4,"passYds":210},{"rosterId":4,"passYds":"n/a","passAtt":12}]}"#,
        )
        .unwrap();
        let snapshot = map_snapshot(raw, &LeagueId::new("1"));

        assert_eq!(snapshot.standings.len(), 2);
        assert_eq!(snapshot.teams.len(), 2);
        assert_eq!(snapshot.games.len(), 1);
        assert!(snapshot.stats.kicking.is_empty());
        assert_eq!(
            snapshot.stat_errors,
            vec![StatError::MissingRosterId { category: StatCategory::Kicking, index: 0 }]
        );

        let season = crate::aggregate_stats(&snapshot.league, &snapshot.stats);
        assert_eq!(season.passing[0].games, 2);
        assert_eq!(season.passing[0].stats.pass_yds, Some(210));
        assert_eq!(season.passing[0].stats.pass_att, Some(12));
    }

    #[test]
    fn standing_net_points_fallback() {
        let s = map_standing(RawStanding {
            pts_for: Some(300),
            pts_against: Some(280),
            ..Default::default()
        });
        assert_eq!(s.net_pts, 20);
        assert_eq!(s.win_pct, None);
    }

    #[test]
    fn team_display_name_fallbacks() {
        let t = map_team(RawTeam {
            team_id: Some(3),
            nick_name: Some("Ravens".into()),
            owner_name: Some(" ".into()),
            ..Default::default()
        });
        assert_eq!(t.display_name, "Ravens");
        assert_eq!(t.owner_name, None);
    }

    #[test]
    fn snapshot_league_id_overrides_request() {
        let raw = RawSnapshot {
            league_id: Some("777".into()),
            schedules: vec![RawGame { schedule_id: Some(1), game_status: Some(2), ..Default::default() }],
            ..Default::default()
        };
        let snapshot = map_snapshot(raw, &LeagueId::new("1"));
        assert_eq!(snapshot.league.as_str(), "777");
        assert_eq!(snapshot.games[0].status, GameResult::HomeWin);
        assert!(snapshot.fetched_at.is_none());
    }
}
