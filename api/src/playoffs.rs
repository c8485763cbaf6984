//! Playoff seeding and bracket progression.
//!
//! Seven teams per conference qualify by standings rank. The bracket has
//! three wild-card games per conference (seed 1 has a bye), a reseeded
//! divisional round, the conference championships and the Super Bowl.

use crate::{Game, LeagueId, Standing, Team};
use log::{debug, warn};
use std::fmt;

pub const SEEDS_PER_CONFERENCE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Conference {
    Afc,
    Nfc,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::Afc, Conference::Nfc];

    /// Case-insensitive match on the exported conference name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "afc" => Some(Conference::Afc),
            "nfc" => Some(Conference::Nfc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Conference::Afc => "AFC",
            Conference::Nfc => "NFC",
        }
    }

    /// Prefix of this conference's matchup ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Conference::Afc => "afc",
            Conference::Nfc => "nfc",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered from earliest to latest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayoffRound {
    #[default]
    WildCard,
    Divisional,
    ConferenceChampionship,
    SuperBowl,
}

impl PlayoffRound {
    pub const ALL: [PlayoffRound; 4] = [
        PlayoffRound::WildCard,
        PlayoffRound::Divisional,
        PlayoffRound::ConferenceChampionship,
        PlayoffRound::SuperBowl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayoffRound::WildCard => "Wild Card",
            PlayoffRound::Divisional => "Divisional",
            PlayoffRound::ConferenceChampionship => "Conference Championship",
            PlayoffRound::SuperBowl => "Super Bowl",
        }
    }

    /// 0-based schedule week the round is played in. Week 21 is the
    /// off week before the Super Bowl.
    pub fn week_index(&self) -> u8 {
        match self {
            PlayoffRound::WildCard => 18,
            PlayoffRound::Divisional => 19,
            PlayoffRound::ConferenceChampionship => 20,
            PlayoffRound::SuperBowl => 22,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            PlayoffRound::WildCard => Some(PlayoffRound::Divisional),
            PlayoffRound::Divisional => Some(PlayoffRound::ConferenceChampionship),
            PlayoffRound::ConferenceChampionship => Some(PlayoffRound::SuperBowl),
            PlayoffRound::SuperBowl => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            PlayoffRound::WildCard => None,
            PlayoffRound::Divisional => Some(PlayoffRound::WildCard),
            PlayoffRound::ConferenceChampionship => Some(PlayoffRound::Divisional),
            PlayoffRound::SuperBowl => Some(PlayoffRound::ConferenceChampionship),
        }
    }
}

/// A qualified team with its seed. Holds copies so the picture outlives the
/// arrays it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayoffTeam {
    pub team: Team,
    pub standing: Standing,
    pub seed: u8, // 1..=7
    pub conference: Conference,
    pub division: String,
}

impl PlayoffTeam {
    pub fn team_id(&self) -> u32 {
        self.team.team_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BracketMatchup {
    pub id: String, // "afc-wc-1", "superbowl", ...
    pub round: PlayoffRound,
    pub conference: Option<Conference>, // None for the Super Bowl
    pub home: Option<PlayoffTeam>,      // None = TBD
    pub away: Option<PlayoffTeam>,
    pub winner: Option<u32>, // team id
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub is_played: bool,
}

impl BracketMatchup {
    fn new(
        id: String,
        round: PlayoffRound,
        conference: Option<Conference>,
        home: Option<PlayoffTeam>,
        away: Option<PlayoffTeam>,
    ) -> Self {
        Self {
            id,
            round,
            conference,
            home,
            away,
            winner: None,
            home_score: None,
            away_score: None,
            is_played: false,
        }
    }

    pub fn winner_team(&self) -> Option<&PlayoffTeam> {
        let winner = self.winner?;
        [self.home.as_ref(), self.away.as_ref()]
            .into_iter()
            .flatten()
            .find(|t| t.team_id() == winner)
    }

    fn teams(&self) -> Option<(&PlayoffTeam, &PlayoffTeam)> {
        Some((self.home.as_ref()?, self.away.as_ref()?))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayoffPicture {
    pub league: LeagueId,
    pub afc_seeds: Vec<PlayoffTeam>,
    pub nfc_seeds: Vec<PlayoffTeam>,
    /// Empty unless both conferences have a full set of seeds.
    pub matchups: Vec<BracketMatchup>,
}

impl PlayoffPicture {
    pub fn seeds(&self, conference: Conference) -> &[PlayoffTeam] {
        match conference {
            Conference::Afc => &self.afc_seeds,
            Conference::Nfc => &self.nfc_seeds,
        }
    }

    pub fn matchup(&self, id: &str) -> Option<&BracketMatchup> {
        self.matchups.iter().find(|m| m.id == id)
    }

    fn matchup_mut(&mut self, id: &str) -> Option<&mut BracketMatchup> {
        self.matchups.iter_mut().find(|m| m.id == id)
    }

    pub fn round(&self, round: PlayoffRound) -> impl Iterator<Item = &BracketMatchup> {
        self.matchups.iter().filter(move |m| m.round == round)
    }

    pub fn is_determined(&self) -> bool {
        !self.matchups.is_empty()
    }

    pub fn champion(&self) -> Option<&PlayoffTeam> {
        self.matchup("superbowl")?.winner_team()
    }
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Seed both conferences from the current standings and lay out the bracket.
/// Pure: no result is ever recorded here.
pub fn seed_playoffs(league: &LeagueId, standings: &[Standing], teams: &[Team]) -> PlayoffPicture {
    let afc_seeds = seed_conference(league, Conference::Afc, standings, teams);
    let nfc_seeds = seed_conference(league, Conference::Nfc, standings, teams);

    let matchups = if afc_seeds.len() >= SEEDS_PER_CONFERENCE
        && nfc_seeds.len() >= SEEDS_PER_CONFERENCE
    {
        let mut matchups = Vec::with_capacity(13);
        for (conference, seeds) in [(Conference::Afc, &afc_seeds), (Conference::Nfc, &nfc_seeds)] {
            matchups.extend(wild_card_round(conference, seeds));
        }
        for (conference, seeds) in [(Conference::Afc, &afc_seeds), (Conference::Nfc, &nfc_seeds)] {
            let slug = conference.slug();
            matchups.push(BracketMatchup::new(
                format!("{slug}-div-1"),
                PlayoffRound::Divisional,
                Some(conference),
                by_seed(seeds, 1),
                None,
            ));
            matchups.push(BracketMatchup::new(
                format!("{slug}-div-2"),
                PlayoffRound::Divisional,
                Some(conference),
                None,
                None,
            ));
        }
        for conference in Conference::ALL {
            matchups.push(BracketMatchup::new(
                format!("{}-championship", conference.slug()),
                PlayoffRound::ConferenceChampionship,
                Some(conference),
                None,
                None,
            ));
        }
        matchups.push(BracketMatchup::new(
            "superbowl".to_string(),
            PlayoffRound::SuperBowl,
            None,
            None,
            None,
        ));
        matchups
    } else {
        debug!(
            "league {league}: bracket not determined ({} AFC / {} NFC seeds)",
            afc_seeds.len(),
            nfc_seeds.len()
        );
        Vec::new()
    };

    PlayoffPicture {
        league: league.clone(),
        afc_seeds,
        nfc_seeds,
        matchups,
    }
}

fn seed_conference(
    league: &LeagueId,
    conference: Conference,
    standings: &[Standing],
    teams: &[Team],
) -> Vec<PlayoffTeam> {
    let mut members: Vec<&Standing> = standings
        .iter()
        .filter(|s| Conference::from_name(&s.conference_name) == Some(conference))
        .collect();
    members.sort_by_key(|s| (s.rank, s.team_id));

    members
        .into_iter()
        .take(SEEDS_PER_CONFERENCE)
        .enumerate()
        .filter_map(|(idx, standing)| {
            let Some(team) = teams.iter().find(|t| t.team_id == standing.team_id) else {
                warn!(
                    "league {league}: {conference} seed {} (team {}) has no team record, dropped",
                    idx + 1,
                    standing.team_id
                );
                return None;
            };
            Some(PlayoffTeam {
                team: team.clone(),
                standing: standing.clone(),
                seed: (idx + 1) as u8,
                conference,
                division: standing.division_name.clone(),
            })
        })
        .collect()
}

fn by_seed(seeds: &[PlayoffTeam], seed: u8) -> Option<PlayoffTeam> {
    seeds.iter().find(|t| t.seed == seed).cloned()
}

fn wild_card_round(conference: Conference, seeds: &[PlayoffTeam]) -> Vec<BracketMatchup> {
    [(2, 7), (3, 6), (4, 5)]
        .into_iter()
        .enumerate()
        .map(|(idx, (home, away))| {
            BracketMatchup::new(
                format!("{}-wc-{}", conference.slug(), idx + 1),
                PlayoffRound::WildCard,
                Some(conference),
                by_seed(seeds, home),
                by_seed(seeds, away),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Advancement
// ---------------------------------------------------------------------------

/// Record played postseason games onto the bracket and fill later rounds as
/// their participants become known. Returns a new picture.
pub fn advance_bracket(picture: &PlayoffPicture, games: &[Game]) -> PlayoffPicture {
    let mut next = picture.clone();
    if !next.is_determined() {
        return next;
    }

    record_round(&mut next, PlayoffRound::WildCard, games);
    for conference in Conference::ALL {
        fill_divisional(&mut next, conference);
    }

    record_round(&mut next, PlayoffRound::Divisional, games);
    for conference in Conference::ALL {
        let slug = conference.slug();
        let finalists = winners_of(&next, &[format!("{slug}-div-1"), format!("{slug}-div-2")]);
        if let Some(mut finalists) = finalists {
            finalists.sort_by_key(|t| t.seed);
            let away = finalists.pop();
            let home = finalists.pop();
            set_teams(&mut next, &format!("{slug}-championship"), home, away);
        }
    }

    record_round(&mut next, PlayoffRound::ConferenceChampionship, games);
    let champions = winners_of(
        &next,
        &["afc-championship".to_string(), "nfc-championship".to_string()],
    );
    if let Some(mut champions) = champions
        && let (Some(nfc), Some(afc)) = (champions.pop(), champions.pop())
    {
        // Equal seeds: the AFC champion hosts.
        let (home, away) = if nfc.seed < afc.seed { (nfc, afc) } else { (afc, nfc) };
        set_teams(&mut next, "superbowl", Some(home), Some(away));
    }

    record_round(&mut next, PlayoffRound::SuperBowl, games);
    next
}

/// Winners of every listed matchup, or `None` while any is undecided.
fn winners_of(picture: &PlayoffPicture, ids: &[String]) -> Option<Vec<PlayoffTeam>> {
    ids.iter()
        .map(|id| picture.matchup(id).and_then(|m| m.winner_team()).cloned())
        .collect()
}

/// Seed 1 hosts the lowest surviving seed; the other two winners meet with
/// the better seed at home. Waits for all three wild-card results.
fn fill_divisional(picture: &mut PlayoffPicture, conference: Conference) {
    let slug = conference.slug();
    let ids: Vec<String> = (1..=3).map(|n| format!("{slug}-wc-{n}")).collect();
    let Some(mut winners) = winners_of(picture, &ids) else {
        return;
    };
    winners.sort_by_key(|t| t.seed);

    let top = by_seed(picture.seeds(conference), 1);
    let lowest = winners.pop();
    set_teams(picture, &format!("{slug}-div-1"), top, lowest);

    let away = winners.pop();
    let home = winners.pop();
    set_teams(picture, &format!("{slug}-div-2"), home, away);
}

fn set_teams(
    picture: &mut PlayoffPicture,
    id: &str,
    home: Option<PlayoffTeam>,
    away: Option<PlayoffTeam>,
) {
    if let Some(matchup) = picture.matchup_mut(id)
        && !matchup.is_played
    {
        matchup.home = home;
        matchup.away = away;
    }
}

fn record_round(picture: &mut PlayoffPicture, round: PlayoffRound, games: &[Game]) {
    let week = round.week_index();
    for matchup in picture.matchups.iter_mut().filter(|m| m.round == round && !m.is_played) {
        let Some((home, away)) = matchup.teams() else {
            continue;
        };
        let (home_id, away_id) = (home.team_id(), away.team_id());

        let Some(game) = games.iter().find(|g| {
            g.week_index == week
                && g.is_played()
                && ((g.home_team_id == home_id && g.away_team_id == away_id)
                    || (g.home_team_id == away_id && g.away_team_id == home_id))
        }) else {
            continue;
        };

        let (home_score, away_score) = if game.home_team_id == home_id {
            (game.home_score, game.away_score)
        } else {
            (game.away_score, game.home_score)
        };

        matchup.home_score = Some(home_score);
        matchup.away_score = Some(away_score);
        matchup.is_played = true;
        matchup.winner = match home_score.cmp(&away_score) {
            std::cmp::Ordering::Greater => Some(home_id),
            std::cmp::Ordering::Less => Some(away_id),
            std::cmp::Ordering::Equal => None,
        };
        debug!(
            "{} recorded: {home_id} {home_score} - {away_score} {away_id}",
            matchup.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameResult;

    fn standing(team_id: u32, rank: u16, conference: &str) -> Standing {
        Standing {
            team_id,
            team_name: format!("Team {team_id}"),
            rank,
            conference_name: conference.to_string(),
            division_name: format!("{conference} North"),
            ..Default::default()
        }
    }

    fn team(team_id: u32) -> Team {
        Team {
            team_id,
            display_name: format!("Team {team_id}"),
            abbr: format!("T{team_id}"),
            ..Default::default()
        }
    }

    /// AFC teams 1..=8 and NFC teams 11..=18, ranked by id within each.
    fn league_fixture() -> (Vec<Standing>, Vec<Team>) {
        let mut standings = Vec::new();
        let mut teams = Vec::new();
        for n in 1..=8u32 {
            standings.push(standing(n, n as u16, "AFC"));
            standings.push(standing(10 + n, n as u16, "NFC"));
            teams.push(team(n));
            teams.push(team(10 + n));
        }
        (standings, teams)
    }

    fn league() -> LeagueId {
        LeagueId::new("3264906")
    }

    fn seeds_of(picture: &PlayoffPicture, id: &str) -> (Option<u8>, Option<u8>) {
        let m = picture.matchup(id).unwrap();
        (m.home.as_ref().map(|t| t.seed), m.away.as_ref().map(|t| t.seed))
    }

    fn played(week: u8, home: u32, away: u32, home_score: u16, away_score: u16) -> Game {
        Game {
            schedule_id: u32::from(week) * 100 + home,
            week_index: week,
            home_team_id: home,
            away_team_id: away,
            home_score,
            away_score,
            status: if home_score > away_score {
                GameResult::HomeWin
            } else {
                GameResult::AwayWin
            },
            stage_index: 1,
            ..Default::default()
        }
    }

    #[test]
    fn unranked_team_is_seeded_after_ranked_ones() {
        let (mut standings, teams) = league_fixture();
        standings[0].rank = Standing::UNRANKED;
        let picture = seed_playoffs(&league(), &standings, &teams);

        let afc: Vec<u32> = picture.afc_seeds.iter().map(|t| t.team.team_id).collect();
        assert_eq!(afc, vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(picture.afc_seeds[0].seed, 1);
    }

    #[test]
    fn full_league_produces_thirteen_matchups() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);

        assert_eq!(picture.afc_seeds.len(), 7);
        assert_eq!(picture.nfc_seeds.len(), 7);
        assert_eq!(picture.matchups.len(), 13);
        assert!(picture.is_determined());

        let ids: Vec<&str> = picture.matchups.iter().map(|m| m.id.as_str()).collect();
        for id in [
            "afc-wc-1",
            "afc-wc-2",
            "afc-wc-3",
            "nfc-wc-1",
            "nfc-wc-2",
            "nfc-wc-3",
            "afc-div-1",
            "afc-div-2",
            "nfc-div-1",
            "nfc-div-2",
            "afc-championship",
            "nfc-championship",
            "superbowl",
        ] {
            assert!(ids.contains(&id), "missing {id}");
        }

        assert_eq!(seeds_of(&picture, "afc-wc-1"), (Some(2), Some(7)));
        assert_eq!(seeds_of(&picture, "afc-wc-2"), (Some(3), Some(6)));
        assert_eq!(seeds_of(&picture, "nfc-wc-3"), (Some(4), Some(5)));
        assert_eq!(seeds_of(&picture, "nfc-div-1"), (Some(1), None));
        assert_eq!(seeds_of(&picture, "afc-div-2"), (None, None));
        assert_eq!(seeds_of(&picture, "superbowl"), (None, None));
        assert_eq!(picture.round(PlayoffRound::WildCard).count(), 6);

        assert!(picture.matchups.iter().all(|m| !m.is_played && m.winner.is_none()));
    }

    #[test]
    fn top_seed_has_a_bye() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);
        for m in picture.round(PlayoffRound::WildCard) {
            assert_ne!(m.home.as_ref().map(|t| t.seed), Some(1));
            assert_ne!(m.away.as_ref().map(|t| t.seed), Some(1));
        }
    }

    #[test]
    fn eighth_place_team_misses_out() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);
        assert!(picture.afc_seeds.iter().all(|t| t.team_id() != 8));
        assert_eq!(picture.afc_seeds[0].team_id(), 1);
        assert_eq!(picture.nfc_seeds[6].team_id(), 17);
    }

    #[test]
    fn short_conference_leaves_bracket_empty() {
        let (standings, teams) = league_fixture();
        let standings: Vec<Standing> = standings
            .into_iter()
            .filter(|s| !(s.conference_name == "AFC" && s.team_id >= 7))
            .collect();
        let picture = seed_playoffs(&league(), &standings, &teams);
        assert_eq!(picture.afc_seeds.len(), 6);
        assert_eq!(picture.nfc_seeds.len(), 7);
        assert!(picture.matchups.is_empty());
        assert!(!picture.is_determined());
    }

    #[test]
    fn unresolved_team_is_dropped_and_blocks_bracket() {
        let (standings, teams) = league_fixture();
        let teams: Vec<Team> = teams.into_iter().filter(|t| t.team_id != 3).collect();
        let picture = seed_playoffs(&league(), &standings, &teams);

        let seeds: Vec<u8> = picture.afc_seeds.iter().map(|t| t.seed).collect();
        assert_eq!(seeds, vec![1, 2, 4, 5, 6, 7]);
        assert!(picture.matchups.is_empty());
    }

    #[test]
    fn conference_match_ignores_case() {
        let (mut standings, teams) = league_fixture();
        for s in standings.iter_mut() {
            s.conference_name = s.conference_name.to_lowercase();
        }
        let picture = seed_playoffs(&league(), &standings, &teams);
        assert_eq!(picture.afc_seeds.len(), 7);
        assert_eq!(picture.matchups.len(), 13);
    }

    #[test]
    fn seeding_is_deterministic_and_order_independent() {
        let (standings, teams) = league_fixture();
        let first = seed_playoffs(&league(), &standings, &teams);
        let second = seed_playoffs(&league(), &standings, &teams);
        assert_eq!(first, second);

        let mut reversed = standings.clone();
        reversed.reverse();
        assert_eq!(seed_playoffs(&league(), &reversed, &teams), first);
    }

    #[test]
    fn seed_carries_team_and_division() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);
        let top = &picture.nfc_seeds[0];
        assert_eq!(top.seed, 1);
        assert_eq!(top.conference, Conference::Nfc);
        assert_eq!(top.team.abbr, "T11");
        assert_eq!(top.division, "NFC North");
    }

    #[test]
    fn divisional_waits_for_all_wild_card_results() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);
        let games = vec![played(18, 2, 7, 24, 10), played(18, 3, 6, 17, 20)];

        let advanced = advance_bracket(&picture, &games);
        let wc1 = advanced.matchup("afc-wc-1").unwrap();
        assert!(wc1.is_played);
        assert_eq!(wc1.winner, Some(2));
        assert_eq!(advanced.matchup("afc-wc-2").unwrap().winner, Some(6));
        assert_eq!(seeds_of(&advanced, "afc-div-1"), (Some(1), None));
        assert_eq!(seeds_of(&advanced, "afc-div-2"), (None, None));

        // Input untouched.
        assert!(picture.matchups.iter().all(|m| !m.is_played));
    }

    #[test]
    fn top_seed_hosts_lowest_survivor() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);
        let games = vec![
            played(18, 2, 7, 24, 10), // 2 wins
            played(18, 3, 6, 17, 20), // 6 upsets 3
            played(18, 4, 5, 13, 16), // 5 upsets 4
        ];

        let advanced = advance_bracket(&picture, &games);
        assert_eq!(seeds_of(&advanced, "afc-div-1"), (Some(1), Some(6)));
        assert_eq!(seeds_of(&advanced, "afc-div-2"), (Some(2), Some(5)));
        assert_eq!(seeds_of(&advanced, "nfc-div-1"), (Some(1), None));
    }

    #[test]
    fn scores_follow_bracket_orientation() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);
        // Listed with the road team as home in the schedule.
        let games = vec![played(18, 7, 2, 31, 28)];

        let advanced = advance_bracket(&picture, &games);
        let wc1 = advanced.matchup("afc-wc-1").unwrap();
        assert_eq!(wc1.home_score, Some(28));
        assert_eq!(wc1.away_score, Some(31));
        assert_eq!(wc1.winner, Some(7));
    }

    #[test]
    fn games_outside_the_round_week_are_ignored() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);
        let games = vec![played(5, 2, 7, 24, 10)];
        let advanced = advance_bracket(&picture, &games);
        assert!(!advanced.matchup("afc-wc-1").unwrap().is_played);
    }

    #[test]
    fn whole_postseason_resolves_in_one_call() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);
        let games = vec![
            // Home teams win every wild-card game.
            played(18, 2, 7, 20, 3),
            played(18, 3, 6, 20, 3),
            played(18, 4, 5, 20, 3),
            played(18, 12, 17, 20, 3),
            played(18, 13, 16, 20, 3),
            played(18, 14, 15, 20, 3),
            // AFC: 4 upsets 1. NFC: chalk.
            played(19, 1, 4, 10, 14),
            played(19, 2, 3, 27, 24),
            played(19, 11, 14, 35, 7),
            played(19, 12, 13, 21, 17),
            played(20, 2, 4, 30, 20),
            played(20, 11, 12, 24, 21),
            played(22, 11, 2, 17, 23),
        ];

        let advanced = advance_bracket(&picture, &games);
        assert_eq!(seeds_of(&advanced, "afc-div-1"), (Some(1), Some(4)));
        assert_eq!(seeds_of(&advanced, "afc-div-2"), (Some(2), Some(3)));
        assert_eq!(seeds_of(&advanced, "afc-championship"), (Some(2), Some(4)));
        assert_eq!(seeds_of(&advanced, "nfc-championship"), (Some(1), Some(2)));

        let superbowl = advanced.matchup("superbowl").unwrap();
        assert_eq!(superbowl.home.as_ref().map(|t| t.team_id()), Some(11));
        assert_eq!(superbowl.away.as_ref().map(|t| t.team_id()), Some(2));
        assert!(superbowl.is_played);
        assert_eq!(advanced.champion().map(|t| t.team_id()), Some(2));

        assert_eq!(advance_bracket(&advanced, &games), advanced);
    }

    #[test]
    fn equal_seeds_put_afc_home_in_super_bowl() {
        let (standings, teams) = league_fixture();
        let picture = seed_playoffs(&league(), &standings, &teams);
        let games = vec![
            played(18, 2, 7, 20, 3),
            played(18, 3, 6, 20, 3),
            played(18, 4, 5, 20, 3),
            played(18, 12, 17, 20, 3),
            played(18, 13, 16, 20, 3),
            played(18, 14, 15, 20, 3),
            played(19, 1, 4, 28, 14),
            played(19, 2, 3, 27, 24),
            played(19, 11, 14, 35, 7),
            played(19, 12, 13, 21, 17),
            played(20, 1, 2, 30, 20),
            played(20, 11, 12, 24, 21),
        ];

        let advanced = advance_bracket(&picture, &games);
        let superbowl = advanced.matchup("superbowl").unwrap();
        assert_eq!(superbowl.home.as_ref().map(|t| t.team_id()), Some(1));
        assert_eq!(superbowl.away.as_ref().map(|t| t.team_id()), Some(11));
        assert!(!superbowl.is_played);
    }

    #[test]
    fn undetermined_picture_is_returned_as_is() {
        let picture = seed_playoffs(&league(), &[], &[]);
        assert!(picture.afc_seeds.is_empty());
        assert_eq!(advance_bracket(&picture, &[played(18, 2, 7, 1, 0)]), picture);
    }

    #[test]
    fn round_metadata() {
        assert_eq!(PlayoffRound::SuperBowl.week_index(), 22);
        assert_eq!(PlayoffRound::WildCard.next(), Some(PlayoffRound::Divisional));
        assert_eq!(PlayoffRound::WildCard.prev(), None);
        assert_eq!(Conference::from_name(" nFc "), Some(Conference::Nfc));
        assert_eq!(Conference::from_name("XFL"), None);
    }
}
