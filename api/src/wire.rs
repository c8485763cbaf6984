//! League export wire types: serde shapes for the `/api/madden-data` arrays
//! and for snapshot files. Every field is optional because the export omits
//! whatever the game did not record. Mapped to domain types in client.rs.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawPlayer {
    pub roster_id: Option<u32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub overall: Option<u8>,
    pub team_id: Option<u32>,
    pub team_abbr: Option<String>,
    pub dev_trait: Option<u8>,
    pub age: Option<u8>,
    pub years_pro: Option<u8>,
    pub contract_salary: Option<u64>,
    pub cap_hit: Option<u64>,
    pub contract_bonus: Option<u64>,
    pub contract_years_left: Option<u8>,
    pub is_free_agent: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    pub team_id: Option<u32>,
    pub team_name: Option<String>,
    pub team_abbr: Option<String>,
    pub display_name: Option<String>,
    pub city_name: Option<String>,
    pub nick_name: Option<String>,
    pub div_name: Option<String>,
    pub conf_name: Option<String>,
    pub owner_name: Option<String>,
    pub ovr_rating: Option<u8>,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawStanding {
    pub team_id: Option<u32>,
    pub team_name: Option<String>,
    pub wins: Option<u16>,
    pub losses: Option<u16>,
    pub ties: Option<u16>,
    pub rank: Option<u16>,
    pub conference_rank: Option<u16>,
    pub division_rank: Option<u16>,
    pub conference_name: Option<String>,
    /// Misspelled in the export.
    #[serde(rename = "divisonName", alias = "divisionName")]
    pub division_name: Option<String>,
    pub win_pct: Option<f64>,
    pub pts_for: Option<i32>,
    pub pts_against: Option<i32>,
    pub net_pts: Option<i32>,
    #[serde(rename = "tODiff")]
    pub to_diff: Option<i32>,
    pub streak: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    pub schedule_id: Option<u32>,
    pub week_index: Option<u8>,
    pub season_index: Option<u16>,
    pub home_team_id: Option<u32>,
    pub away_team_id: Option<u32>,
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub game_status: Option<u8>, // 0 not played, 1 away win, 2 home win, 3 tie
    pub stage_index: Option<u8>,
}

/// One per-game stat entry. The export uses a single flat shape for every
/// category; only the fields of the entry's own category are populated.
///
/// Numbers are read leniently: a value that is not a number (or a numeric
/// string) is logged and dropped so it never contributes to a total.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStatEntry {
    #[serde(deserialize_with = "lenient")]
    pub roster_id: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub schedule_id: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub week_index: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub season_index: Option<u16>,

    #[serde(deserialize_with = "lenient")]
    pub pass_comp: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub pass_att: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub pass_yds: Option<i32>,
    #[serde(rename = "passTDs", deserialize_with = "lenient")]
    pub pass_tds: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub pass_ints: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub pass_sacks: Option<u32>,

    #[serde(deserialize_with = "lenient")]
    pub rush_att: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub rush_yds: Option<i32>,
    #[serde(rename = "rushTDs", deserialize_with = "lenient")]
    pub rush_tds: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub rush_fum: Option<u32>,

    #[serde(deserialize_with = "lenient")]
    pub rec_catches: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub rec_yds: Option<i32>,
    #[serde(rename = "recTDs", deserialize_with = "lenient")]
    pub rec_tds: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub rec_drops: Option<u32>,

    #[serde(deserialize_with = "lenient")]
    pub def_total_tackles: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub def_sacks: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub def_ints: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub def_fum_rec: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub def_forced_fum: Option<u32>,
    #[serde(rename = "defTDs", deserialize_with = "lenient")]
    pub def_tds: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub def_deflections: Option<u32>,

    #[serde(rename = "fGMade", deserialize_with = "lenient")]
    pub fg_made: Option<u32>,
    #[serde(rename = "fGAtt", deserialize_with = "lenient")]
    pub fg_att: Option<u32>,
    #[serde(rename = "fG50PlusMade", deserialize_with = "lenient")]
    pub fg_50_plus_made: Option<u32>,
    #[serde(rename = "fG50PlusAtt", deserialize_with = "lenient")]
    pub fg_50_plus_att: Option<u32>,
    #[serde(rename = "fGLongest", deserialize_with = "lenient")]
    pub fg_longest: Option<u32>,
    #[serde(rename = "xPMade", deserialize_with = "lenient")]
    pub xp_made: Option<u32>,
    #[serde(rename = "xPAtt", deserialize_with = "lenient")]
    pub xp_att: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub kick_pts: Option<u32>,

    #[serde(deserialize_with = "lenient")]
    pub punt_att: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub punt_yds: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub punt_net_yds: Option<i32>,
    #[serde(rename = "puntsIn20", deserialize_with = "lenient")]
    pub punts_in_20: Option<u32>,
    #[serde(rename = "puntTBs", deserialize_with = "lenient")]
    pub punt_tbs: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub punts_blocked: Option<u32>,
}

/// Offline snapshot: the same arrays the route serves, in one document.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSnapshot {
    pub league_id: Option<String>,
    pub players: Vec<RawPlayer>,
    pub teams: Vec<RawTeam>,
    pub standings: Vec<RawStanding>,
    pub schedules: Vec<RawGame>,
    pub passing_stats: Vec<RawStatEntry>,
    pub rushing_stats: Vec<RawStatEntry>,
    pub receiving_stats: Vec<RawStatEntry>,
    pub defensive_stats: Vec<RawStatEntry>,
    pub kicking_stats: Vec<RawStatEntry>,
    pub punting_stats: Vec<RawStatEntry>,
}

/// Accept a number, a numeric string or null; anything else becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    if let Ok(n) = T::deserialize(&value) {
        return Ok(Some(n));
    }
    if let Value::String(text) = &value
        && let Ok(n) = serde_json::from_str::<T>(text.trim())
    {
        return Ok(Some(n));
    }
    warn!("ignoring non-numeric stat value {value}");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_entry_reads_export_casing() {
        let raw: RawStatEntry = serde_json::from_str(
            r#"{"rosterId":7,"scheduleId":55,"weekIndex":3,"seasonIndex":1,
                "passTDs":2,"fGLongest":51,"xPMade":3,"puntTBs":1,"puntsIn20":2,"defSacks":1.5}"#,
        )
        .unwrap();
        assert_eq!(raw.roster_id, Some(7));
        assert_eq!(raw.pass_tds, Some(2));
        assert_eq!(raw.fg_longest, Some(51));
        assert_eq!(raw.xp_made, Some(3));
        assert_eq!(raw.punt_tbs, Some(1));
        assert_eq!(raw.punts_in_20, Some(2));
        assert_eq!(raw.def_sacks, Some(1.5));
        assert_eq!(raw.rush_yds, None);
    }

    #[test]
    fn standing_reads_misspelled_division() {
        let raw: RawStanding = serde_json::from_str(
            r#"{"teamId":4,"conferenceName":"AFC","divisonName":"AFC North","tODiff":-3}"#,
        )
        .unwrap();
        assert_eq!(raw.division_name.as_deref(), Some("AFC North"));
        assert_eq!(raw.to_diff, Some(-3));
    }

    #[test]
    fn bad_stat_numbers_are_dropped_not_fatal() {
        let raw: RawSnapshot = serde_json::from_str(
            r#"{"standings":[{"teamId":1,"rank":1}],
                "passingStats":[
                    {"rosterId":7,"passAtt":30,"passYds":250},
                    {"rosterId":7,"passAtt":"25","passYds":"n/a","passTDs":null,"passInts":[1]}
                ]}"#,
        )
        .unwrap();
        assert_eq!(raw.standings.len(), 1);
        let second = &raw.passing_stats[1];
        assert_eq!(second.roster_id, Some(7));
        assert_eq!(second.pass_att, Some(25));
        assert_eq!(second.pass_yds, None);
        assert_eq!(second.pass_tds, None);
        assert_eq!(second.pass_ints, None);
    }

    #[test]
    fn negative_counts_do_not_fit_unsigned_fields() {
        let raw: RawStatEntry =
            serde_json::from_str(r#"{"rosterId":3,"rushAtt":-2,"rushYds":-4}"#).unwrap();
        assert_eq!(raw.rush_att, None);
        assert_eq!(raw.rush_yds, Some(-4));
    }

    #[test]
    fn snapshot_arrays_default_to_empty() {
        let raw: RawSnapshot = serde_json::from_str(r#"{"teams":[{"teamId":1}]}"#).unwrap();
        assert_eq!(raw.teams.len(), 1);
        assert!(raw.players.is_empty());
        assert!(raw.punting_stats.is_empty());
    }
}
