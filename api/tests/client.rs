use madden_api::client::{ApiError, LeagueApi};
use madden_api::stats::{StatCategory, StatError};
use madden_api::{GameResult, LeagueId, aggregate_stats, seed_playoffs};
use mockito::{Matcher, Mock, ServerGuard};

const LEAGUE: &str = "3264906";

const ALL_TYPES: [&str; 10] = [
    "players",
    "teams",
    "standings",
    "schedules",
    "passingStats",
    "rushingStats",
    "receivingStats",
    "defensiveStats",
    "kickingStats",
    "puntingStats",
];

async fn mock_type(server: &mut ServerGuard, kind: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", "/api/madden-data")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), kind.into()),
            Matcher::UrlEncoded("leagueId".into(), LEAGUE.into()),
        ]))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn body_for(kind: &str) -> String {
    match kind {
        "players" => r#"[
            {"rosterId":10,"firstName":"Patrick","lastName":"Mahomes","position":"QB","teamId":1,"devTrait":3,"yearsPro":7},
            {"rosterId":11,"firstName":"Travis","lastName":"Kelce","position":"TE","teamId":1}
        ]"#
        .to_string(),
        "teams" => {
            let teams: Vec<String> = (1..=16)
                .map(|id| format!(r#"{{"teamId":{id},"displayName":"Team {id}","teamAbbr":"T{id}"}}"#))
                .collect();
            format!("[{}]", teams.join(","))
        }
        "standings" => {
            let rows: Vec<String> = (1..=16)
                .map(|id| {
                    let conference = if id <= 8 { "AFC" } else { "NFC" };
                    let rank = if id <= 8 { id } else { id - 8 };
                    format!(
                        r#"{{"teamId":{id},"teamName":"Team {id}","wins":{w},"losses":{l},"rank":{rank},"conferenceName":"{conference}","divisonName":"{conference} West"}}"#,
                        w = 17 - rank,
                        l = rank
                    )
                })
                .collect();
            format!("[{}]", rows.join(","))
        }
        "schedules" => r#"[
            {"scheduleId":1,"weekIndex":0,"homeTeamId":1,"awayTeamId":2,"homeScore":27,"awayScore":20,"gameStatus":2},
            {"scheduleId":2,"weekIndex":1,"homeTeamId":3,"awayTeamId":1,"gameStatus":0}
        ]"#
        .to_string(),
        "passingStats" => r#"[
            {"rosterId":10,"scheduleId":1,"weekIndex":0,"passComp":20,"passAtt":30,"passYds":250,"passTDs":2,"passInts":1},
            {"rosterId":10,"scheduleId":2,"weekIndex":1,"passComp":15,"passAtt":25,"passYds":180,"passTDs":1,"passInts":0}
        ]"#
        .to_string(),
        "receivingStats" => {
            r#"[{"rosterId":11,"scheduleId":1,"weekIndex":0,"recCatches":8,"recYds":96,"recTDs":1}]"#.to_string()
        }
        _ => "[]".to_string(),
    }
}

async fn mock_league(server: &mut ServerGuard) -> Vec<Mock> {
    let mut mocks = Vec::new();
    for kind in ALL_TYPES {
        mocks.push(mock_type(server, kind, 200, &body_for(kind)).await);
    }
    mocks
}

#[tokio::test]
async fn fetch_league_loads_every_array() {
    let mut server = mockito::Server::new_async().await;
    let mocks = mock_league(&mut server).await;

    let api = LeagueApi::new(server.url());
    let league = LeagueId::new(LEAGUE);
    let snapshot = api.fetch_league(&league).await.unwrap();

    for mock in mocks {
        mock.assert_async().await;
    }
    assert_eq!(snapshot.league, league);
    assert_eq!(snapshot.players.len(), 2);
    assert_eq!(snapshot.teams.len(), 16);
    assert_eq!(snapshot.standings[0].division_name, "AFC West");
    assert_eq!(snapshot.games[0].status, GameResult::HomeWin);
    assert_eq!(snapshot.stats.passing.len(), 2);
    assert_eq!(snapshot.stats.receiving.len(), 1);
    assert!(snapshot.stats.punting.is_empty());
    assert!(snapshot.fetched_at.is_some());

    let season = aggregate_stats(&snapshot.league, &snapshot.stats);
    assert_eq!(season.passing[0].stats.pass_yds, Some(430));
    assert!(season.passing[0].stats.passer_rating.is_some());

    let picture = seed_playoffs(&snapshot.league, &snapshot.standings, &snapshot.teams);
    assert_eq!(picture.matchups.len(), 13);
}

#[tokio::test]
async fn client_errors_degrade_to_empty_arrays() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for kind in ALL_TYPES {
        let (status, body) = if kind == "kickingStats" {
            (404, r#"{"error":"not found"}"#.to_string())
        } else {
            (200, body_for(kind))
        };
        mocks.push(mock_type(&mut server, kind, status, &body).await);
    }

    let api = LeagueApi::new(format!("{}/", server.url()));
    let snapshot = api.fetch_league(&LeagueId::new(LEAGUE)).await.unwrap();
    assert!(snapshot.stats.kicking.is_empty());
    assert_eq!(snapshot.stats.passing.len(), 2);
}

#[tokio::test]
async fn server_errors_fail_the_load() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for kind in ALL_TYPES {
        let status = if kind == "standings" { 500 } else { 200 };
        mocks.push(mock_type(&mut server, kind, status, &body_for(kind)).await);
    }

    let api = LeagueApi::new(server.url());
    let err = api.fetch_league(&LeagueId::new(LEAGUE)).await.unwrap_err();
    assert!(matches!(err, ApiError::Api(_, ref url) if url.contains("type=standings")));
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for kind in ALL_TYPES {
        let body = if kind == "teams" { "{not json".to_string() } else { body_for(kind) };
        mocks.push(mock_type(&mut server, kind, 200, &body).await);
    }

    let api = LeagueApi::new(server.url());
    let err = api.fetch_league(&LeagueId::new(LEAGUE)).await.unwrap_err();
    assert!(matches!(err, ApiError::Parsing(..)));
}

#[tokio::test]
async fn stat_entry_without_roster_id_empties_only_its_category() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for kind in ALL_TYPES {
        let body = if kind == "rushingStats" {
            r#"[{"rosterId":10,"rushYds":5},{"rushYds":12}]"#.to_string()
        } else {
            body_for(kind)
        };
        mocks.push(mock_type(&mut server, kind, 200, &body).await);
    }

    let api = LeagueApi::new(server.url());
    let snapshot = api.fetch_league(&LeagueId::new(LEAGUE)).await.unwrap();
    assert_eq!(
        snapshot.stat_errors,
        vec![StatError::MissingRosterId { category: StatCategory::Rushing, index: 1 }]
    );
    assert!(snapshot.stats.rushing.is_empty());
    assert_eq!(snapshot.stats.passing.len(), 2);
    assert_eq!(snapshot.standings.len(), 16);

    let picture = seed_playoffs(&snapshot.league, &snapshot.standings, &snapshot.teams);
    assert!(picture.is_determined());
}

#[tokio::test]
async fn non_numeric_stat_values_do_not_fail_the_load() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for kind in ALL_TYPES {
        let body = if kind == "passingStats" {
            r#"[
                {"rosterId":10,"scheduleId":1,"passAtt":30,"passYds":250,"passTDs":2},
                {"rosterId":10,"scheduleId":2,"passAtt":25,"passYds":"n/a","passTDs":1}
            ]"#
            .to_string()
        } else {
            body_for(kind)
        };
        mocks.push(mock_type(&mut server, kind, 200, &body).await);
    }

    let api = LeagueApi::new(server.url());
    let snapshot = api.fetch_league(&LeagueId::new(LEAGUE)).await.unwrap();
    assert!(snapshot.stat_errors.is_empty());
    assert_eq!(snapshot.teams.len(), 16);

    let season = aggregate_stats(&snapshot.league, &snapshot.stats);
    let line = &season.passing[0];
    assert_eq!(line.games, 2);
    assert_eq!(line.stats.pass_att, Some(55));
    assert_eq!(line.stats.pass_yds, Some(250));
    assert_eq!(line.stats.pass_tds, Some(3));
}

#[tokio::test]
async fn league_id_is_encoded_in_the_query() {
    let mut server = mockito::Server::new_async().await;
    let league = "north & south=1";
    let mock = server
        .mock("GET", "/api/madden-data")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "players".into()),
            Matcher::UrlEncoded("leagueId".into(), league.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body_for("players"))
        .create_async()
        .await;
    // The other nine types answer with empty arrays.
    let rest = server
        .mock("GET", "/api/madden-data")
        .match_query(Matcher::UrlEncoded("leagueId".into(), league.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect_at_least(9)
        .create_async()
        .await;

    let api = LeagueApi::new(server.url());
    let snapshot = api.fetch_league(&LeagueId::new(league)).await.unwrap();
    mock.assert_async().await;
    rest.assert_async().await;
    assert_eq!(snapshot.players.len(), 2);
}

#[tokio::test]
async fn snapshot_file_replaces_network() {
    let path = std::env::temp_dir().join(format!("league-hub-snapshot-{}.json", std::process::id()));
    std::fs::write(
        &path,
        format!(
            r#"{{"players":{},"teams":{},"standings":{},"schedules":{},"passingStats":{}}}"#,
            body_for("players"),
            body_for("teams"),
            body_for("standings"),
            body_for("schedules"),
            body_for("passingStats"),
        ),
    )
    .unwrap();

    // Nothing listens here; a network call would fail.
    let api = LeagueApi::new("http://127.0.0.1:9").with_snapshot(Some(path.clone()));
    let snapshot = api.fetch_league(&LeagueId::new(LEAGUE)).await.unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(snapshot.players.len(), 2);
    assert_eq!(snapshot.stats.passing.len(), 2);
    assert!(snapshot.stats.rushing.is_empty());
    assert!(snapshot.fetched_at.is_none());
}

#[tokio::test]
async fn missing_snapshot_file_is_not_found() {
    let api = LeagueApi::new("http://127.0.0.1:9")
        .with_snapshot(Some("/definitely/not/here/league.json".into()));
    let err = api.fetch_league(&LeagueId::new(LEAGUE)).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
