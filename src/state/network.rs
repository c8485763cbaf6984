use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error, info};
use madden_api::LeagueId;
use madden_api::client::{ApiError, LeagueApi};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

pub struct NetworkWorker {
    client: LeagueApi,
    league: LeagueId,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
        client: LeagueApi,
        league: LeagueId,
    ) -> Self {
        Self {
            client,
            league,
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let result = match request {
                NetworkRequest::LoadLeague => self.handle_load_league().await,
                NetworkRequest::RefreshLeague => {
                    debug!("refreshing league {}", self.league);
                    self.handle_load_league().await
                }
            };

            debug!("network request complete");
            self.stop_loading_animation(result.is_ok()).await;

            let response = result.unwrap_or_else(|err| {
                error!("league {}: {err}", self.league);
                NetworkResponse::Error { message: err.to_string() }
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_league(&self) -> Result<NetworkResponse, ApiError> {
        if self.league.as_str().is_empty() && !self.client.uses_snapshot() {
            return Err(ApiError::Other(
                "no league id configured (set LEAGUE_HUB_LEAGUE_ID)".to_string(),
            ));
        }
        debug!("loading league {}", self.league);
        let snapshot = self.client.fetch_league(&self.league).await?;
        info!(
            "league {}: {} players, {} teams, {} games, {} stat entries",
            snapshot.league,
            snapshot.players.len(),
            snapshot.teams.len(),
            snapshot.games.len(),
            snapshot.stats.len()
        );
        Ok(NetworkResponse::LeagueLoaded { snapshot: Box::new(snapshot) })
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_league_without_snapshot_reports_error() {
        let (req_tx, req_rx) = mpsc::channel(4);
        let (resp_tx, mut resp_rx) = mpsc::channel(64);
        let worker = NetworkWorker::new(
            req_rx,
            resp_tx,
            LeagueApi::new("http://127.0.0.1:9"),
            LeagueId::default(),
        );
        tokio::spawn(worker.run());
        req_tx.send(NetworkRequest::LoadLeague).await.unwrap();

        let mut message = None;
        while let Some(response) = resp_rx.recv().await {
            if let NetworkResponse::Error { message: m } = response {
                message = Some(m);
                break;
            }
        }
        assert!(message.unwrap().contains("LEAGUE_HUB_LEAGUE_ID"));
    }
}
