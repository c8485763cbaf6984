use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use madden_api::LeagueSnapshot;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadLeague,
    /// Same fetch as `LoadLeague`, issued by the refresher or a manual reload.
    RefreshLeague,
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    LeagueLoaded { snapshot: Box<LeagueSnapshot> },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
