//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;

use super::entities::{Club, Entity, League, Player, Record, ResultSet};
use super::error::FetchFailure;
use super::list_view::ListView;
use super::search_session::{ApplyOutcome, ResponsePolicy, SearchCompletion, SearchSession};
use super::types::{EntityKind, Route, Screen, UiState};

/// Everything the view needs for one frame
#[derive(Clone, Debug)]
pub struct AppSnapshot {
    pub ui: UiState,
    pub players: ListView<Player>,
    pub leagues: ListView<League>,
    pub clubs: ListView<Club>,
    pub search: SearchSession,
}

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    pub players: Arc<Mutex<ListView<Player>>>,
    pub leagues: Arc<Mutex<ListView<League>>>,
    pub clubs: Arc<Mutex<ListView<Club>>>,
    pub search: Arc<Mutex<SearchSession>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(start: Screen, policy: ResponsePolicy) -> Self {
        Self {
            ui_state: Arc::new(Mutex::new(UiState::new(start))),
            players: Arc::new(Mutex::new(ListView::new())),
            leagues: Arc::new(Mutex::new(ListView::new())),
            clubs: Arc::new(Mutex::new(ListView::new())),
            search: Arc::new(Mutex::new(SearchSession::new(policy))),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            ui: self.ui_state.lock().await.clone(),
            players: self.players.lock().await.clone(),
            leagues: self.leagues.lock().await.clone(),
            clubs: self.clubs.lock().await.clone(),
            search: self.search.lock().await.clone(),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Screens & navigation
    // ========================================================================

    pub async fn current_screen(&self) -> Screen {
        self.ui_state.lock().await.screen
    }

    pub async fn set_screen(&self, screen: Screen) {
        let mut state = self.ui_state.lock().await;
        state.screen = screen;
        state.navigation_stack.clear();
    }

    pub async fn push_route(&self, route: Route) {
        self.ui_state.lock().await.navigation_stack.push(route);
    }

    pub async fn navigate_back(&self) -> bool {
        self.ui_state.lock().await.navigation_stack.pop().is_some()
    }

    pub async fn has_route(&self) -> bool {
        !self.ui_state.lock().await.navigation_stack.is_empty()
    }

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn set_status(&self, message: impl Into<String>) {
        self.ui_state.lock().await.status_message = Some(message.into());
    }

    pub async fn toggle_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = !state.show_help_popup;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // List views
    // ========================================================================

    /// Activate the list of `kind`; `true` means its collection must be fetched.
    pub async fn activate_list(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Player => self.players.lock().await.activate(),
            EntityKind::League => self.leagues.lock().await.activate(),
            EntityKind::Club => self.clubs.lock().await.activate(),
        }
    }

    /// Route a collection fetch outcome to the list view of `kind`.
    pub async fn finish_list_load(&self, kind: EntityKind, outcome: Result<ResultSet, FetchFailure>) {
        match kind {
            EntityKind::Player => finish(&mut *self.players.lock().await, outcome),
            EntityKind::League => finish(&mut *self.leagues.lock().await, outcome),
            EntityKind::Club => finish(&mut *self.clubs.lock().await, outcome),
        }
    }

    pub async fn list_push_char(&self, kind: EntityKind, c: char) {
        match kind {
            EntityKind::Player => self.players.lock().await.push_char(c),
            EntityKind::League => self.leagues.lock().await.push_char(c),
            EntityKind::Club => self.clubs.lock().await.push_char(c),
        }
    }

    pub async fn list_pop_char(&self, kind: EntityKind) {
        match kind {
            EntityKind::Player => self.players.lock().await.pop_char(),
            EntityKind::League => self.leagues.lock().await.pop_char(),
            EntityKind::Club => self.clubs.lock().await.pop_char(),
        }
    }

    pub async fn list_clear_query(&self, kind: EntityKind) {
        match kind {
            EntityKind::Player => self.players.lock().await.set_query(""),
            EntityKind::League => self.leagues.lock().await.set_query(""),
            EntityKind::Club => self.clubs.lock().await.set_query(""),
        }
    }

    pub async fn list_move(&self, kind: EntityKind, down: bool) {
        match (kind, down) {
            (EntityKind::Player, true) => self.players.lock().await.select_next(),
            (EntityKind::Player, false) => self.players.lock().await.select_prev(),
            (EntityKind::League, true) => self.leagues.lock().await.select_next(),
            (EntityKind::League, false) => self.leagues.lock().await.select_prev(),
            (EntityKind::Club, true) => self.clubs.lock().await.select_next(),
            (EntityKind::Club, false) => self.clubs.lock().await.select_prev(),
        }
    }

    /// Activate the selected row of the list of `kind`
    pub async fn list_activate(&self, kind: EntityKind) -> Option<Record> {
        match kind {
            EntityKind::Player => self.players.lock().await.activate_selected().map(Entity::into_record),
            EntityKind::League => self.leagues.lock().await.activate_selected().map(Entity::into_record),
            EntityKind::Club => self.clubs.lock().await.activate_selected().map(Entity::into_record),
        }
    }

    pub async fn list_open_detail(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Player => self.players.lock().await.open_detail(),
            EntityKind::League => self.leagues.lock().await.open_detail(),
            EntityKind::Club => self.clubs.lock().await.open_detail(),
        }
    }

    pub async fn list_detail_open(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Player => self.players.lock().await.detail_open(),
            EntityKind::League => self.leagues.lock().await.detail_open(),
            EntityKind::Club => self.clubs.lock().await.detail_open(),
        }
    }

    pub async fn list_close_detail(&self, kind: EntityKind) {
        match kind {
            EntityKind::Player => self.players.lock().await.close_detail(),
            EntityKind::League => self.leagues.lock().await.close_detail(),
            EntityKind::Club => self.clubs.lock().await.close_detail(),
        }
    }

    // ========================================================================
    // Search session
    // ========================================================================

    pub async fn apply_search(&self, completion: SearchCompletion) -> ApplyOutcome {
        self.search.lock().await.apply(completion)
    }

    pub async fn is_search_open(&self) -> bool {
        self.search.lock().await.is_open()
    }
}

fn finish<R>(view: &mut ListView<R>, outcome: Result<ResultSet, FetchFailure>)
where
    R: Entity + super::matcher::Searchable,
{
    let outcome = outcome.and_then(|set| {
        R::from_set(set).map_err(|other| {
            FetchFailure::Decode(format!("expected {} collection, got {}", R::KIND, other.kind()))
        })
    });
    view.finish_load(outcome);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_loads_are_routed_by_kind() {
        let model = AppModel::new(Screen::Leagues, ResponsePolicy::default());
        assert!(model.activate_list(EntityKind::League).await);
        assert!(!model.activate_list(EntityKind::League).await);
        model
            .finish_list_load(EntityKind::League, Ok(ResultSet::Leagues(vec![League::default()])))
            .await;
        let snapshot = model.snapshot().await;
        assert_eq!(snapshot.leagues.collection().len(), 1);
        assert!(snapshot.players.collection().is_empty());
    }

    #[tokio::test]
    async fn mismatched_collection_kind_is_a_failure() {
        let model = AppModel::new(Screen::Players, ResponsePolicy::default());
        model.activate_list(EntityKind::Player).await;
        model
            .finish_list_load(EntityKind::Player, Ok(ResultSet::Clubs(vec![Club::default()])))
            .await;
        let players = model.players.lock().await;
        assert!(players.collection().is_empty());
        assert!(matches!(players.failure(), Some(FetchFailure::Decode(_))));
    }

    #[tokio::test]
    async fn screen_change_clears_routes() {
        let model = AppModel::new(Screen::Leagues, ResponsePolicy::default());
        model.push_route(Route::LeagueDetail(League::default())).await;
        assert!(model.has_route().await);
        model.set_screen(Screen::Players).await;
        assert!(!model.has_route().await);
        assert_eq!(model.current_screen().await, Screen::Players);
    }
}
