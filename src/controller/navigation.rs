//! Screen switching, collection loading and row activation

use tokio::task::JoinHandle;

use crate::model::{EntityKind, Record, Route, Screen};
use super::AppController;

impl AppController {
    /// Show `screen`, loading its collection on first visit.
    pub async fn show_screen(&self, screen: Screen) -> Option<JoinHandle<()>> {
        tracing::debug!(screen = screen.title(), "Switching screen");
        self.model.set_screen(screen).await;
        match screen.list_kind() {
            Some(kind) => self.activate_list(kind).await,
            None => None,
        }
    }

    pub async fn cycle_screen(&self, forward: bool) -> Option<JoinHandle<()>> {
        let current = self.model.current_screen().await;
        let next = if forward { current.next() } else { current.prev() };
        self.show_screen(next).await
    }

    /// Fetch the collection of `kind` if this is its first activation.
    /// The returned handle resolves once the list view has been updated.
    pub async fn activate_list(&self, kind: EntityKind) -> Option<JoinHandle<()>> {
        if !self.model.activate_list(kind).await {
            return None;
        }

        let provider = self.provider.clone();
        let controller = self.clone();
        Some(tokio::spawn(async move {
            let outcome = provider.fetch_all(kind).await;
            let model = &controller.model;
            match &outcome {
                Ok(set) => {
                    model
                        .set_status(format!("Loaded {} {}s", set.len(), kind.label().to_lowercase()))
                        .await;
                }
                Err(e) => {
                    let message = Self::format_error(&format!("Could not load {}s", kind.label().to_lowercase()), e);
                    model.set_error(message).await;
                }
            }
            model.finish_list_load(kind, outcome).await;
        }))
    }

    /// Row activation: leagues navigate to their detail route, players and
    /// clubs open a detail overlay.
    pub async fn activate_row(&self, kind: EntityKind) {
        let Some(record) = self.model.list_activate(kind).await else {
            return;
        };
        tracing::debug!(kind = %record.kind(), id = %record.id(), "Row activated");
        match record {
            Record::League(league) => {
                self.model.push_route(Route::LeagueDetail(league)).await;
            }
            Record::Player(_) | Record::Club(_) => {
                self.model.list_open_detail(kind).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::controller::AppController;
    use crate::controller::testing::{RecordingAddHook, ScriptedProvider};
    use crate::model::{
        AppModel, EntityKind, FetchFailure, League, LoadState, Player, ResponsePolicy, ResultSet,
        Route, Screen,
    };

    fn controller(provider: Arc<ScriptedProvider>) -> AppController {
        AppController::new(
            Arc::new(AppModel::new(Screen::Admin, ResponsePolicy::default())),
            provider,
            Arc::new(RecordingAddHook::default()),
        )
    }

    #[tokio::test]
    async fn collection_is_fetched_once_per_session() {
        let provider = Arc::new(ScriptedProvider::default());
        let controller = controller(provider.clone());

        let reply = provider.pending_collection();
        let handle = controller.show_screen(Screen::Players).await.unwrap();
        assert_eq!(controller.model.players.lock().await.load_state(), LoadState::Loading);

        reply
            .send(Ok(ResultSet::Players(vec![Player::default()])))
            .unwrap();
        handle.await.unwrap();

        assert!(controller.show_screen(Screen::Admin).await.is_none());
        assert!(controller.show_screen(Screen::Players).await.is_none());
        assert_eq!(*provider.collection_calls.lock().unwrap(), vec![EntityKind::Player]);
        assert_eq!(controller.model.players.lock().await.collection().len(), 1);
    }

    #[tokio::test]
    async fn failed_load_leaves_empty_loaded_list_and_reports() {
        let provider = Arc::new(ScriptedProvider::default());
        let controller = controller(provider.clone());

        let reply = provider.pending_collection();
        let handle = controller.activate_list(EntityKind::Club).await.unwrap();
        reply
            .send(Err(FetchFailure::Transport("connection refused".to_string())))
            .unwrap();
        handle.await.unwrap();

        let clubs = controller.model.clubs.lock().await;
        assert_eq!(clubs.load_state(), LoadState::Loaded);
        assert!(clubs.collection().is_empty());
        assert!(clubs.failure().is_some());
        drop(clubs);
        assert!(controller.model.has_error().await);
    }

    #[tokio::test]
    async fn league_activation_pushes_detail_route() {
        let provider = Arc::new(ScriptedProvider::default());
        let controller = controller(provider.clone());

        let reply = provider.pending_collection();
        let handle = controller.show_screen(Screen::Leagues).await.unwrap();
        let league = League {
            name: Some("Ligue 1".to_string()),
            ..League::default()
        };
        reply.send(Ok(ResultSet::Leagues(vec![league.clone()]))).unwrap();
        handle.await.unwrap();

        controller.activate_row(EntityKind::League).await;
        let ui = controller.model.ui_state.lock().await.clone();
        assert!(matches!(ui.current_route(), Some(Route::LeagueDetail(l)) if *l == league));
        assert!(!controller.model.leagues.lock().await.detail_open());
    }

    #[tokio::test]
    async fn player_activation_opens_overlay() {
        let provider = Arc::new(ScriptedProvider::default());
        let controller = controller(provider.clone());

        let reply = provider.pending_collection();
        let handle = controller.activate_list(EntityKind::Player).await.unwrap();
        reply
            .send(Ok(ResultSet::Players(vec![Player::default()])))
            .unwrap();
        handle.await.unwrap();

        controller.activate_row(EntityKind::Player).await;
        assert!(controller.model.players.lock().await.detail_open());
        assert!(!controller.model.has_route().await);
    }
}
