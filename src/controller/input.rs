//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{EntityKind, Screen};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        let model = &self.model;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C / Ctrl+Q quit from anywhere
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Handle error message first (blocks all other interactions)
        if model.has_error().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_error().await;
            }
            return Ok(());
        }

        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                model.toggle_help_popup().await;
            }
            return Ok(());
        }

        if model.is_search_open().await {
            self.handle_search_key(key, ctrl).await;
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => {
                self.cycle_screen(true).await;
                return Ok(());
            }
            KeyCode::BackTab => {
                self.cycle_screen(false).await;
                return Ok(());
            }
            KeyCode::F(1) => {
                model.toggle_help_popup().await;
                return Ok(());
            }
            _ => {}
        }

        let screen = model.current_screen().await;
        match screen.list_kind() {
            Some(kind) => self.handle_list_key(kind, key).await,
            None => self.handle_admin_key(key).await,
        }
        Ok(())
    }

    async fn handle_search_key(&self, key: KeyEvent, ctrl: bool) {
        let mut search = self.model.search.lock().await;
        match key.code {
            KeyCode::Esc => {
                drop(search);
                self.close_search().await;
            }
            KeyCode::Up => search.select_prev(),
            KeyCode::Down => search.select_next(),
            KeyCode::Backspace => search.pop_char(),
            KeyCode::Enter => {
                drop(search);
                self.run_search().await;
            }
            KeyCode::Char('a') if ctrl => {
                drop(search);
                self.request_add().await;
            }
            KeyCode::Char(c) if !ctrl => search.push_char(c),
            _ => {}
        }
    }

    async fn handle_list_key(&self, kind: EntityKind, key: KeyEvent) {
        let model = &self.model;

        if model.has_route().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
                model.navigate_back().await;
            }
            return;
        }

        // The detail card is modal
        if model.list_detail_open(kind).await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.list_close_detail(kind).await;
            }
            return;
        }

        match key.code {
            KeyCode::Up => model.list_move(kind, false).await,
            KeyCode::Down => model.list_move(kind, true).await,
            KeyCode::Enter => self.activate_row(kind).await,
            KeyCode::Esc => model.list_clear_query(kind).await,
            KeyCode::Backspace => model.list_pop_char(kind).await,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                model.list_push_char(kind, c).await;
            }
            _ => {}
        }
    }

    async fn handle_admin_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => self.open_search(EntityKind::Player).await,
            KeyCode::Char('l') | KeyCode::Char('L') => self.open_search(EntityKind::League).await,
            KeyCode::Char('c') | KeyCode::Char('C') => self.open_search(EntityKind::Club).await,
            KeyCode::Char('?') => self.model.toggle_help_popup().await,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.model.set_should_quit(true).await,
            // Number keys jump straight to a screen
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.show_screen(Screen::ALL[index]).await;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::controller::AppController;
    use crate::controller::testing::{RecordingAddHook, ScriptedProvider};
    use crate::model::{AppModel, EntityKind, Player, ResponsePolicy, ResultSet, Screen};

    fn controller(start: Screen) -> (AppController, Arc<ScriptedProvider>) {
        let provider = Arc::new(ScriptedProvider::default());
        let controller = AppController::new(
            Arc::new(AppModel::new(start, ResponsePolicy::default())),
            provider.clone(),
            Arc::new(RecordingAddHook::default()),
        );
        (controller, provider)
    }

    async fn press(controller: &AppController, code: KeyCode) {
        controller.handle_key_event(KeyEvent::from(code)).await.unwrap();
    }

    async fn type_text(controller: &AppController, text: &str) {
        for c in text.chars() {
            press(controller, KeyCode::Char(c)).await;
        }
    }

    #[tokio::test]
    async fn admin_keys_open_search_for_kind() {
        let (controller, _) = controller(Screen::Admin);
        press(&controller, KeyCode::Char('l')).await;
        assert_eq!(controller.model.search.lock().await.kind(), Some(EntityKind::League));

        type_text(&controller, "ligue").await;
        press(&controller, KeyCode::Esc).await;
        press(&controller, KeyCode::Char('p')).await;

        let search = controller.model.search.lock().await;
        assert_eq!(search.kind(), Some(EntityKind::Player));
        assert_eq!(search.query_text(), "");
    }

    #[tokio::test]
    async fn typing_in_search_modal_does_not_fetch() {
        let (controller, provider) = controller(Screen::Admin);
        press(&controller, KeyCode::Char('c')).await;
        type_text(&controller, "psg").await;
        press(&controller, KeyCode::Backspace).await;

        assert!(provider.search_calls.lock().unwrap().is_empty());
        assert_eq!(controller.model.search.lock().await.query_text(), "ps");
    }

    #[tokio::test]
    async fn list_filter_follows_keystrokes() {
        let (controller, provider) = controller(Screen::Admin);
        let reply = provider.pending_collection();
        let handle = controller.show_screen(Screen::Players).await.unwrap();
        let players = ["Léo", "Ana"]
            .iter()
            .map(|name| Player {
                name: Some(name.to_string()),
                ..Player::default()
            })
            .collect();
        reply.send(Ok(ResultSet::Players(players))).unwrap();
        handle.await.unwrap();

        type_text(&controller, "leo").await;
        assert_eq!(controller.model.players.lock().await.displayed().len(), 1);

        press(&controller, KeyCode::Enter).await;
        assert!(controller.model.players.lock().await.detail_open());
        press(&controller, KeyCode::Down).await;
        type_text(&controller, "x").await;
        {
            let players = controller.model.players.lock().await;
            assert_eq!(players.query(), "leo");
            assert_eq!(players.detail().and_then(|p| p.name.as_deref()), Some("Léo"));
        }
        press(&controller, KeyCode::Esc).await;
        assert!(!controller.model.players.lock().await.detail_open());

        press(&controller, KeyCode::Esc).await;
        assert_eq!(controller.model.players.lock().await.displayed().len(), 2);
    }

    #[tokio::test]
    async fn error_popup_swallows_keys_until_dismissed() {
        let (controller, _) = controller(Screen::Admin);
        controller.model.set_error("boom".to_string()).await;
        press(&controller, KeyCode::Char('p')).await;
        assert!(!controller.model.is_search_open().await);

        press(&controller, KeyCode::Enter).await;
        assert!(!controller.model.has_error().await);
    }

    #[tokio::test]
    async fn ctrl_c_quits_even_inside_modal() {
        let (controller, _) = controller(Screen::Admin);
        press(&controller, KeyCode::Char('p')).await;
        controller
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(controller.model.should_quit().await);
    }
}
