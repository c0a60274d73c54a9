//! "Search & add" modal workflow

use tokio::task::JoinHandle;

use crate::model::{ApplyOutcome, EntityKind, SearchCompletion};
use super::AppController;

impl AppController {
    pub async fn open_search(&self, kind: EntityKind) {
        self.model.search.lock().await.open_for(kind);
    }

    pub async fn close_search(&self) {
        self.model.search.lock().await.close();
    }

    /// Issue one remote search for the session's kind and current query.
    ///
    /// The handler does not wait for the response; the returned handle
    /// resolves with what the session did once it arrived. Earlier searches
    /// still in flight are not cancelled.
    pub async fn run_search(&self) -> Option<JoinHandle<ApplyOutcome>> {
        let ticket = self.model.search.lock().await.run_search()?;

        let provider = self.provider.clone();
        let model = self.model.clone();
        Some(tokio::spawn(async move {
            let outcome = provider.search(ticket.kind, &ticket.term).await;
            let applied = model.apply_search(SearchCompletion { ticket, outcome }).await;
            if let ApplyOutcome::Stale { seq, latest } = applied {
                tracing::debug!(seq, latest, "Superseded search response ignored");
            }
            applied
        }))
    }

    /// Hand the selected result row's add action to the add hook.
    /// The session itself is left untouched.
    pub async fn request_add(&self) -> bool {
        let request = self.model.search.lock().await.selected_add_request();
        match request {
            Some(request) => {
                self.add_hook.request_add(&request);
                self.model
                    .set_status(format!(
                        "Add requested: {} {}",
                        request.kind,
                        request.record.display_name()
                    ))
                    .await;
                true
            }
            None => false,
        }
    }
}
