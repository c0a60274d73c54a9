//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! drives the model's state machines and issues provider requests.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Screen switching, collection loads and row activation
//! - `search`: The "search & add" modal workflow

mod input;
mod navigation;
mod search;

use std::sync::Arc;

use crate::model::{AddHook, AppModel, DataProvider, FetchFailure};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    pub(crate) provider: Arc<dyn DataProvider>,
    pub(crate) add_hook: Arc<dyn AddHook>,
}

impl AppController {
    pub fn new(
        model: Arc<AppModel>,
        provider: Arc<dyn DataProvider>,
        add_hook: Arc<dyn AddHook>,
    ) -> Self {
        Self {
            model,
            provider,
            add_hook,
        }
    }

    pub(crate) fn format_error(context: &str, error: &FetchFailure) -> String {
        match error {
            FetchFailure::Status { status: 404, .. } => {
                format!("{}: endpoint not found. Check --api-url.", context)
            }
            FetchFailure::Status { status: 429, .. } => {
                format!("{}: rate limited. Please wait a moment.", context)
            }
            _ => format!("{}: {}", context, error.summary()),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted data provider for controller tests

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use futures::future::{BoxFuture, FutureExt};
    use tokio::sync::oneshot;

    use crate::model::{
        AddHook, AddRequest, DataProvider, EntityKind, FetchFailure, ResultSet,
    };

    type Reply = oneshot::Receiver<Result<ResultSet, FetchFailure>>;

    /// Provider whose responses are released by the test, in any order
    #[derive(Default)]
    pub struct ScriptedProvider {
        pub collection_calls: Mutex<Vec<EntityKind>>,
        pub search_calls: Mutex<Vec<(EntityKind, String)>>,
        collections: Mutex<VecDeque<Reply>>,
        searches: Mutex<VecDeque<Reply>>,
    }

    impl ScriptedProvider {
        /// Queue a pending collection response; send on the returned handle to release it
        pub fn pending_collection(&self) -> oneshot::Sender<Result<ResultSet, FetchFailure>> {
            let (tx, rx) = oneshot::channel();
            self.collections.lock().unwrap().push_back(rx);
            tx
        }

        pub fn pending_search(&self) -> oneshot::Sender<Result<ResultSet, FetchFailure>> {
            let (tx, rx) = oneshot::channel();
            self.searches.lock().unwrap().push_back(rx);
            tx
        }

        fn next(queue: &Mutex<VecDeque<Reply>>) -> BoxFuture<'static, Result<ResultSet, FetchFailure>> {
            let reply = queue.lock().unwrap().pop_front();
            async move {
                match reply {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(FetchFailure::Transport("dropped".to_string()))),
                    None => Err(FetchFailure::Transport("no scripted response".to_string())),
                }
            }
            .boxed()
        }
    }

    impl DataProvider for ScriptedProvider {
        fn fetch_all(&self, kind: EntityKind) -> BoxFuture<'_, Result<ResultSet, FetchFailure>> {
            self.collection_calls.lock().unwrap().push(kind);
            Self::next(&self.collections)
        }

        fn search<'a>(
            &'a self,
            kind: EntityKind,
            term: &'a str,
        ) -> BoxFuture<'a, Result<ResultSet, FetchFailure>> {
            self.search_calls.lock().unwrap().push((kind, term.to_string()));
            Self::next(&self.searches)
        }
    }

    #[derive(Default)]
    pub struct RecordingAddHook {
        pub requests: Mutex<Vec<AddRequest>>,
    }

    impl AddHook for RecordingAddHook {
        fn request_add(&self, request: &AddRequest) {
            self.requests.lock().unwrap().push(request.clone());
        }
    }
}
