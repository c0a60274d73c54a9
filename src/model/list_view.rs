//! Per-kind listing state: fetch once, filter locally on every keystroke

use chrono::{DateTime, Local};

use super::entities::Entity;
use super::error::FetchFailure;
use super::matcher::{self, Searchable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
}

#[derive(Clone, Debug)]
pub struct ListView<R> {
    load: LoadState,
    collection: Vec<R>,
    query: String,
    failure: Option<FetchFailure>,
    loaded_at: Option<DateTime<Local>>,
    selected: usize,
    detail: Option<R>,
}

impl<R: Entity + Searchable> ListView<R> {
    pub fn new() -> Self {
        Self {
            load: LoadState::NotLoaded,
            collection: Vec::new(),
            query: String::new(),
            failure: None,
            loaded_at: None,
            selected: 0,
            detail: None,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Called whenever the view becomes visible. Returns `true` exactly once,
    /// on the first activation, meaning the caller must fetch the collection.
    pub fn activate(&mut self) -> bool {
        if self.load != LoadState::NotLoaded {
            return false;
        }
        tracing::debug!(kind = %R::KIND, "First activation, loading collection");
        self.load = LoadState::Loading;
        true
    }

    /// Store the fetched collection verbatim, or an empty one on failure.
    pub fn finish_load(&mut self, outcome: Result<Vec<R>, FetchFailure>) {
        match outcome {
            Ok(collection) => {
                tracing::info!(kind = %R::KIND, count = collection.len(), "Collection loaded");
                self.collection = collection;
                self.failure = None;
            }
            Err(failure) => {
                tracing::error!(kind = %R::KIND, error = %failure, "Collection load failed");
                self.collection = Vec::new();
                self.failure = Some(failure);
            }
        }
        self.load = LoadState::Loaded;
        self.loaded_at = Some(Local::now());
        self.clamp_selection();
    }

    pub fn collection(&self) -> &[R] {
        &self.collection
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        self.failure.as_ref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp_selection();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_selection();
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    /// The records currently shown: the collection filtered by the query.
    /// Recomputed on every call.
    pub fn displayed(&self) -> Vec<&R> {
        matcher::filter(&self.collection, &self.query)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let len = self.displayed().len();
        if self.selected < len.saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_record(&self) -> Option<&R> {
        self.displayed().get(self.selected).copied()
    }

    /// Row activation: only a loaded record can be activated
    pub fn activate_selected(&self) -> Option<R> {
        if self.load != LoadState::Loaded {
            return None;
        }
        self.selected_record().cloned()
    }

    /// Show the detail overlay for the selected record. The record is
    /// captured, so later selection or filter changes leave the card alone.
    pub fn open_detail(&mut self) -> bool {
        self.detail = self.activate_selected();
        self.detail.is_some()
    }

    pub fn detail(&self) -> Option<&R> {
        self.detail.as_ref()
    }

    pub fn detail_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    fn clamp_selection(&mut self) {
        let len = self.displayed().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

impl<R: Entity + Searchable> Default for ListView<R> {
    fn default() -> Self {
        Self::new()
    }
}
