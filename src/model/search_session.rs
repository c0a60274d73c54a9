//! State machine behind the "search & add" modal
//!
//! A session is either closed or open for exactly one entity kind. Searches
//! are issued as [`SearchTicket`]s; the caller performs the remote call and
//! feeds the outcome back through [`SearchSession::apply`]. Tickets carry a
//! sequence number that is never reused, which is how responses from a
//! previous session or a superseded search are recognised.

use clap::ValueEnum;

use super::entities::ResultSet;
use super::error::FetchFailure;
use super::presenter::{AddRequest, present};
use super::types::EntityKind;

/// How overlapping searches within one session are resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ResponsePolicy {
    /// Only the response to the most recently issued search is applied
    #[default]
    LatestIssued,
    /// Every response is applied as it arrives; the last to arrive wins
    LastArrival,
}

/// One remote search to perform
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub kind: EntityKind,
    pub term: String,
}

/// The outcome of a ticket, fed back into the session
#[derive(Clone, Debug)]
pub struct SearchCompletion {
    pub ticket: SearchTicket,
    pub outcome: Result<ResultSet, FetchFailure>,
}

/// What [`SearchSession::apply`] did with a completion
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Results replaced with the response payload
    Applied,
    /// Results reset to empty after a failed search
    Failed,
    /// A newer search was issued after this one; response discarded
    Stale { seq: u64, latest: u64 },
    /// The session was closed or reopened since the ticket was issued
    Dropped,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpenSession {
    pub kind: EntityKind,
    pub query_text: String,
    pub results: ResultSet,
    pub is_loading: bool,
    pub last_failure: Option<FetchFailure>,
    pub selected: usize,
}

impl OpenSession {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            query_text: String::new(),
            results: ResultSet::empty(kind),
            is_loading: false,
            last_failure: None,
            selected: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Closed,
    Open(OpenSession),
}

#[derive(Clone, Debug)]
pub struct SearchSession {
    state: SessionState,
    policy: ResponsePolicy,
    next_seq: u64,
    /// First sequence number issued in the current open session
    session_floor: u64,
    latest_issued: Option<u64>,
}

impl SearchSession {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            state: SessionState::Closed,
            policy,
            next_seq: 1,
            session_floor: 1,
            latest_issued: None,
        }
    }

    pub fn open(&self) -> Option<&OpenSession> {
        match &self.state {
            SessionState::Open(open) => Some(open),
            SessionState::Closed => None,
        }
    }

    fn open_mut(&mut self) -> Option<&mut OpenSession> {
        match &mut self.state {
            SessionState::Open(open) => Some(open),
            SessionState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open().is_some()
    }

    pub fn kind(&self) -> Option<EntityKind> {
        self.open().map(|open| open.kind)
    }

    pub fn query_text(&self) -> &str {
        self.open().map(|open| open.query_text.as_str()).unwrap_or("")
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.open().map(|open| &open.results)
    }

    pub fn is_loading(&self) -> bool {
        self.open().is_some_and(|open| open.is_loading)
    }

    pub fn last_failure(&self) -> Option<&FetchFailure> {
        self.open().and_then(|open| open.last_failure.as_ref())
    }

    /// Open (or reopen) the session for `kind`, discarding any previous
    /// query and results.
    pub fn open_for(&mut self, kind: EntityKind) {
        tracing::debug!(%kind, "Opening search session");
        self.session_floor = self.next_seq;
        self.latest_issued = None;
        self.state = SessionState::Open(OpenSession::new(kind));
    }

    /// Replace the query text. Never triggers a fetch.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        if let Some(open) = self.open_mut() {
            open.query_text = text.into();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(open) = self.open_mut() {
            open.query_text.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(open) = self.open_mut() {
            open.query_text.pop();
        }
    }

    /// Mark the session loading and hand out the one remote search to issue.
    /// Returns `None` when the session is closed.
    pub fn run_search(&mut self) -> Option<SearchTicket> {
        let seq = self.next_seq;
        let open = match &mut self.state {
            SessionState::Open(open) => open,
            SessionState::Closed => return None,
        };
        open.is_loading = true;
        let ticket = SearchTicket {
            seq,
            kind: open.kind,
            term: open.query_text.clone(),
        };
        self.next_seq += 1;
        self.latest_issued = Some(seq);
        tracing::debug!(seq, kind = %ticket.kind, term = %ticket.term, "Search issued");
        Some(ticket)
    }

    /// Apply the outcome of a previously issued ticket.
    pub fn apply(&mut self, completion: SearchCompletion) -> ApplyOutcome {
        let SearchCompletion { ticket, outcome } = completion;
        let policy = self.policy;
        let latest = self.latest_issued;

        if ticket.seq < self.session_floor {
            tracing::debug!(seq = ticket.seq, "Dropping response from a previous session");
            return ApplyOutcome::Dropped;
        }
        let open = match &mut self.state {
            SessionState::Open(open) if open.kind == ticket.kind => open,
            _ => {
                tracing::debug!(seq = ticket.seq, "Dropping response for a closed session");
                return ApplyOutcome::Dropped;
            }
        };

        if policy == ResponsePolicy::LatestIssued {
            if let Some(latest) = latest.filter(|latest| *latest != ticket.seq) {
                tracing::debug!(seq = ticket.seq, latest, "Discarding stale search response");
                return ApplyOutcome::Stale { seq: ticket.seq, latest };
            }
        }

        open.is_loading = false;
        open.selected = 0;
        match outcome {
            Ok(results) if results.kind() == open.kind => {
                tracing::info!(
                    seq = ticket.seq,
                    kind = %open.kind,
                    count = results.len(),
                    "Search results applied"
                );
                open.results = results;
                open.last_failure = None;
                ApplyOutcome::Applied
            }
            Ok(results) => {
                let failure = FetchFailure::Decode(format!(
                    "expected {} results, got {}",
                    open.kind,
                    results.kind()
                ));
                tracing::error!(seq = ticket.seq, error = %failure, "Search failed");
                open.results = ResultSet::empty(open.kind);
                open.last_failure = Some(failure);
                ApplyOutcome::Failed
            }
            Err(failure) => {
                tracing::error!(seq = ticket.seq, term = %ticket.term, error = %failure, "Search failed");
                open.results = ResultSet::empty(open.kind);
                open.last_failure = Some(failure);
                ApplyOutcome::Failed
            }
        }
    }

    /// Close the session, discarding query and results.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("Closing search session");
        }
        self.state = SessionState::Closed;
        self.latest_issued = None;
        self.session_floor = self.next_seq;
    }

    pub fn select_next(&mut self) {
        if let Some(open) = self.open_mut() {
            if open.selected < open.results.len().saturating_sub(1) {
                open.selected += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(open) = self.open_mut() {
            open.selected = open.selected.saturating_sub(1);
        }
    }

    /// The add action carried by the selected result row
    pub fn selected_add_request(&self) -> Option<AddRequest> {
        let open = self.open()?;
        present(&open.results)
            .rows
            .into_iter()
            .nth(open.selected)
            .map(|row| row.action)
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(ResponsePolicy::default())
    }
}
