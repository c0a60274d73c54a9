//! One-shot commands that print a table and exit, without the TUI

use anyhow::{Context, Result};

use crate::config::Command;
use crate::model::{
    ApplyOutcome, DataProvider, PresentedTable, ResponsePolicy, ResultSet, SearchCompletion,
    SearchSession, filter, present, present_records, to_tsv,
};

pub async fn run(command: &Command, provider: &dyn DataProvider, policy: ResponsePolicy) -> Result<String> {
    let table = match command {
        Command::List(args) => {
            let collection = provider
                .fetch_all(args.kind)
                .await
                .with_context(|| format!("failed to load {}s", args.kind.label().to_lowercase()))?;
            filtered(&collection, args.filter.as_deref().unwrap_or(""))
        }
        Command::Search(args) => {
            let mut session = SearchSession::new(policy);
            session.open_for(args.kind);
            session.set_query_text(args.term.as_str());
            let Some(ticket) = session.run_search() else {
                anyhow::bail!("search session did not open");
            };
            let outcome = provider.search(ticket.kind, &ticket.term).await;
            if session.apply(SearchCompletion { ticket, outcome }) == ApplyOutcome::Failed {
                if let Some(failure) = session.last_failure().cloned() {
                    return Err(failure).context("search failed");
                }
            }
            let results = session.results().cloned().unwrap_or_else(|| ResultSet::empty(args.kind));
            present(&results)
        }
    };
    tracing::debug!(kind = %table.kind, rows = table.rows.len(), "Headless command finished");
    Ok(to_tsv(&table))
}

fn filtered(collection: &ResultSet, query: &str) -> PresentedTable {
    match collection {
        ResultSet::Players(v) => present_records(filter(v, query)),
        ResultSet::Leagues(v) => present_records(filter(v, query)),
        ResultSet::Clubs(v) => present_records(filter(v, query)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ListArgs, SearchArgs};
    use crate::controller::testing::ScriptedProvider;
    use crate::model::{EntityKind, FetchFailure, League};

    fn league(name: &str, continent: &str) -> League {
        League {
            name: Some(name.to_string()),
            continent: Some(continent.to_string()),
            ..League::default()
        }
    }

    #[tokio::test]
    async fn list_applies_local_filter() {
        let provider = ScriptedProvider::default();
        provider
            .pending_collection()
            .send(Ok(ResultSet::Leagues(vec![
                league("Ligue 1", "Europe"),
                league("MLS", "America"),
            ])))
            .unwrap();

        let command = Command::List(ListArgs {
            kind: EntityKind::League,
            filter: Some("europe".to_string()),
        });
        let output = run(&command, &provider, ResponsePolicy::default()).await.unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Name\tCountry\tContinent"));
        assert!(lines[1].starts_with("Ligue 1\t"));
    }

    #[tokio::test]
    async fn search_failure_is_reported() {
        let provider = ScriptedProvider::default();
        provider
            .pending_search()
            .send(Err(FetchFailure::Status { status: 503, body: String::new() }))
            .unwrap();

        let command = Command::Search(SearchArgs {
            kind: EntityKind::Club,
            term: "lyon".to_string(),
        });
        let error = run(&command, &provider, ResponsePolicy::default()).await.unwrap_err();
        assert!(error.to_string().contains("search failed"));
        assert_eq!(
            *provider.search_calls.lock().unwrap(),
            vec![(EntityKind::Club, "lyon".to_string())]
        );
    }
}
