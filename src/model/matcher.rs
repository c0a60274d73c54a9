//! Record matching against a free-text query over configurable fields

use std::borrow::Cow;

use super::entities::{Club, League, Player};
use super::normalize::normalize;

/// A field value as seen by the matcher
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    /// Text form compared against the query; numbers use their shortest
    /// decimal representation (`1500000`, `1.5`).
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(*s),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

/// A named accessor for one searchable attribute of `R`
pub struct Field<R> {
    pub name: &'static str,
    pub get: fn(&R) -> Option<FieldValue<'_>>,
}

/// Records that declare which of their attributes are searchable
pub trait Searchable: Sized + 'static {
    fn search_fields() -> &'static [Field<Self>];
}

/// Does `record` match `query` on any of `fields`?
///
/// An empty query (after normalization) matches every record. Absent fields
/// are skipped, so a record with no configured fields present never matches
/// a non-empty query.
pub fn matches<R>(record: &R, query: &str, fields: &[Field<R>]) -> bool {
    let needle = normalize(query);
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        let hit = (field.get)(record)
            .is_some_and(|value| normalize(&value.as_text()).contains(&needle));
        if hit {
            tracing::trace!(field = field.name, query, "Field matched");
        }
        hit
    })
}

/// Keep the records of `collection` that match `query`, in order.
pub fn filter<'a, R: Searchable>(collection: &'a [R], query: &str) -> Vec<&'a R> {
    collection
        .iter()
        .filter(|record| matches(*record, query, R::search_fields()))
        .collect()
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Text)
}

fn player_name(p: &Player) -> Option<FieldValue<'_>> {
    text(&p.name)
}

fn player_position(p: &Player) -> Option<FieldValue<'_>> {
    text(&p.position)
}

fn player_market_value(p: &Player) -> Option<FieldValue<'_>> {
    p.market_value.map(FieldValue::Number)
}

fn league_name(l: &League) -> Option<FieldValue<'_>> {
    text(&l.name)
}

fn league_country(l: &League) -> Option<FieldValue<'_>> {
    text(&l.country)
}

fn league_continent(l: &League) -> Option<FieldValue<'_>> {
    text(&l.continent)
}

fn club_name(c: &Club) -> Option<FieldValue<'_>> {
    text(&c.name)
}

fn club_country(c: &Club) -> Option<FieldValue<'_>> {
    text(&c.country)
}

fn club_league(c: &Club) -> Option<FieldValue<'_>> {
    text(&c.league)
}

static PLAYER_FIELDS: [Field<Player>; 3] = [
    Field { name: "name", get: player_name },
    Field { name: "position", get: player_position },
    Field { name: "market_value", get: player_market_value },
];

static LEAGUE_FIELDS: [Field<League>; 3] = [
    Field { name: "name", get: league_name },
    Field { name: "country", get: league_country },
    Field { name: "continent", get: league_continent },
];

static CLUB_FIELDS: [Field<Club>; 3] = [
    Field { name: "name", get: club_name },
    Field { name: "country", get: club_country },
    Field { name: "league", get: club_league },
];

impl Searchable for Player {
    fn search_fields() -> &'static [Field<Self>] {
        &PLAYER_FIELDS
    }
}

impl Searchable for League {
    fn search_fields() -> &'static [Field<Self>] {
        &LEAGUE_FIELDS
    }
}

impl Searchable for Club {
    fn search_fields() -> &'static [Field<Self>] {
        &CLUB_FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, position: &str) -> Player {
        Player {
            name: Some(name.to_string()),
            position: Some(position.to_string()),
            ..Player::default()
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        let bare = Player::default();
        assert!(matches(&bare, "", Player::search_fields()));
        assert!(matches(&player("Ana", "DF"), "", Player::search_fields()));
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        assert!(!matches(&player("Ana", "DF"), " ", Player::search_fields()));
    }

    #[test]
    fn accented_name_matches_plain_query() {
        let p = player("Mbappé", "FW");
        assert!(matches(&p, "mbappe", Player::search_fields()));
        assert!(matches(&p, "MBAPPÉ", Player::search_fields()));
        assert!(matches(&p, "app", Player::search_fields()));
    }

    #[test]
    fn any_field_may_match() {
        let p = player("Ana", "Defender");
        assert!(matches(&p, "fend", Player::search_fields()));
        assert!(!matches(&p, "keeper", Player::search_fields()));
    }

    #[test]
    fn missing_market_value_is_skipped() {
        let p = player("Ana", "DF");
        assert!(!matches(&p, "1500", Player::search_fields()));

        let valued = Player {
            market_value: Some(1_500_000.0),
            ..player("Ana", "DF")
        };
        assert!(matches(&valued, "1500", Player::search_fields()));
    }

    #[test]
    fn numbers_compare_in_decimal_form() {
        assert_eq!(FieldValue::Number(1_500_000.0).as_text(), "1500000");
        assert_eq!(FieldValue::Number(1.5).as_text(), "1.5");
    }

    #[test]
    fn record_with_no_fields_never_matches_text() {
        assert!(!matches(&League::default(), "europe", League::search_fields()));
    }

    #[test]
    fn filter_keeps_collection_order() {
        let collection = vec![player("Léo", "GK"), player("Ana", "DF"), player("Leonor", "MF")];
        let shown: Vec<_> = filter(&collection, "leo")
            .into_iter()
            .filter_map(|p| p.name.as_deref())
            .collect();
        assert_eq!(shown, vec!["Léo", "Leonor"]);
    }

    #[test]
    fn league_matches_on_continent() {
        let league = League {
            name: Some("Süper Lig".to_string()),
            continent: Some("Europe".to_string()),
            ..League::default()
        };
        assert!(matches(&league, "super", League::search_fields()));
        assert!(matches(&league, "eur", League::search_fields()));
    }
}
