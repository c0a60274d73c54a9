//! Entity records served by the data provider, and kind-tagged result sets

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::EntityKind;

/// Record identity. The provider sends either numeric or string ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Number(0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlayerWire")]
pub struct Player {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub age: Option<f64>,
    /// Height in centimetres
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub foot: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub market_value: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub avg_market_value: Option<f64>,
    #[serde(default)]
    pub avg_stadium_seats: Option<f64>,
    #[serde(default)]
    pub total_clubs: Option<f64>,
    #[serde(default)]
    pub total_players: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ClubWire")]
pub struct Club {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub stadium: Option<String>,
    #[serde(default)]
    pub stadium_seats: Option<f64>,
    #[serde(default)]
    pub market_value: Option<f64>,
}

// Providers spell the market value both ways, sometimes in the same record.
// The snake_case spelling wins when both are present.

#[derive(Deserialize)]
struct PlayerWire {
    id: RecordId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    age: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    foot: Option<String>,
    #[serde(default)]
    nationality: Option<String>,
    #[serde(default)]
    market_value: Option<f64>,
    #[serde(default, rename = "marketValue")]
    market_value_camel: Option<f64>,
}

impl From<PlayerWire> for Player {
    fn from(wire: PlayerWire) -> Self {
        Player {
            id: wire.id,
            name: wire.name,
            position: wire.position,
            age: wire.age,
            height: wire.height,
            foot: wire.foot,
            nationality: wire.nationality,
            market_value: wire.market_value.or(wire.market_value_camel),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClubWire {
    id: RecordId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    league: Option<String>,
    #[serde(default)]
    stadium: Option<String>,
    #[serde(default)]
    stadium_seats: Option<f64>,
    #[serde(default, rename = "market_value")]
    market_value_snake: Option<f64>,
    #[serde(default)]
    market_value: Option<f64>,
}

impl From<ClubWire> for Club {
    fn from(wire: ClubWire) -> Self {
        Club {
            id: wire.id,
            name: wire.name,
            country: wire.country,
            league: wire.league,
            stadium: wire.stadium,
            stadium_seats: wire.stadium_seats,
            market_value: wire.market_value_snake.or(wire.market_value),
        }
    }
}

/// Any single record, tagged with its kind
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    Player(Player),
    League(League),
    Club(Club),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Player(_) => EntityKind::Player,
            Record::League(_) => EntityKind::League,
            Record::Club(_) => EntityKind::Club,
        }
    }

    pub fn id(&self) -> &RecordId {
        match self {
            Record::Player(p) => &p.id,
            Record::League(l) => &l.id,
            Record::Club(c) => &c.id,
        }
    }

    pub fn display_name(&self) -> &str {
        let name = match self {
            Record::Player(p) => p.name.as_deref(),
            Record::League(l) => l.name.as_deref(),
            Record::Club(c) => c.name.as_deref(),
        };
        name.unwrap_or("(unnamed)")
    }
}

/// An ordered result sequence whose records all share one kind
#[derive(Clone, Debug, PartialEq)]
pub enum ResultSet {
    Players(Vec<Player>),
    Leagues(Vec<League>),
    Clubs(Vec<Club>),
}

impl ResultSet {
    pub fn empty(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Player => ResultSet::Players(Vec::new()),
            EntityKind::League => ResultSet::Leagues(Vec::new()),
            EntityKind::Club => ResultSet::Clubs(Vec::new()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            ResultSet::Players(_) => EntityKind::Player,
            ResultSet::Leagues(_) => EntityKind::League,
            ResultSet::Clubs(_) => EntityKind::Club,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ResultSet::Players(v) => v.len(),
            ResultSet::Leagues(v) => v.len(),
            ResultSet::Clubs(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Records that live in a kind-tagged collection
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: EntityKind;

    fn into_record(self) -> Record;

    /// Unwrap a result set of this kind, handing back sets of any other kind
    fn from_set(set: ResultSet) -> Result<Vec<Self>, ResultSet>;
}

impl Entity for Player {
    const KIND: EntityKind = EntityKind::Player;

    fn into_record(self) -> Record {
        Record::Player(self)
    }

    fn from_set(set: ResultSet) -> Result<Vec<Self>, ResultSet> {
        match set {
            ResultSet::Players(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl Entity for League {
    const KIND: EntityKind = EntityKind::League;

    fn into_record(self) -> Record {
        Record::League(self)
    }

    fn from_set(set: ResultSet) -> Result<Vec<Self>, ResultSet> {
        match set {
            ResultSet::Leagues(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl Entity for Club {
    const KIND: EntityKind = EntityKind::Club;

    fn into_record(self) -> Record {
        Record::Club(self)
    }

    fn from_set(set: ResultSet) -> Result<Vec<Self>, ResultSet> {
        match set {
            ResultSet::Clubs(v) => Ok(v),
            other => Err(other),
        }
    }
}
