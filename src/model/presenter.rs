//! Column schemas and row rendering for each entity kind

use super::entities::{Club, Entity, League, Player, Record, ResultSet};
use super::types::EntityKind;

/// Notification that the operator wants to add `record` to the local
/// `kind` collection. Carries no side effect of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct AddRequest {
    pub kind: EntityKind,
    pub record: Record,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    /// Relative width share when laying out a table
    pub weight: u16,
}

const fn col(header: &'static str, weight: u16) -> Column {
    Column { header, weight }
}

static PLAYER_COLUMNS: [Column; 8] = [
    col("#", 6),
    col("Name", 22),
    col("Position", 16),
    col("Age", 5),
    col("Height", 7),
    col("Foot", 7),
    col("Nationality", 16),
    col("Market Value", 14),
];

static LEAGUE_COLUMNS: [Column; 7] = [
    col("Name", 20),
    col("Country", 14),
    col("Continent", 12),
    col("Average Market Value", 18),
    col("Average Stadium Seats", 14),
    col("Total Clubs", 8),
    col("Total Players", 8),
];

static CLUB_COLUMNS: [Column; 5] = [
    col("Name", 24),
    col("Country", 16),
    col("League", 20),
    col("Stadium", 24),
    col("Market Value", 14),
];

/// Records with a fixed column schema
pub trait Presentable: Entity {
    fn columns() -> &'static [Column];
    fn cells(&self) -> Vec<String>;
}

impl Presentable for Player {
    fn columns() -> &'static [Column] {
        &PLAYER_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            opt_text(&self.name),
            opt_text(&self.position),
            self.age.map(number_text).unwrap_or_default(),
            self.height.map(number_text).unwrap_or_default(),
            opt_text(&self.foot),
            opt_text(&self.nationality),
            self.market_value.map(number_text).unwrap_or_default(),
        ]
    }
}

impl Presentable for League {
    fn columns() -> &'static [Column] {
        &LEAGUE_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt_text(&self.name),
            opt_text(&self.country),
            opt_text(&self.continent),
            format_eur(self.avg_market_value.unwrap_or(0.0)),
            format_grouped(self.avg_stadium_seats.unwrap_or(0.0)),
            self.total_clubs.map(number_text).unwrap_or_default(),
            self.total_players.map(number_text).unwrap_or_default(),
        ]
    }
}

impl Presentable for Club {
    fn columns() -> &'static [Column] {
        &CLUB_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            opt_text(&self.name),
            opt_text(&self.country),
            opt_text(&self.league),
            opt_text(&self.stadium),
            self.market_value.map(format_eur).unwrap_or_default(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PresentedRow {
    pub cells: Vec<String>,
    pub action: AddRequest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PresentedTable {
    pub kind: EntityKind,
    pub columns: &'static [Column],
    pub rows: Vec<PresentedRow>,
}

/// Render a result set with its kind's column schema
pub fn present(results: &ResultSet) -> PresentedTable {
    match results {
        ResultSet::Players(v) => present_records(v.iter()),
        ResultSet::Leagues(v) => present_records(v.iter()),
        ResultSet::Clubs(v) => present_records(v.iter()),
    }
}

pub fn present_records<'a, R, I>(records: I) -> PresentedTable
where
    R: Presentable,
    I: IntoIterator<Item = &'a R>,
{
    let rows = records
        .into_iter()
        .map(|record| PresentedRow {
            cells: record.cells(),
            action: AddRequest {
                kind: R::KIND,
                record: record.clone().into_record(),
            },
        })
        .collect();
    PresentedTable {
        kind: R::KIND,
        columns: R::columns(),
        rows,
    }
}

/// Tab separated rendering used by the headless commands
pub fn to_tsv(table: &PresentedTable) -> String {
    let mut out = table
        .columns
        .iter()
        .map(|c| c.header)
        .collect::<Vec<_>>()
        .join("\t");
    for row in &table.rows {
        out.push('\n');
        out.push_str(&row.cells.join("\t"));
    }
    out
}

fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Shortest decimal text of a number (`185`, `1.5`)
pub fn number_text(value: f64) -> String {
    value.to_string()
}

/// Whole euros with French digit grouping, e.g. `1 234 567 €`
pub fn format_eur(value: f64) -> String {
    format!("{} €", group_digits(value.round() as i64, ' '))
}

/// Rounded value with comma digit grouping, e.g. `45,321`
pub fn format_grouped(value: f64) -> String {
    group_digits(value.round() as i64, ',')
}

fn group_digits(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entities::RecordId;

    #[test]
    fn empty_results_render_no_rows() {
        for kind in [EntityKind::Player, EntityKind::League, EntityKind::Club] {
            let table = present(&ResultSet::empty(kind));
            assert_eq!(table.kind, kind);
            assert!(table.rows.is_empty());
            assert!(!table.columns.is_empty());
        }
    }

    #[test]
    fn each_kind_gets_its_schema() {
        assert_eq!(present(&ResultSet::Players(vec![])).columns.len(), 8);
        assert_eq!(present(&ResultSet::Leagues(vec![])).columns[3].header, "Average Market Value");
        assert_eq!(present(&ResultSet::Clubs(vec![])).columns[2].header, "League");
    }

    #[test]
    fn rows_carry_add_action_for_their_record() {
        let player = Player {
            id: RecordId::Number(9),
            name: Some("Léo".to_string()),
            position: Some("GK".to_string()),
            height: Some(188.0),
            ..Player::default()
        };
        let table = present(&ResultSet::Players(vec![player.clone()]));
        let row = &table.rows[0];
        assert_eq!(row.cells.len(), table.columns.len());
        assert_eq!(row.cells[0], "9");
        assert_eq!(row.cells[4], "188");
        assert_eq!(row.cells[7], "");
        assert_eq!(
            row.action,
            AddRequest {
                kind: EntityKind::Player,
                record: Record::Player(player),
            }
        );
    }

    #[test]
    fn league_aggregates_are_formatted() {
        let league = League {
            avg_market_value: Some(5_123_456.7),
            avg_stadium_seats: Some(28_450.4),
            ..League::default()
        };
        let cells = league.cells();
        assert_eq!(cells[3], "5 123 457 €");
        assert_eq!(cells[4], "28,450");
        assert_eq!(League::default().cells()[3], "0 €");
    }

    #[test]
    fn grouping_handles_small_and_negative_values() {
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(-1_234_567.0), "-1,234,567");
    }

    #[test]
    fn tsv_has_header_and_rows() {
        let club = Club {
            name: Some("Olympique Lyonnais".to_string()),
            country: Some("France".to_string()),
            ..Club::default()
        };
        let tsv = to_tsv(&present(&ResultSet::Clubs(vec![club])));
        let lines: Vec<_> = tsv.lines().collect();
        assert_eq!(lines[0], "Name\tCountry\tLeague\tStadium\tMarket Value");
        assert_eq!(lines[1], "Olympique Lyonnais\tFrance\t\t\t");
    }
}
