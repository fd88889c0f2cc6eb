use crate::error::{Result, SeatingError};
use crate::passenger::Passenger;

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

const EXPECTED_NAME_HEADER: &str = "Name";
const EXPECTED_PRIORITY_HEADER: &str = "Priority";

/// Reads a passenger roster from a CSV file
///
/// # Arguments
/// * `path` - Path to a `Name,Priority` CSV file
///
/// # Errors
/// Returns error if the file cannot be read or a row is malformed
pub fn read_roster_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Passenger>> {
    let file = std::fs::File::open(path)?;
    read_roster_from_reader(file)
}

/// Read CSV with `Name,Priority` format.
/// - Extra columns are ignored
/// - Priority accepts true/false, yes/no, y/n and 1/0 (case-insensitive)
pub fn read_roster_from_reader<R: Read>(reader: R) -> Result<Vec<Passenger>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    validate_headers(&mut rdr)?;

    let mut passengers = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2; // 1-indexed, plus header
        passengers.push(parse_record(&rec, row)?);
    }
    Ok(passengers)
}

fn validate_headers<R: Read>(rdr: &mut csv::Reader<R>) -> Result<()> {
    let headers = rdr.headers()?;
    let name = headers.get(0).unwrap_or_default();
    let priority = headers.get(1).unwrap_or_default();

    if !name.eq_ignore_ascii_case(EXPECTED_NAME_HEADER)
        || !priority.eq_ignore_ascii_case(EXPECTED_PRIORITY_HEADER)
    {
        return Err(SeatingError::CsvHeader(format!(
            "expected '{EXPECTED_NAME_HEADER},{EXPECTED_PRIORITY_HEADER}', got '{name},{priority}'"
        )));
    }
    Ok(())
}

fn parse_record(rec: &StringRecord, row: usize) -> Result<Passenger> {
    if rec.len() < 2 {
        return Err(SeatingError::CsvRow {
            row,
            got: rec.len(),
        });
    }
    let priority = parse_priority(&rec[1]).ok_or_else(|| SeatingError::PriorityParse {
        row,
        value: rec[1].to_string(),
    })?;
    Passenger::new(&rec[0], priority)
}

fn parse_priority(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Reference roster for a 4x6 plane
pub fn sample_roster() -> Result<Vec<Passenger>> {
    const SAMPLE: [(&str, bool); 24] = [
        ("Alice Bryant", true),
        ("Bob Smith", false),
        ("Carol Smith", false),
        ("Daniel Johnson", false),
        ("Eli Johnson", false),
        ("Faye Johnson", false),
        ("Gina Lee", true),
        ("Harry Forge", false),
        ("Isla Kim", false),
        ("Jack Kim", false),
        ("Kara Kim", false),
        ("Liam Brown", false),
        ("Mia Brown", false),
        ("Noah White", false),
        ("Olivia White", false),
        ("Peter Black", false),
        ("Quinn Black", false),
        ("Riley Green", false),
        ("Sophie Green", false),
        ("Tom Blue", true),
        ("Uma Red", false),
        ("Vera Red", false),
        ("Will Gray", false),
        ("Zoe Hughs", true),
    ];

    SAMPLE
        .iter()
        .map(|&(name, priority)| Passenger::new(name, priority))
        .collect()
}
