use crate::{
    allocate::SeatingRun,
    error::{Result, SeatingError},
};
use csv::WriterBuilder;
use std::io::Write;

const EMPTY_TAG: &str = "___";
const NO_SEAT: &str = "NO SEAT AVAILABLE";

fn ensure_complete(run: &SeatingRun) -> Result<()> {
    if run.is_complete() {
        Ok(())
    } else {
        Err(SeatingError::AllocationIncomplete)
    }
}

/// Writes one line per row: each seat letter with the occupant's surname
/// tag, or `___` when empty.
pub fn write_seating_chart<W: Write>(run: &SeatingRun, out: &mut W) -> Result<()> {
    ensure_complete(run)?;
    let map = run.seat_map();

    writeln!(out, "\nSeating Chart:\n")?;
    for row in 0..map.rows() {
        let cells: Vec<String> = map
            .row_seats(row)
            .map(|seat| {
                let tag = map
                    .occupant(seat)
                    .and_then(|id| run.registry().get(id))
                    .map(|p| p.tag())
                    .unwrap_or_else(|| EMPTY_TAG.to_string());
                format!("{}:{tag}", seat.letter)
            })
            .collect();
        writeln!(out, "Row {:2} | {}", row + 1, cells.join("  "))?;
    }
    Ok(())
}

/// Writes every passenger in input order with their seat.
pub fn write_assignments<W: Write>(run: &SeatingRun, out: &mut W) -> Result<()> {
    ensure_complete(run)?;

    writeln!(out, "\nPassenger Assignments (In Order of Appearance):\n")?;
    for (id, passenger) in run.registry().iter() {
        match run.assignments().seat_of(id) {
            Some(seat) => writeln!(out, "{:25} -> Row {seat}", passenger.name())?,
            None => writeln!(out, "{:25} -> {NO_SEAT}", passenger.name())?,
        }
    }
    Ok(())
}

/// Writes the assignment list as a `Name,Priority,Seat,Stage` table.
/// Unassigned passengers have an empty seat and the stage `Unassigned`.
pub fn write_assignments_csv<W: Write>(run: &SeatingRun, out: &mut W) -> Result<()> {
    ensure_complete(run)?;
    let mut wtr = WriterBuilder::new().from_writer(out);

    wtr.write_record(["Name", "Priority", "Seat", "Stage"])?;
    for (id, passenger) in run.registry().iter() {
        let priority = passenger.is_priority().to_string();
        let (seat, stage) = match run.assignments().get(id) {
            Some(a) => (a.seat.to_string(), a.stage.to_string()),
            None => (String::new(), "Unassigned".to_string()),
        };
        wtr.write_record([
            passenger.name(),
            priority.as_str(),
            seat.as_str(),
            stage.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn seating_chart_string(run: &SeatingRun) -> Result<String> {
    let mut buf = Vec::new();
    write_seating_chart(run, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn assignments_string(run: &SeatingRun) -> Result<String> {
    let mut buf = Vec::new();
    write_assignments(run, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
