// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use crew_leave_domain::{Pilot, PilotId, Rank};

use crate::diesel_schema::pilots;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = pilots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct PilotRow {
    pilot_id: i64,
    rank: String,
    seniority_number: i32,
    is_active: i32,
}

impl TryFrom<PilotRow> for Pilot {
    type Error = PersistenceError;

    fn try_from(row: PilotRow) -> Result<Self, Self::Error> {
        let rank: Rank = row.rank.parse()?;
        let seniority_number: u32 = u32::try_from(row.seniority_number).map_err(|_| {
            PersistenceError::ReconstructionError(format!(
                "pilot {} has negative seniority number {}",
                row.pilot_id, row.seniority_number
            ))
        })?;

        let pilot: Self = Self::new(PilotId(row.pilot_id), rank, seniority_number)?;
        Ok(if row.is_active == 0 {
            pilot.deactivated()
        } else {
            pilot
        })
    }
}

/// Retrieves a pilot by ID.
///
/// # Errors
///
/// Returns `PersistenceError::PilotNotFound` if no such pilot exists.
pub fn get_pilot(conn: &mut SqliteConnection, pilot_id: PilotId) -> Result<Pilot, PersistenceError> {
    let row: Option<PilotRow> = pilots::table
        .filter(pilots::pilot_id.eq(pilot_id.0))
        .select(PilotRow::as_select())
        .first::<PilotRow>(conn)
        .optional()?;

    row.ok_or(PersistenceError::PilotNotFound(pilot_id))?
        .try_into()
}

/// Returns true if a pilot with this ID is registered.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn pilot_exists(conn: &mut SqliteConnection, pilot_id: PilotId) -> Result<bool, PersistenceError> {
    let count: i64 = pilots::table
        .filter(pilots::pilot_id.eq(pilot_id.0))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Lists every pilot, most senior first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_pilots(conn: &mut SqliteConnection) -> Result<Vec<Pilot>, PersistenceError> {
    pilots::table
        .order((pilots::seniority_number.asc(), pilots::pilot_id.asc()))
        .select(PilotRow::as_select())
        .load::<PilotRow>(conn)?
        .into_iter()
        .map(Pilot::try_from)
        .collect()
}

/// Lists every pilot of `rank`, active or not, most senior first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_pilots_by_rank(
    conn: &mut SqliteConnection,
    rank: Rank,
) -> Result<Vec<Pilot>, PersistenceError> {
    pilots::table
        .filter(pilots::rank.eq(rank.as_str()))
        .order((pilots::seniority_number.asc(), pilots::pilot_id.asc()))
        .select(PilotRow::as_select())
        .load::<PilotRow>(conn)?
        .into_iter()
        .map(Pilot::try_from)
        .collect()
}
