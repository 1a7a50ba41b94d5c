// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use crew_leave_domain::{Pilot, PilotId};

use crate::diesel_schema::pilots;
use crate::error::PersistenceError;

/// Inserts a pilot record under its own ID.
///
/// # Errors
///
/// Returns an error if the seniority number does not fit the column or
/// the insert fails.
pub fn insert_pilot(conn: &mut SqliteConnection, pilot: &Pilot) -> Result<(), PersistenceError> {
    let seniority_number: i32 = i32::try_from(pilot.seniority_number).map_err(|_| {
        PersistenceError::QueryFailed(format!(
            "seniority number {} is out of range",
            pilot.seniority_number
        ))
    })?;

    diesel::insert_into(pilots::table)
        .values((
            pilots::pilot_id.eq(pilot.pilot_id.0),
            pilots::rank.eq(pilot.rank.as_str()),
            pilots::seniority_number.eq(seniority_number),
            pilots::is_active.eq(i32::from(pilot.is_active)),
        ))
        .execute(conn)?;
    Ok(())
}

/// Clears the active flag of a pilot.
///
/// # Errors
///
/// Returns `PersistenceError::PilotNotFound` if no row was updated.
pub fn deactivate_pilot(
    conn: &mut SqliteConnection,
    pilot_id: PilotId,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(pilots::table.filter(pilots::pilot_id.eq(pilot_id.0)))
        .set(pilots::is_active.eq(0))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::PilotNotFound(pilot_id));
    }
    Ok(())
}
