// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other test opens an in-memory database, so connection setup and
//! migrations are exercised throughout. These cover isolation, file
//! databases and the foreign key check.

use super::{create_test_actor, create_test_cause, new_persistence, register};
use crate::{Persistence, PersistenceError};
use crew_leave_domain::{Pilot, PilotId, Rank};
use std::ffi::OsString;
use std::path::PathBuf;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = new_persistence();
    let mut db2: Persistence = new_persistence();

    register(&mut db1, 1, Rank::Captain, 1);

    assert_eq!(db1.list_pilots().unwrap().len(), 1, "db1 should have 1 pilot");
    assert!(db2.list_pilots().unwrap().is_empty(), "db2 should be empty");
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence: Persistence = new_persistence();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_file_database_persists_across_connections() {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "crew_leave_init_test_{}.sqlite",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        let pilot: Pilot = Pilot::new(PilotId(7), Rank::FirstOfficer, 12).unwrap();
        persistence
            .register_pilot(&pilot, create_test_actor(), create_test_cause())
            .unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let pilot: Pilot = reopened.get_pilot(PilotId(7)).unwrap();
    assert_eq!(pilot.rank, Rank::FirstOfficer);
    assert_eq!(pilot.seniority_number, 12);

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let mut file: OsString = path.clone().into_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}
