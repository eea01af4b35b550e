//! Demo data for a fresh database.
//!
//! The API has no route for creating activities, so a new install is seeded
//! from here.

use tracing::info;

use crate::error::Result;
use crate::models::{NewActivity, NewCamper, NewSignup};
use crate::storage::Storage;

const ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Swimming", 4),
    ("Canoeing", 1),
    ("Fire Building", 5),
    ("Hiking", 3),
];

const CAMPERS: &[(&str, i64)] = &[
    ("Clark Kent", 9),
    ("Bruce Wayne", 11),
    ("Diana Prince", 12),
    ("Peter Parker", 18),
];

/// (camper index, activity index, hour)
const SIGNUPS: &[(usize, usize, i64)] = &[
    (0, 1, 9),
    (0, 4, 14),
    (1, 0, 10),
    (2, 3, 20),
    (3, 2, 12),
];

/// Rows inserted by [`seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Activities inserted.
    pub activities: usize,
    /// Campers inserted.
    pub campers: usize,
    /// Signups inserted.
    pub signups: usize,
}

/// Insert the demo activities, campers and signups in one transaction.
///
/// With `reset`, every existing record is removed first, inside the same
/// transaction. A failure leaves the database as it was.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub fn seed(storage: &mut Storage, reset: bool) -> Result<SeedSummary> {
    let summary = storage.with_transaction(|storage| {
        if reset {
            storage.delete_all()?;
        }
        insert_demo_records(storage)
    })?;

    info!(
        "Seeded {} activities, {} campers, {} signups",
        summary.activities, summary.campers, summary.signups
    );
    Ok(summary)
}

fn insert_demo_records(storage: &Storage) -> Result<SeedSummary> {
    let activities = ACTIVITIES
        .iter()
        .map(|&(name, difficulty)| storage.insert_activity(&NewActivity::new(name, difficulty)))
        .collect::<Result<Vec<_>>>()?;

    let campers = CAMPERS
        .iter()
        .map(|&(name, age)| storage.insert_camper(&NewCamper::new(name, age)?))
        .collect::<Result<Vec<_>>>()?;

    for &(camper, activity, time) in SIGNUPS {
        let signup = NewSignup::new(campers[camper].id(), activities[activity].id, time)?;
        storage.insert_signup(&signup)?;
    }

    Ok(SeedSummary {
        activities: activities.len(),
        campers: campers.len(),
        signups: SIGNUPS.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_fresh_database() {
        let mut storage = Storage::open_in_memory().unwrap();
        let summary = seed(&mut storage, false).unwrap();

        let stats = storage.stats().unwrap();
        assert_eq!(stats.activities, summary.activities as i64);
        assert_eq!(stats.campers, summary.campers as i64);
        assert_eq!(stats.signups, summary.signups as i64);
    }

    #[test]
    fn test_seed_twice_appends() {
        let mut storage = Storage::open_in_memory().unwrap();
        seed(&mut storage, false).unwrap();
        seed(&mut storage, false).unwrap();

        assert_eq!(storage.stats().unwrap().campers, 2 * CAMPERS.len() as i64);
    }

    #[test]
    fn test_seed_reset_replaces() {
        let mut storage = Storage::open_in_memory().unwrap();
        seed(&mut storage, false).unwrap();
        seed(&mut storage, true).unwrap();

        let stats = storage.stats().unwrap();
        assert_eq!(stats.campers, CAMPERS.len() as i64);
        assert_eq!(stats.signups, SIGNUPS.len() as i64);
    }

    #[test]
    fn test_failed_insert_rolls_back_reset() {
        let mut storage = Storage::open_in_memory().unwrap();
        seed(&mut storage, false).unwrap();
        let before = storage.stats().unwrap();

        let result: Result<SeedSummary> = storage.with_transaction(|s| {
            s.delete_all()?;
            insert_demo_records(s)?;
            s.insert_signup(&NewSignup::new(9999, 9999, 1)?)?;
            unreachable!("signup with unknown camper was accepted")
        });
        assert!(result.is_err());
        assert_eq!(storage.stats().unwrap(), before);
    }

    #[test]
    fn test_seed_data_is_valid() {
        for &(name, age) in CAMPERS {
            assert!(NewCamper::new(name, age).is_ok(), "invalid camper {name}");
        }
        for &(camper, activity, time) in SIGNUPS {
            assert!(camper < CAMPERS.len() && activity < ACTIVITIES.len());
            assert!(NewSignup::new(1, 1, time).is_ok());
        }
    }
}
