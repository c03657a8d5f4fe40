//! # nearspot-db-mem
//!
//! An in-memory implementation of the store repositories.
//!
//! Serves as the local stand-in for the managed document store,
//! e.g. for tests, tools and snapshot-based operation.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;

use nearspot_core::{
    entities::*,
    repositories::{Error as RepoError, LocationRepo, ReportRepo},
};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
struct Storage {
    locations: Vec<Location>,
    reports: Vec<Report>,
}

/// A shared, thread-safe in-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    storage: Arc<RwLock<Storage>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire content of the store.
    pub fn restore(&self, locations: Vec<Location>, reports: Vec<Report>) -> Result<()> {
        let mut storage = self.write()?;
        storage.locations = locations;
        storage.reports = reports;
        Ok(())
    }

    /// A consistent copy of the entire content of the store.
    pub fn dump(&self) -> Result<(Vec<Location>, Vec<Report>)> {
        let storage = self.read()?;
        Ok((storage.locations.clone(), storage.reports.clone()))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Storage>> {
        self.storage
            .read()
            .map_err(|_| RepoError::Other(anyhow!("store lock poisoned")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Storage>> {
        self.storage
            .write()
            .map_err(|_| RepoError::Other(anyhow!("store lock poisoned")))
    }
}

impl LocationRepo for MemStore {
    fn create_location(&self, location: Location) -> Result<()> {
        let mut storage = self.write()?;
        if storage.locations.iter().any(|l| l.id == location.id) {
            return Err(RepoError::AlreadyExists);
        }
        storage.locations.push(location);
        Ok(())
    }

    fn get_location(&self, id: &str) -> Result<Location> {
        self.read()?
            .locations
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_locations(&self) -> Result<Vec<Location>> {
        Ok(self.read()?.locations.clone())
    }

    fn count_locations(&self) -> Result<usize> {
        Ok(self.read()?.locations.len())
    }

    fn update_location(&self, location: &Location) -> Result<()> {
        let mut storage = self.write()?;
        let Some(existing) = storage.locations.iter_mut().find(|l| l.id == location.id) else {
            return Err(RepoError::NotFound);
        };
        *existing = location.clone();
        Ok(())
    }

    fn delete_locations(&self, ids: &[&str]) -> Result<usize> {
        let mut storage = self.write()?;
        let count_before = storage.locations.len();
        storage.locations.retain(|l| !ids.contains(&l.id.as_str()));
        Ok(count_before - storage.locations.len())
    }
}

impl ReportRepo for MemStore {
    fn create_report(&self, report: Report) -> Result<()> {
        let mut storage = self.write()?;
        if storage.reports.iter().any(|r| r.id == report.id) {
            return Err(RepoError::AlreadyExists);
        }
        storage.reports.push(report);
        Ok(())
    }

    fn reports_for_review(&self, location_id: &str, review_id: &str) -> Result<Vec<Report>> {
        Ok(self
            .read()?
            .reports
            .iter()
            .filter(|r| r.location_id.as_str() == location_id && r.review_id.as_str() == review_id)
            .cloned()
            .collect())
    }

    fn delete_reports_for_review(&self, location_id: &str, review_id: &str) -> Result<usize> {
        let mut storage = self.write()?;
        let count_before = storage.reports.len();
        storage.reports.retain(|r| {
            !(r.location_id.as_str() == location_id && r.review_id.as_str() == review_id)
        });
        Ok(count_before - storage.reports.len())
    }

    fn count_reports(&self) -> Result<usize> {
        Ok(self.read()?.reports.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearspot_entities::builders::*;

    #[test]
    fn create_and_get_location() {
        let store = MemStore::new();
        store
            .create_location(Location::build().id("l1").name("Fountain").finish())
            .unwrap();
        assert_eq!("Fountain", store.get_location("l1").unwrap().name);
        assert!(matches!(
            store.get_location("l2"),
            Err(RepoError::NotFound)
        ));
    }

    #[test]
    fn duplicate_location_ids_are_rejected() {
        let store = MemStore::new();
        store.create_location(Location::build().id("l1").finish()).unwrap();
        assert!(matches!(
            store.create_location(Location::build().id("l1").finish()),
            Err(RepoError::AlreadyExists)
        ));
    }

    #[test]
    fn delete_locations_in_one_batch() {
        let store = MemStore::new();
        for id in ["l1", "l2", "l3"] {
            store.create_location(Location::build().id(id).finish()).unwrap();
        }
        // Unknown ids are skipped.
        assert_eq!(2, store.delete_locations(&["l1", "l3", "l4"]).unwrap());
        assert_eq!(1, store.count_locations().unwrap());
    }

    #[test]
    fn reports_are_scoped_to_a_single_review() {
        let store = MemStore::new();
        store
            .create_report(Report::build().location_id("l1").review_id("r1").finish())
            .unwrap();
        store
            .create_report(Report::build().location_id("l1").review_id("r2").finish())
            .unwrap();
        store
            .create_report(Report::build().location_id("l2").review_id("r1").finish())
            .unwrap();

        assert_eq!(1, store.reports_for_review("l1", "r1").unwrap().len());
        assert_eq!(1, store.delete_reports_for_review("l1", "r1").unwrap());
        assert_eq!(2, store.count_reports().unwrap());
    }

    #[test]
    fn restore_and_dump() {
        let store = MemStore::new();
        store.create_location(Location::build().id("l1").finish()).unwrap();
        store
            .restore(
                vec![Location::build().id("l2").finish()],
                vec![Report::build().finish()],
            )
            .unwrap();
        let (locations, reports) = store.dump().unwrap();
        assert_eq!(1, locations.len());
        assert_eq!("l2", locations[0].id.as_str());
        assert_eq!(1, reports.len());
    }
}
