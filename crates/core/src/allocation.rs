//! The in-memory allocation working set and the reconciliation diff.
//!
//! The working set mirrors the `assignments` table for the currently loaded
//! scope, keyed by the natural key `(person, project, date)`. Date filtering
//! happens at render time, not here. The diff half ([`orphan_ids`]) feeds the
//! remote reconciler: after a bulk upsert of the desired rows, exactly the
//! orphan ids are deleted, leaving the remote row set equal to the desired
//! set.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Natural key for an allocation: one person, one project, one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssignmentKey {
    pub person_id: DbId,
    pub project_id: DbId,
    pub date: NaiveDate,
}

/// A planned hour allocation, projected to the fields the backing store keys
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub person_id: DbId,
    pub project_id: DbId,
    pub date: NaiveDate,
    pub hours: f64,
}

impl Allocation {
    pub fn key(&self) -> AssignmentKey {
        AssignmentKey {
            person_id: self.person_id,
            project_id: self.project_id,
            date: self.date,
        }
    }
}

/// The working set of allocations, at most one entry per natural key.
///
/// Setting hours to zero (or below) removes the entry: an allocation with no
/// hours does not exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationSet {
    entries: BTreeMap<AssignmentKey, f64>,
}

impl AllocationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw rows. Later rows win on key collision; rows with
    /// non-positive hours are dropped.
    pub fn from_rows(rows: impl IntoIterator<Item = Allocation>) -> Self {
        let mut set = Self::new();
        for row in rows {
            set.set_hours(row.key(), row.hours);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &AssignmentKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn hours(&self, key: &AssignmentKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Insert or replace the hours for a cell. Non-positive hours remove the
    /// cell instead.
    pub fn set_hours(&mut self, key: AssignmentKey, hours: f64) {
        if hours > 0.0 {
            self.entries.insert(key, hours);
        } else {
            self.entries.remove(&key);
        }
    }

    /// Accumulate hours onto a cell (dropping a project onto an already
    /// occupied cell adds to it).
    pub fn add_hours(&mut self, key: AssignmentKey, hours: f64) {
        let total = self.entries.get(&key).copied().unwrap_or(0.0) + hours;
        self.set_hours(key, total);
    }

    pub fn remove(&mut self, key: &AssignmentKey) -> Option<f64> {
        self.entries.remove(key)
    }

    /// Snapshot of the working set, ordered by natural key.
    pub fn rows(&self) -> Vec<Allocation> {
        self.entries
            .iter()
            .map(|(key, &hours)| Allocation {
                person_id: key.person_id,
                project_id: key.project_id,
                date: key.date,
                hours,
            })
            .collect()
    }

    /// Total hours for one person on one day, summed across projects.
    pub fn sum_for_person_day(&self, person_id: DbId, date: NaiveDate) -> f64 {
        self.entries
            .iter()
            .filter(|(key, _)| key.person_id == person_id && key.date == date)
            .map(|(_, &hours)| hours)
            .sum()
    }

    /// Total hours on one day across all people and projects.
    pub fn sum_for_day(&self, date: NaiveDate) -> f64 {
        self.entries
            .iter()
            .filter(|(key, _)| key.date == date)
            .map(|(_, &hours)| hours)
            .sum()
    }
}

/// Ids of remote rows whose natural key is absent from the desired set.
///
/// The reconciler deletes exactly these rows after its upsert pass.
pub fn orphan_ids<I>(desired: &AllocationSet, remote: I) -> Vec<DbId>
where
    I: IntoIterator<Item = (DbId, AssignmentKey)>,
{
    remote
        .into_iter()
        .filter(|(_, key)| !desired.contains(key))
        .map(|(id, _)| id)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn key(person: DbId, project: DbId, day: u32) -> AssignmentKey {
        AssignmentKey {
            person_id: person,
            project_id: project,
            date: d(day),
        }
    }

    #[test]
    fn set_hours_replaces_by_key() {
        let person = Uuid::now_v7();
        let project = Uuid::now_v7();
        let mut set = AllocationSet::new();

        set.set_hours(key(person, project, 3), 4.0);
        set.set_hours(key(person, project, 3), 6.5);

        assert_eq!(set.len(), 1);
        assert_eq!(set.hours(&key(person, project, 3)), Some(6.5));
    }

    #[test]
    fn zero_hours_removes_the_cell() {
        let person = Uuid::now_v7();
        let project = Uuid::now_v7();
        let mut set = AllocationSet::new();

        set.set_hours(key(person, project, 3), 8.0);
        set.set_hours(key(person, project, 3), 0.0);

        assert!(set.is_empty());
    }

    #[test]
    fn add_hours_accumulates() {
        let person = Uuid::now_v7();
        let project = Uuid::now_v7();
        let mut set = AllocationSet::new();

        set.add_hours(key(person, project, 3), 8.0);
        set.add_hours(key(person, project, 3), 8.0);

        assert_eq!(set.hours(&key(person, project, 3)), Some(16.0));
    }

    #[test]
    fn from_rows_keeps_at_most_one_row_per_key() {
        let person = Uuid::now_v7();
        let project = Uuid::now_v7();
        let rows = vec![
            Allocation {
                person_id: person,
                project_id: project,
                date: d(3),
                hours: 4.0,
            },
            Allocation {
                person_id: person,
                project_id: project,
                date: d(3),
                hours: 8.0,
            },
            Allocation {
                person_id: person,
                project_id: project,
                date: d(4),
                hours: -1.0,
            },
        ];

        let set = AllocationSet::from_rows(rows);
        assert_eq!(set.len(), 1);
        assert_eq!(set.hours(&key(person, project, 3)), Some(8.0));
    }

    #[test]
    fn person_day_total_sums_across_projects() {
        let person = Uuid::now_v7();
        let other = Uuid::now_v7();
        let mut set = AllocationSet::new();

        set.set_hours(key(person, Uuid::now_v7(), 3), 5.0);
        set.set_hours(key(person, Uuid::now_v7(), 3), 4.0);
        set.set_hours(key(person, Uuid::now_v7(), 4), 2.0);
        set.set_hours(key(other, Uuid::now_v7(), 3), 8.0);

        assert_eq!(set.sum_for_person_day(person, d(3)), 9.0);
        assert_eq!(set.sum_for_day(d(3)), 17.0);
    }

    #[test]
    fn orphans_are_remote_rows_missing_from_desired() {
        let person = Uuid::now_v7();
        let kept_project = Uuid::now_v7();
        let dropped_project = Uuid::now_v7();

        let mut desired = AllocationSet::new();
        desired.set_hours(key(person, kept_project, 3), 8.0);

        let kept_id = Uuid::now_v7();
        let orphan_id = Uuid::now_v7();
        let remote = vec![
            (kept_id, key(person, kept_project, 3)),
            (orphan_id, key(person, dropped_project, 4)),
        ];

        assert_eq!(orphan_ids(&desired, remote), vec![orphan_id]);
    }

    #[test]
    fn identical_sets_produce_no_orphans() {
        let person = Uuid::now_v7();
        let project = Uuid::now_v7();

        let mut desired = AllocationSet::new();
        desired.set_hours(key(person, project, 3), 8.0);

        let remote = vec![(Uuid::now_v7(), key(person, project, 3))];
        assert!(orphan_ids(&desired, remote).is_empty());
    }
}
