// 🏛️ University - Roster aggregate for enrollees and faculty
//
// Problem solved:
// - One owning context for every campus person
// - Registry-style lookups (by id, by name, filtered views)
// - In-place updates through a closure over a `&mut` borrow

use serde::{Deserialize, Serialize};

use crate::entities::{Enrollee, Faculty, Person};

// ============================================================================
// UNIVERSITY AGGREGATE
// ============================================================================

/// University - holds both campus rosters in memory
///
/// The rosters are append-ordered `Vec`s. Ids are taken at face value:
/// nothing prevents duplicates, lookups return the first match.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct University {
    /// Institution name
    pub name: String,

    /// Founding year
    pub year: i32,

    enrollees: Vec<Enrollee>,
    faculty: Vec<Faculty>,
}

impl University {
    /// Create new empty university
    pub fn new(name: String, year: i32) -> Self {
        University {
            name,
            year,
            enrollees: Vec::new(),
            faculty: Vec::new(),
        }
    }

    /// Add an enrollee to the roster
    pub fn enroll(&mut self, enrollee: Enrollee) {
        self.enrollees.push(enrollee);
    }

    /// Add a faculty member to the roster
    pub fn hire(&mut self, faculty: Faculty) {
        self.faculty.push(faculty);
    }

    /// Remove an enrollee by id, returning the record if it was present
    pub fn withdraw(&mut self, id: i64) -> Option<Enrollee> {
        let index = self.enrollees.iter().position(|e| e.id == id)?;
        Some(self.enrollees.remove(index))
    }

    /// Find enrollee by id (first match)
    pub fn find_by_id(&self, id: i64) -> Option<&Enrollee> {
        self.enrollees.iter().find(|e| e.id == id)
    }

    /// Find enrollee by name (exact match, case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Enrollee> {
        let lower_name = name.to_lowercase();
        self.enrollees
            .iter()
            .find(|e| e.name.to_lowercase() == lower_name)
    }

    /// Enrollees graduating in a given year
    pub fn class_of(&self, year: i32) -> Vec<&Enrollee> {
        self.enrollees
            .iter()
            .filter(|e| e.class_year == year)
            .collect()
    }

    /// Enrollees in a given program (exact match, case-insensitive)
    pub fn majoring_in(&self, major: &str) -> Vec<&Enrollee> {
        let lower_major = major.to_lowercase();
        self.enrollees
            .iter()
            .filter(|e| e.major.to_lowercase() == lower_major)
            .collect()
    }

    /// All enrollees in enrollment order
    pub fn enrollees(&self) -> &[Enrollee] {
        &self.enrollees
    }

    /// All faculty in hiring order
    pub fn faculty(&self) -> &[Faculty] {
        &self.faculty
    }

    /// Count enrollees
    pub fn enrollee_count(&self) -> usize {
        self.enrollees.len()
    }

    /// Count faculty
    pub fn faculty_count(&self) -> usize {
        self.faculty.len()
    }

    /// Update an enrollee in place through a closure
    ///
    /// The closure receives a `&mut` borrow of the stored record, so field
    /// reassignments (including the id itself) stick.
    pub fn update_enrollee<F>(&mut self, id: i64, mut update_fn: F) -> Result<(), String>
    where
        F: FnMut(&mut Enrollee),
    {
        let enrollee = self
            .enrollees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| format!("Enrollee not found: {}", id))?;

        update_fn(enrollee);

        Ok(())
    }

    /// Introduction lines for everyone on campus, enrollees first
    pub fn introductions(&self) -> Vec<String> {
        self.enrollees
            .iter()
            .map(|e| e as &dyn Person)
            .chain(self.faculty.iter().map(|f| f as &dyn Person))
            .map(|p| p.introduction())
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
