// 🧑‍🏫 Faculty Entity - Teaching staff with a home department

use serde::{Deserialize, Serialize};

use super::person::Person;

/// Faculty member on the campus roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    /// Full name (e.g., "Dr. Smith")
    pub name: String,

    /// Age in years
    pub age: i32,

    /// Home department (e.g., "Mathematics")
    pub department: String,
}

impl Faculty {
    /// Create new faculty member
    pub fn new(name: String, age: i32, department: String) -> Self {
        Faculty {
            name,
            age,
            department,
        }
    }
}

impl Person for Faculty {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn introduction(&self) -> String {
        format!(
            "I am faculty {}, from the {} department, age {}.",
            self.name, self.department, self.age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_creation() {
        let faculty = Faculty::new("Dr. Smith".to_string(), 50, "Mathematics".to_string());

        assert_eq!(faculty.name, "Dr. Smith");
        assert_eq!(faculty.age, 50);
        assert_eq!(faculty.department, "Mathematics");
    }

    #[test]
    fn test_introduction() {
        let faculty = Faculty::new("Dr. Smith".to_string(), 50, "Mathematics".to_string());

        assert_eq!(
            faculty.introduction(),
            "I am faculty Dr. Smith, from the Mathematics department, age 50."
        );
    }
}
