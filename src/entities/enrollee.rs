// 🎓 Enrollee Entity - Enrollment record with console-rendered actions
//
// "An enrollee is four plain values and two lines of output"
//
// Problem solved:
// - Holds the enrollment attributes (id, name, class year, major)
// - Renders "Registering ..." / "Dropping ..." action lines
// - Course tokens are opaque: anything printable is accepted as-is
// - The student number is a plain mutable value, not an identity

use serde::{Deserialize, Serialize};
use std::fmt;

use super::person::Person;

// ============================================================================
// ENROLLEE ENTITY
// ============================================================================

/// Enrollee Entity - a student enrolled in an academic program
///
/// All four attributes are supplied at construction and freely reassignable
/// afterwards. The numeric id carries no uniqueness guarantee; callers may
/// renumber an enrollee through any live `&mut` borrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollee {
    /// Student number (mutable, nothing ties it to the record)
    pub id: i64,

    /// Full name (e.g., "John Doe")
    pub name: String,

    /// Graduating class year (e.g., 2023)
    pub class_year: i32,

    /// Program of study (e.g., "Computer Science")
    pub major: String,
}

impl Enrollee {
    /// Create new enrollee with all four attributes
    pub fn new(id: i64, name: String, class_year: i32, major: String) -> Self {
        Enrollee {
            id,
            name,
            class_year,
            major,
        }
    }

    /// Render the registration line for a course token.
    ///
    /// Tokens are never validated: numbers, course codes, or empty strings
    /// all interpolate exactly as given.
    ///
    /// Example: `Registering John Doe for 1`
    pub fn registration_line(&self, course_id: impl fmt::Display) -> String {
        format!("Registering {} for {}", self.name, course_id)
    }

    /// Render the drop line for a course token.
    ///
    /// Example: `Dropping John Doe from 1`
    pub fn drop_line(&self, course_id: impl fmt::Display) -> String {
        format!("Dropping {} from {}", self.name, course_id)
    }

    /// Print the registration line to stdout. Accepts any token, never fails.
    pub fn register_course(&self, course_id: impl fmt::Display) {
        println!("{}", self.registration_line(course_id));
    }

    /// Print the drop line to stdout. Accepts any token, never fails.
    pub fn drop_course(&self, course_id: impl fmt::Display) {
        println!("{}", self.drop_line(course_id));
    }
}

impl Person for Enrollee {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn introduction(&self) -> String {
        format!(
            "I am student {}, majoring in {}, class of {}.",
            self.name, self.major, self.class_year
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn john_doe() -> Enrollee {
        Enrollee::new(1, "John Doe".to_string(), 2023, "Computer Science".to_string())
    }

    #[test]
    fn test_enrollee_creation() {
        let enrollee = john_doe();

        assert_eq!(enrollee.id, 1);
        assert_eq!(enrollee.name, "John Doe");
        assert_eq!(enrollee.class_year, 2023);
        assert_eq!(enrollee.major, "Computer Science");
    }

    #[test]
    fn test_registration_line_numeric_token() {
        let enrollee = john_doe();

        assert_eq!(enrollee.registration_line(1), "Registering John Doe for 1");
    }

    #[test]
    fn test_registration_line_text_token() {
        let enrollee = john_doe();

        assert_eq!(
            enrollee.registration_line("CS 225"),
            "Registering John Doe for CS 225"
        );
    }

    #[test]
    fn test_drop_line() {
        let enrollee = john_doe();

        assert_eq!(enrollee.drop_line(1), "Dropping John Doe from 1");
        assert_eq!(
            enrollee.drop_line("CS 225"),
            "Dropping John Doe from CS 225"
        );
    }

    #[test]
    fn test_empty_token_accepted() {
        // Tokens are opaque, an empty one still formats
        let enrollee = john_doe();

        assert_eq!(enrollee.registration_line(""), "Registering John Doe for ");
        assert_eq!(enrollee.drop_line(""), "Dropping John Doe from ");
    }

    #[test]
    fn test_empty_name_accepted() {
        let enrollee = Enrollee::new(0, String::new(), 2023, "Undeclared".to_string());

        assert_eq!(enrollee.registration_line(7), "Registering  for 7");
    }

    #[test]
    fn test_fields_reassignable_after_construction() {
        let mut enrollee = john_doe();

        enrollee.id = 2;
        enrollee.major = "Mathematics".to_string();

        assert_eq!(enrollee.id, 2);
        assert_eq!(enrollee.major, "Mathematics");
    }

    #[test]
    fn test_introduction() {
        let enrollee = john_doe();

        assert_eq!(
            enrollee.introduction(),
            "I am student John Doe, majoring in Computer Science, class of 2023."
        );
        assert_eq!(enrollee.display_name(), "John Doe");
    }

    proptest! {
        #[test]
        fn construction_reads_back_exactly(
            id in any::<i64>(),
            name in ".*",
            class_year in any::<i32>(),
            major in ".*",
        ) {
            let enrollee = Enrollee::new(id, name.clone(), class_year, major.clone());

            prop_assert_eq!(enrollee.id, id);
            prop_assert_eq!(enrollee.name, name);
            prop_assert_eq!(enrollee.class_year, class_year);
            prop_assert_eq!(enrollee.major, major);
        }

        #[test]
        fn registration_line_holds_for_any_token(course_id in any::<i64>()) {
            let enrollee = john_doe();

            prop_assert_eq!(
                enrollee.registration_line(course_id),
                format!("Registering John Doe for {}", course_id)
            );
        }
    }
}
