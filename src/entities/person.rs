// Person trait - shared introduction surface for campus people
//
// Every roster entry can state its display name and introduce itself with a
// one-line summary. Rosters hold `&dyn Person` when they only need that much.

/// Anyone on a campus roster.
pub trait Person {
    /// Name as shown in roster listings.
    fn display_name(&self) -> &str;

    /// One-line self description.
    fn introduction(&self) -> String;

    /// Print the introduction to stdout.
    fn introduce(&self) {
        println!("{}", self.introduction());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Visitor {
        name: String,
    }

    impl Person for Visitor {
        fn display_name(&self) -> &str {
            &self.name
        }

        fn introduction(&self) -> String {
            format!("I am visiting as {}.", self.name)
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let visitor = Visitor {
            name: "Alice".to_string(),
        };
        let person: &dyn Person = &visitor;

        assert_eq!(person.display_name(), "Alice");
        assert_eq!(person.introduction(), "I am visiting as Alice.");
    }
}
