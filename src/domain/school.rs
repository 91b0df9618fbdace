use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// A student as shown on report pages and in the wizard audience picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub full_name: String,
    pub class_name: String,
    pub group_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub contact_number: String,
    pub state: String,
    pub focus_areas: Vec<String>,
}

impl Student {
    /// First letters of the first two name parts, for the avatar disc.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase()
    }

    /// Case-insensitive name match for the audience search box.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.full_name.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str) -> Student {
        Student {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            class_name: "Class 7 - A".to_string(),
            group_name: "Group A".to_string(),
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(2012, 4, 18).unwrap(),
            email: "test@example.com".to_string(),
            contact_number: "+91 90000 00000".to_string(),
            state: "Kerala".to_string(),
            focus_areas: vec![],
        }
    }

    #[test]
    fn test_initials_from_two_part_name() {
        assert_eq!(student("Aisha Verma").initials(), "AV");
    }

    #[test]
    fn test_initials_ignore_extra_name_parts() {
        assert_eq!(student("rahul kumar nair").initials(), "RK");
    }

    #[test]
    fn test_initials_single_name() {
        assert_eq!(student("Priya").initials(), "P");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let s = student("Aisha Verma");
        assert!(s.matches("aisha"));
        assert!(s.matches("VERMA"));
        assert!(s.matches("  sha "));
        assert!(!s.matches("rahul"));
    }

    #[test]
    fn test_empty_query_matches_everyone() {
        assert!(student("Aisha Verma").matches(""));
        assert!(student("Aisha Verma").matches("   "));
    }
}
