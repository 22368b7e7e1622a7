//! Built-in doctor list used when the matching service is unreachable.
//!
//! Static data: the same list is returned for every request.

use crate::types::{DoctorMatch, DoctorOption};

fn doctor(id: &str, name: &str, specialty: &str, rating: f32, slots: &[&str]) -> DoctorOption {
    DoctorOption {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        rating: Some(rating),
        available_slots: slots.iter().map(|s| s.to_string()).collect(),
        estimated_wait_time: None,
    }
}

/// The fixed fallback candidates.
pub fn fallback_doctors() -> DoctorMatch {
    DoctorMatch {
        recommended: Some(doctor(
            "fallback-001",
            "Dr. Sarah Johnson",
            "General Medicine",
            4.8,
            &["Today at 14:00", "Today at 16:00", "Tomorrow at 09:00"],
        )),
        alternatives: vec![
            doctor(
                "fallback-002",
                "Dr. Michael Chen",
                "Internal Medicine",
                4.6,
                &["Tomorrow at 11:00", "Tomorrow at 15:00"],
            ),
            doctor(
                "fallback-003",
                "Dr. Priya Sharma",
                "Family Medicine",
                4.7,
                &["Tomorrow at 10:00"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_list_is_not_empty() {
        let list = fallback_doctors();
        assert!(list.recommended.is_some());
        assert_eq!(list.candidates().count(), 3);
    }

    #[test]
    fn test_fallback_list_is_static() {
        assert_eq!(fallback_doctors(), fallback_doctors());
    }

    #[test]
    fn test_every_fallback_doctor_has_slots() {
        for doc in fallback_doctors().candidates() {
            assert!(!doc.available_slots.is_empty(), "{} has no slots", doc.name);
        }
    }
}
