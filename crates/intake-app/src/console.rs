//! Terminal rendering for doctor lists and booking results.

use intake_client::{BookingConfirmation, DoctorMatch, DoctorOption, Outcome};

/// Numbered list of candidate doctors, recommended first.
pub fn render_doctors(matched: &Outcome<DoctorMatch>) -> String {
    let mut out = String::new();
    if matched.is_fallback() {
        out.push_str(
            "⚠️ The matching service is unavailable right now. \
             Here are doctors from our standby list:\n\n",
        );
    } else {
        out.push_str("👨‍⚕️ **Available doctors:**\n\n");
    }

    let Some(doctors) = matched.value() else {
        out.push_str("No doctors could be found.\n");
        return out;
    };

    for (i, doctor) in doctors.candidates().enumerate() {
        let tag = if i == 0 && doctors.recommended.is_some() {
            " ⭐ recommended"
        } else {
            ""
        };
        out.push_str(&format!("{}. {}{}\n", i + 1, describe(doctor), tag));
    }
    out
}

fn describe(doctor: &DoctorOption) -> String {
    let mut line = format!("{} ({})", doctor.name, doctor.specialty);
    if let Some(rating) = doctor.rating {
        line.push_str(&format!(" ★ {:.1}", rating));
    }
    if let Some(ref wait) = doctor.estimated_wait_time {
        line.push_str(&format!(", wait {}", wait));
    }
    line
}

/// Numbered list of a doctor's open slots.
pub fn render_slots(doctor: &DoctorOption) -> String {
    let mut out = format!("🗓️ Open slots with {}:\n", doctor.name);
    for (i, slot) in doctor.available_slots.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, slot));
    }
    out
}

/// Result line for a booking attempt.
pub fn render_booking(
    booked: &Outcome<BookingConfirmation>,
    doctor: &DoctorOption,
    slot: &str,
) -> String {
    match booked {
        Outcome::Live(confirmation) | Outcome::Fallback(confirmation) => {
            let mut out = format!(
                "✅ Appointment confirmed with {} at {}.",
                doctor.name, confirmation.slot
            );
            if let Some(ref message) = confirmation.message {
                out.push(' ');
                out.push_str(message);
            }
            out
        }
        Outcome::Unreachable => format!(
            "⚠️ We could not confirm your appointment with {} at {}. \
             Your request was not recorded; please contact the clinic to book.",
            doctor.name, slot
        ),
    }
}

/// Parse a 1-based menu choice.
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_client::fallback_doctors;

    #[test]
    fn test_render_live_doctors() {
        let text = render_doctors(&Outcome::Live(fallback_doctors()));
        assert!(text.starts_with("👨‍⚕️"));
        assert!(text.contains("1. Dr. Sarah Johnson (General Medicine) ★ 4.8 ⭐ recommended"));
        assert!(text.contains("3. Dr. Priya Sharma"));
    }

    #[test]
    fn test_render_fallback_doctors_warns() {
        let text = render_doctors(&Outcome::Fallback(fallback_doctors()));
        assert!(text.contains("standby list"));
    }

    #[test]
    fn test_render_slots() {
        let doctors = fallback_doctors();
        let text = render_slots(doctors.recommended.as_ref().unwrap());
        assert!(text.contains("1. Today at 14:00"));
        assert!(text.contains("3. Tomorrow at 09:00"));
    }

    #[test]
    fn test_render_booking_unreachable_is_not_success() {
        let doctors = fallback_doctors();
        let doctor = doctors.recommended.as_ref().unwrap();
        let text = render_booking(&Outcome::Unreachable, doctor, "Today at 14:00");
        assert!(!text.contains("confirmed with"));
        assert!(text.contains("could not confirm"));
    }

    #[test]
    fn test_render_booking_live() {
        let doctors = fallback_doctors();
        let doctor = doctors.recommended.as_ref().unwrap();
        let booked = Outcome::Live(BookingConfirmation {
            doctor_id: doctor.id.clone(),
            slot: "Today at 14:00".to_string(),
            message: Some("See you soon.".to_string()),
        });
        let text = render_booking(&booked, doctor, "Today at 14:00");
        assert_eq!(
            text,
            "✅ Appointment confirmed with Dr. Sarah Johnson at Today at 14:00. See you soon."
        );
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 3), Some(0));
        assert_eq!(parse_choice(" 3 ", 3), Some(2));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("two", 3), None);
    }
}
