//! Acknowledgment phrases that prefix each follow-up question.
//!
//! The choice is cosmetic. Callers inject a [`PhrasePicker`] so tests can pin it.

use rand::seq::IndexedRandom;

/// Chooses one phrase from the configured set.
pub trait PhrasePicker: Send + Sync {
    fn pick<'a>(&self, phrases: &'a [String]) -> Option<&'a str>;
}

/// Uniform random choice from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl PhrasePicker for RandomPicker {
    fn pick<'a>(&self, phrases: &'a [String]) -> Option<&'a str> {
        phrases.choose(&mut rand::rng()).map(String::as_str)
    }
}

/// Always picks the phrase at the same index (wrapping).
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl PhrasePicker for FixedPicker {
    fn pick<'a>(&self, phrases: &'a [String]) -> Option<&'a str> {
        if phrases.is_empty() {
            return None;
        }
        Some(phrases[self.0 % phrases.len()].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases() -> Vec<String> {
        vec!["Got it.".to_string(), "Noted.".to_string()]
    }

    #[test]
    fn test_fixed_picker_is_stable() {
        let p = phrases();
        assert_eq!(FixedPicker(0).pick(&p), Some("Got it."));
        assert_eq!(FixedPicker(1).pick(&p), Some("Noted."));
        assert_eq!(FixedPicker(3).pick(&p), Some("Noted."));
    }

    #[test]
    fn test_random_picker_stays_in_set() {
        let p = phrases();
        for _ in 0..50 {
            let picked = RandomPicker.pick(&p).unwrap();
            assert!(p.iter().any(|s| s == picked));
        }
    }

    #[test]
    fn test_empty_set_picks_nothing() {
        assert_eq!(RandomPicker.pick(&[]), None);
        assert_eq!(FixedPicker(2).pick(&[]), None);
    }
}
