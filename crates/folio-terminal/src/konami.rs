//! Konami code detector

use std::collections::VecDeque;

/// Up Up Down Down Left Right Left Right B A, as `KeyboardEvent.key` values
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown",
    "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowRight",
    "b", "a",
];

/// Watches key presses for the Konami sequence
#[derive(Clone, Debug, Default)]
pub struct KonamiDetector {
    recent: VecDeque<String>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key; returns true when the last ten keys form the sequence
    ///
    /// Comparison ignores case. The window is cleared after a match.
    pub fn push(&mut self, key: &str) -> bool {
        self.recent.push_back(key.to_lowercase());
        if self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }

        let matched = self.recent.len() == KONAMI_SEQUENCE.len()
            && self
                .recent
                .iter()
                .zip(KONAMI_SEQUENCE.iter())
                .all(|(got, want)| got.eq_ignore_ascii_case(want));

        if matched {
            self.recent.clear();
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_detected_once() {
        let mut detector = KonamiDetector::new();
        let hits: Vec<bool> = KONAMI_SEQUENCE.iter().map(|k| detector.push(k)).collect();
        assert_eq!(hits.iter().filter(|&&h| h).count(), 1);
        assert!(hits[9]);

        // Window was reset
        assert!(!detector.push("a"));
    }

    #[test]
    fn test_case_insensitive_with_noise_before() {
        let mut detector = KonamiDetector::new();
        detector.push("x");
        detector.push("Enter");
        let keys = [
            "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown",
            "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowRight",
            "B", "A",
        ];
        let last = keys.iter().map(|k| detector.push(k)).last();
        assert_eq!(last, Some(true));
    }

    #[test]
    fn test_wrong_order() {
        let mut detector = KonamiDetector::new();
        for key in KONAMI_SEQUENCE.iter().rev() {
            assert!(!detector.push(key));
        }
    }
}
