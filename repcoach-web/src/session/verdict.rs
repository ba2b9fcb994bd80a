//! Rep verdicts and the session's rep counter

/// Why a rep was accepted without comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeReason {
    /// No reference loaded for the module
    NoReference,
    /// Reference recording too short to compare against
    ShortReference,
    /// Captured segment too short to judge
    ShortCapture,
    /// No captured frame could be normalized (hips never visible)
    Unscorable,
}

/// Outcome of scoring one rep
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    Match { distance: f32 },
    Mismatch { distance: f32 },
    /// Accepted unconditionally; the user is never blocked on data quality
    Practice(PracticeReason),
}

impl Verdict {
    /// Counts toward the correct-rep total
    pub fn is_correct(&self) -> bool {
        !matches!(self, Verdict::Mismatch { .. })
    }

    pub fn distance(&self) -> Option<f32> {
        match *self {
            Verdict::Match { distance } | Verdict::Mismatch { distance } => Some(distance),
            Verdict::Practice(_) => None,
        }
    }

    pub fn is_practice(&self) -> bool {
        matches!(self, Verdict::Practice(_))
    }
}

/// Running totals for one session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepCounter {
    pub total: u32,
    pub correct: u32,
}

impl RepCounter {
    pub fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        if verdict.is_correct() {
            self.correct += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter() {
        let mut counter = RepCounter::default();
        counter.record(&Verdict::Match { distance: 0.05 });
        counter.record(&Verdict::Mismatch { distance: 0.4 });
        counter.record(&Verdict::Practice(PracticeReason::NoReference));
        assert_eq!(counter, RepCounter { total: 3, correct: 2 });
        counter.reset();
        assert_eq!(counter.total, 0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Verdict::Mismatch { distance: 0.3 }.distance(), Some(0.3));
        assert_eq!(Verdict::Practice(PracticeReason::ShortCapture).distance(), None);
    }
}
