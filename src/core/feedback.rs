//! Guess feedback calculation and representation
//!
//! Every guessed position is classified as:
//! - Right (symbol in the correct position)
//! - Misplaced (symbol present elsewhere, respecting repeat counts)
//! - Incorrect (symbol not accounted for by any remaining secret position)

use super::{ALPHABET_SIZE, PASSWORD_LENGTH, Sequence};
use std::fmt;

/// Outcome for a single guessed position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Right,
    Misplaced,
    Incorrect,
}

impl Mark {
    /// True for Right and Misplaced, i.e. the symbol is in the secret
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Right | Self::Misplaced)
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Right => "Right",
            Self::Misplaced => "Misplaced",
            Self::Incorrect => "Incorrect",
        };
        f.write_str(label)
    }
}

/// Per-position feedback for one guess
///
/// Produced once by [`Feedback::calculate`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; PASSWORD_LENGTH]);

impl Feedback {
    /// All positions right
    pub const PERFECT: Self = Self([Mark::Right; PASSWORD_LENGTH]);

    /// Wrap raw marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; PASSWORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Calculate the feedback when `guess` is submitted against `secret`
    ///
    /// Implements Mastermind's multiset rules: a symbol guessed twice but
    /// present once in the secret earns at most one mark.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Right; every other secret symbol
    ///    goes into the pool of unmatched symbols
    /// 2. Second pass: a non-Right position whose symbol is still in the
    ///    pool is Misplaced and consumes one pooled occurrence; the rest are
    ///    Incorrect
    ///
    /// # Examples
    /// ```
    /// use password_solver::core::{Feedback, Mark, Sequence};
    ///
    /// let secret: Sequence = "4546".parse().unwrap();
    /// let guess: Sequence = "4567".parse().unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &secret);
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Right, Mark::Right, Mark::Misplaced, Mark::Incorrect]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Sequence, secret: &Sequence) -> Self {
        let mut marks = [Mark::Incorrect; PASSWORD_LENGTH];
        let mut unmatched = [0u8; ALPHABET_SIZE];

        // First pass: exact position matches
        for (i, (g, s)) in guess.symbols().iter().zip(secret.symbols()).enumerate() {
            if g == s {
                marks[i] = Mark::Right;
            } else {
                unmatched[s.index() as usize] += 1;
            }
        }

        // Second pass: present elsewhere, one pooled occurrence per mark
        for (mark, g) in marks.iter_mut().zip(guess.symbols()) {
            if *mark == Mark::Right {
                continue;
            }
            let pooled = &mut unmatched[g.index() as usize];
            if *pooled > 0 {
                *pooled -= 1;
                *mark = Mark::Misplaced;
            }
        }

        Self(marks)
    }

    /// The marks, one per position
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; PASSWORD_LENGTH] {
        &self.0
    }

    /// The mark at a position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Check if every position is Right
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{{ {a}, {b}, {c}, {d} }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Incorrect, Misplaced, Right};
    use proptest::prelude::*;

    fn seq(text: &str) -> Sequence {
        text.parse().unwrap()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count(Right), 4);
        assert_eq!(Feedback::PERFECT.count(Misplaced), 0);
    }

    #[test]
    fn identical_sequences_are_perfect() {
        for text in ["0123", "7777", "4546", "0000"] {
            let s = seq(text);
            assert!(Feedback::calculate(&s, &s).is_perfect());
        }
    }

    #[test]
    fn disjoint_sequences_are_all_incorrect() {
        let feedback = Feedback::calculate(&seq("0123"), &seq("4567"));
        assert_eq!(feedback.marks(), &[Incorrect; 4]);
    }

    #[test]
    fn permutation_is_all_misplaced() {
        let feedback = Feedback::calculate(&seq("0123"), &seq("1032"));
        assert_eq!(feedback.marks(), &[Misplaced; 4]);
    }

    #[test]
    fn right_takes_priority_over_misplaced() {
        // Secret holds a single 0, already matched at position 3
        let feedback = Feedback::calculate(&seq("0000"), &seq("1230"));
        assert_eq!(feedback.marks(), &[Incorrect, Incorrect, Incorrect, Right]);
    }

    #[test]
    fn duplicate_guess_symbol_marked_once() {
        // Secret holds one 5; only the first unmatched 5 in the guess earns it
        let feedback = Feedback::calculate(&seq("5500"), &seq("1253"));
        assert_eq!(feedback.marks(), &[Misplaced, Incorrect, Incorrect, Incorrect]);
    }

    #[test]
    fn duplicate_secret_symbol_marked_per_occurrence() {
        let feedback = Feedback::calculate(&seq("0123"), &seq("1010"));
        assert_eq!(feedback.marks(), &[Misplaced, Misplaced, Incorrect, Incorrect]);
    }

    #[test]
    fn second_probe_on_repeating_secret() {
        let feedback = Feedback::calculate(&seq("4567"), &seq("4546"));
        assert_eq!(feedback.marks(), &[Right, Right, Misplaced, Incorrect]);
    }

    #[test]
    fn display_lists_marks() {
        let feedback = Feedback::new([Right, Misplaced, Incorrect, Right]);
        assert_eq!(
            feedback.to_string(),
            "{ Right, Misplaced, Incorrect, Right }"
        );
    }

    fn symbol_counts(symbols: &[crate::core::Symbol]) -> [usize; ALPHABET_SIZE] {
        let mut counts = [0; ALPHABET_SIZE];
        for s in symbols {
            counts[s.index() as usize] += 1;
        }
        counts
    }

    proptest! {
        #[test]
        fn marks_never_exceed_multiset_intersection(secret in 0..4096usize, guess in 0..4096usize) {
            let secret = Sequence::from_index(secret).unwrap();
            let guess = Sequence::from_index(guess).unwrap();
            let feedback = Feedback::calculate(&guess, &secret);

            prop_assert!(feedback.count(Right) + feedback.count(Misplaced) <= PASSWORD_LENGTH);

            let secret_counts = symbol_counts(secret.symbols());
            let guess_counts = symbol_counts(guess.symbols());
            let mut marked = [0usize; ALPHABET_SIZE];
            for (mark, symbol) in feedback.marks().iter().zip(guess.symbols()) {
                if mark.is_present() {
                    marked[symbol.index() as usize] += 1;
                }
            }
            for i in 0..ALPHABET_SIZE {
                prop_assert!(marked[i] <= secret_counts[i].min(guess_counts[i]));
            }
        }

        #[test]
        fn right_marks_match_positions(secret in 0..4096usize, guess in 0..4096usize) {
            let secret = Sequence::from_index(secret).unwrap();
            let guess = Sequence::from_index(guess).unwrap();
            let feedback = Feedback::calculate(&guess, &secret);

            for i in 0..PASSWORD_LENGTH {
                prop_assert_eq!(
                    feedback.mark_at(i) == Right,
                    guess.symbol_at(i) == secret.symbol_at(i)
                );
            }
        }
    }
}
