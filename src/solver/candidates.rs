//! Per-position candidate tracking
//!
//! Each position keeps an ordered list of the symbols still consistent with
//! the feedback so far. The order matters: it is the iteration order of the
//! arrangement search, so the first valid arrangement is deterministic.

use crate::core::{Feedback, Mark, PASSWORD_LENGTH, Sequence, Symbol, distinct_count};
use std::fmt;

/// Candidate symbols for each password position
///
/// A position starts *open*: nothing about it is known, and probes append
/// every symbol proven present elsewhere. A Right during probing pins the
/// position, after which probes no longer write to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    slots: [Vec<Symbol>; PASSWORD_LENGTH],
    open: [bool; PASSWORD_LENGTH],
}

/// A guessed symbol that the candidate set cannot account for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction {
    /// Position whose candidates lacked the symbol
    pub position: usize,
    /// The symbol that should have been a candidate
    pub symbol: Symbol,
}

impl CandidateSet {
    /// Create a candidate set with every position open and unconstrained
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
            open: [true; PASSWORD_LENGTH],
        }
    }

    /// Candidates for one position, in search order
    ///
    /// # Panics
    /// Panics if position >= 4
    #[must_use]
    pub fn at(&self, position: usize) -> &[Symbol] {
        &self.slots[position]
    }

    /// Whether probes may still add symbols to a position
    ///
    /// # Panics
    /// Panics if position >= 4
    #[must_use]
    pub const fn is_open(&self, position: usize) -> bool {
        self.open[position]
    }

    /// Merge the feedback of a probe guess
    ///
    /// - Right pins the position to the guessed symbol and offers the symbol
    ///   to every other open position, since it may repeat there
    /// - Misplaced offers the symbol to every open position except its own
    /// - Incorrect contributes nothing
    ///
    /// Returns how many distinct symbols the probe proved present. Probe
    /// guesses never repeat a symbol, so that is one per Right or Misplaced.
    pub fn absorb_probe(&mut self, guess: &Sequence, feedback: &Feedback) -> usize {
        let mut confirmed = 0;

        for (i, (&symbol, &mark)) in guess.symbols().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Right => {
                    self.slots[i] = vec![symbol];
                    self.open[i] = false;
                    self.offer(symbol, None);
                }
                Mark::Misplaced => self.offer(symbol, Some(i)),
                Mark::Incorrect => continue,
            }
            confirmed += 1;
        }

        confirmed
    }

    fn offer(&mut self, symbol: Symbol, except: Option<usize>) {
        for (j, slot) in self.slots.iter_mut().enumerate() {
            if self.open[j] && Some(j) != except {
                slot.push(symbol);
            }
        }
    }

    /// Narrow the candidates with the feedback of a search guess
    ///
    /// Right collapses the position to the guessed symbol; Misplaced and
    /// Incorrect strike the guessed symbol from that position.
    ///
    /// # Errors
    /// Returns a `Contradiction` when a struck symbol was not a candidate.
    /// Positions before the offending one have already been updated.
    pub fn refine(&mut self, guess: &Sequence, feedback: &Feedback) -> Result<(), Contradiction> {
        for (position, (&symbol, &mark)) in
            guess.symbols().iter().zip(feedback.marks()).enumerate()
        {
            let slot = &mut self.slots[position];
            if mark == Mark::Right {
                *slot = vec![symbol];
            } else if let Some(index) = slot.iter().position(|&s| s == symbol) {
                slot.remove(index);
            } else {
                return Err(Contradiction { position, symbol });
            }
        }

        Ok(())
    }

    /// Find the first arrangement using exactly `distinct` different symbols
    ///
    /// Positions are iterated as nested loops, position 0 outermost, each in
    /// candidate order. Returns `None` when no arrangement fits.
    #[must_use]
    pub fn first_arrangement(&self, distinct: usize) -> Option<Sequence> {
        let mut chosen = [Symbol::RedStar; PASSWORD_LENGTH];
        self.search(0, distinct, &mut chosen)
            .then_some(Sequence::new(chosen))
    }

    fn search(&self, position: usize, distinct: usize, chosen: &mut [Symbol; PASSWORD_LENGTH]) -> bool {
        if position == PASSWORD_LENGTH {
            return distinct_count(chosen) == distinct;
        }

        for &symbol in &self.slots[position] {
            chosen[position] = symbol;
            if self.search(position + 1, distinct, chosen) {
                return true;
            }
        }

        false
    }

    /// Number of arrangements the candidate lists span, ignoring the
    /// distinct-symbol constraint
    #[must_use]
    pub fn span(&self) -> usize {
        self.slots.iter().map(Vec::len).product()
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("{")?;
            for (j, symbol) in slot.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{symbol}")?;
            }
            f.write_str("}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "symbol {} is not a candidate at position {}",
            self.symbol, self.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Incorrect, Misplaced, Right};

    fn seq(text: &str) -> Sequence {
        text.parse().unwrap()
    }

    fn symbols(text: &str) -> Vec<Symbol> {
        text.chars().filter_map(Symbol::from_digit).collect()
    }

    #[test]
    fn new_set_is_open_and_empty() {
        let set = CandidateSet::new();
        for i in 0..PASSWORD_LENGTH {
            assert!(set.is_open(i));
            assert!(set.at(i).is_empty());
        }
        assert_eq!(set.first_arrangement(1), None);
    }

    #[test]
    fn misplaced_probe_offers_symbol_elsewhere() {
        let mut set = CandidateSet::new();
        let confirmed = set.absorb_probe(&seq("0123"), &Feedback::new([Misplaced; 4]));

        assert_eq!(confirmed, 4);
        assert_eq!(set.at(0), symbols("123"));
        assert_eq!(set.at(1), symbols("023"));
        assert_eq!(set.at(2), symbols("013"));
        assert_eq!(set.at(3), symbols("012"));
    }

    #[test]
    fn right_probe_pins_position_and_keeps_symbol_for_others() {
        let mut set = CandidateSet::new();
        let feedback = Feedback::new([Right, Incorrect, Incorrect, Incorrect]);
        assert_eq!(set.absorb_probe(&seq("0123"), &feedback), 1);

        assert!(!set.is_open(0));
        assert_eq!(set.at(0), symbols("0"));
        // The pinned symbol may repeat, so open positions keep it
        assert_eq!(set.at(1), symbols("0"));
        assert_eq!(set.at(2), symbols("0"));
        assert_eq!(set.at(3), symbols("0"));
    }

    #[test]
    fn second_probe_skips_pinned_positions() {
        let mut set = CandidateSet::new();
        assert_eq!(set.absorb_probe(&seq("0123"), &Feedback::new([Incorrect; 4])), 0);

        let feedback = Feedback::new([Right, Right, Misplaced, Incorrect]);
        assert_eq!(set.absorb_probe(&seq("4567"), &feedback), 3);

        assert_eq!(set.at(0), symbols("4"));
        assert_eq!(set.at(1), symbols("5"));
        assert_eq!(set.at(2), symbols("45"));
        assert_eq!(set.at(3), symbols("456"));
        assert_eq!(set.span(), 6);
    }

    #[test]
    fn first_arrangement_honours_distinct_count() {
        let mut set = CandidateSet::new();
        set.absorb_probe(&seq("0123"), &Feedback::new([Incorrect; 4]));
        set.absorb_probe(
            &seq("4567"),
            &Feedback::new([Right, Right, Misplaced, Incorrect]),
        );

        assert_eq!(set.first_arrangement(3), Some(seq("4546")));
        assert_eq!(set.first_arrangement(2), Some(seq("4544")));
        assert_eq!(set.first_arrangement(4), None);
    }

    #[test]
    fn first_arrangement_of_permutation() {
        let mut set = CandidateSet::new();
        set.absorb_probe(&seq("0123"), &Feedback::new([Misplaced; 4]));
        assert_eq!(set.first_arrangement(4), Some(seq("1032")));
    }

    #[test]
    fn refine_collapses_and_strikes() {
        let mut set = CandidateSet::new();
        set.absorb_probe(&seq("0123"), &Feedback::new([Misplaced; 4]));

        let feedback = Feedback::new([Right, Misplaced, Incorrect, Misplaced]);
        set.refine(&seq("1032"), &feedback).unwrap();

        assert_eq!(set.at(0), symbols("1"));
        assert_eq!(set.at(1), symbols("23"));
        assert_eq!(set.at(2), symbols("01"));
        assert_eq!(set.at(3), symbols("01"));
    }

    #[test]
    fn refine_reports_missing_candidate() {
        let mut set = CandidateSet::new();
        set.absorb_probe(&seq("0123"), &Feedback::new([Misplaced; 4]));

        // 0 was never a candidate for position 0
        let result = set.refine(&seq("0123"), &Feedback::new([Incorrect; 4]));
        assert_eq!(
            result,
            Err(Contradiction {
                position: 0,
                symbol: Symbol::RedStar
            })
        );
    }

    #[test]
    fn display_lists_each_position() {
        let mut set = CandidateSet::new();
        set.absorb_probe(
            &seq("4567"),
            &Feedback::new([Right, Right, Misplaced, Incorrect]),
        );
        assert_eq!(set.to_string(), "[{4}, {5}, {4,5}, {4,5,6}]");
    }
}
