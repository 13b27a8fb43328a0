//! Fixed-length symbol sequences
//!
//! A `Sequence` is either the hidden password or a guess at it.

use super::{ALPHABET_SIZE, Symbol};
use std::fmt;
use std::str::FromStr;

/// Number of symbols in a password
pub const PASSWORD_LENGTH: usize = 4;

/// Number of distinct passwords (8^4)
pub const SEQUENCE_COUNT: usize = ALPHABET_SIZE.pow(PASSWORD_LENGTH as u32);

/// An ordered run of exactly four symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence([Symbol; PASSWORD_LENGTH]);

/// Error type for sequences that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    InvalidLength(usize),
    InvalidSymbol(char),
    IndexOutOfRange(usize),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Sequence must have exactly {PASSWORD_LENGTH} symbols, got {len}"
                )
            }
            Self::InvalidSymbol(ch) => write!(f, "'{ch}' is not a symbol (expected 0-7)"),
            Self::IndexOutOfRange(index) => {
                write!(f, "Sequence index {index} exceeds {}", SEQUENCE_COUNT - 1)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

impl Sequence {
    /// Wrap an array of symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [Symbol; PASSWORD_LENGTH]) -> Self {
        Self(symbols)
    }

    /// Copy a slice of symbols into a sequence
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidLength` unless the slice holds exactly
    /// four symbols.
    pub fn from_slice(symbols: &[Symbol]) -> Result<Self, SequenceError> {
        let array: [Symbol; PASSWORD_LENGTH] = symbols
            .try_into()
            .map_err(|_| SequenceError::InvalidLength(symbols.len()))?;
        Ok(Self(array))
    }

    /// Build the sequence with the given traversal index (0-4095)
    ///
    /// Position 0 is the most significant base-8 digit, so index order is
    /// the same as iterating `a`, `b`, `c`, `d` in nested loops.
    ///
    /// # Errors
    /// Returns `SequenceError::IndexOutOfRange` for indices of 4096 and up.
    ///
    /// # Examples
    /// ```
    /// use password_solver::core::Sequence;
    ///
    /// let seq = Sequence::from_index(0o1234).unwrap();
    /// assert_eq!(seq.to_string(), "{ 1, 2, 3, 4 }");
    /// ```
    pub fn from_index(index: usize) -> Result<Self, SequenceError> {
        if index >= SEQUENCE_COUNT {
            return Err(SequenceError::IndexOutOfRange(index));
        }

        Ok(Self::decode(index))
    }

    /// Base-8 digits of the low 12 bits of `index`
    fn decode(index: usize) -> Self {
        let mut symbols = [Symbol::RedStar; PASSWORD_LENGTH];
        let mut rest = index;
        for slot in symbols.iter_mut().rev() {
            *slot = Symbol::ALL[rest % ALPHABET_SIZE];
            rest /= ALPHABET_SIZE;
        }

        Self(symbols)
    }

    /// Iterate over all 4096 sequences in traversal order
    pub fn all() -> impl ExactSizeIterator<Item = Self> {
        (0..SEQUENCE_COUNT).map(Self::decode)
    }

    /// The symbols as an array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; PASSWORD_LENGTH] {
        &self.0
    }

    /// The symbol at a position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> Symbol {
        self.0[position]
    }

    /// Number of pairwise-distinct symbols in the sequence
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        distinct_count(&self.0)
    }
}

/// Count the pairwise-distinct symbols in a slice
pub(crate) fn distinct_count(symbols: &[Symbol]) -> usize {
    let mut seen = [false; ALPHABET_SIZE];
    for &symbol in symbols {
        seen[symbol.index() as usize] = true;
    }
    seen.iter().filter(|&&s| s).count()
}

impl AsRef<[Symbol]> for Sequence {
    fn as_ref(&self) -> &[Symbol] {
        &self.0
    }
}

impl From<[Symbol; PASSWORD_LENGTH]> for Sequence {
    fn from(symbols: [Symbol; PASSWORD_LENGTH]) -> Self {
        Self(symbols)
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    /// Parse a sequence from digits, ignoring whitespace, commas and braces
    ///
    /// Accepts "0123", "0 1 2 3", "0,1,2,3" and "{ 0, 1, 2, 3 }".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .filter(|ch| !is_separator(*ch))
            .map(|ch| Symbol::from_digit(ch).ok_or(SequenceError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_slice(&symbols)
    }
}

/// Characters allowed between symbol digits in textual input
pub(crate) const fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || matches!(ch, ',' | '{' | '}' | '[' | ']' | '(' | ')')
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{{ {a}, {b}, {c}, {d} }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    #[test]
    fn from_slice_requires_four_symbols() {
        assert!(Sequence::from_slice(&[RedStar, RedHeart, RedPawprint, RedBlossom]).is_ok());
        assert_eq!(
            Sequence::from_slice(&[RedStar, RedHeart, RedPawprint]),
            Err(SequenceError::InvalidLength(3))
        );
        assert_eq!(
            Sequence::from_slice(&[RedStar; 5]),
            Err(SequenceError::InvalidLength(5))
        );
    }

    #[test]
    fn from_index_follows_nested_loop_order() {
        assert_eq!(Sequence::from_index(0).unwrap(), Sequence::new([RedStar; 4]));
        assert_eq!(
            Sequence::from_index(1).unwrap(),
            Sequence::new([RedStar, RedStar, RedStar, RedHeart])
        );
        assert_eq!(
            Sequence::from_index(8).unwrap(),
            Sequence::new([RedStar, RedStar, RedHeart, RedStar])
        );
        assert_eq!(
            Sequence::from_index(SEQUENCE_COUNT - 1).unwrap(),
            Sequence::new([BlueNote; 4])
        );
        assert_eq!(
            Sequence::from_index(SEQUENCE_COUNT),
            Err(SequenceError::IndexOutOfRange(4096))
        );
    }

    #[test]
    fn all_yields_every_sequence_once() {
        assert_eq!(Sequence::all().len(), SEQUENCE_COUNT);

        let all: Vec<Sequence> = Sequence::all().collect();
        for (index, seq) in all.iter().enumerate() {
            assert_eq!(Sequence::from_index(index).as_ref(), Ok(seq));
        }
        assert_eq!(all.len(), 4096);

        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 4096);
    }

    #[test]
    fn parse_accepts_common_layouts() {
        let expected = Sequence::new([RedHeart, RedStar, RedBlossom, RedPawprint]);
        for text in ["1032", "1 0 3 2", "1,0,3,2", "{ 1, 0, 3, 2 }"] {
            assert_eq!(text.parse::<Sequence>().unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!("0128".parse::<Sequence>(), Err(SequenceError::InvalidSymbol('8')));
        assert_eq!("01x3".parse::<Sequence>(), Err(SequenceError::InvalidSymbol('x')));
        assert_eq!("012".parse::<Sequence>(), Err(SequenceError::InvalidLength(3)));
        assert_eq!("01234".parse::<Sequence>(), Err(SequenceError::InvalidLength(5)));
    }

    #[test]
    fn distinct_count_counts_repeats_once() {
        assert_eq!("0123".parse::<Sequence>().unwrap().distinct_count(), 4);
        assert_eq!("4546".parse::<Sequence>().unwrap().distinct_count(), 3);
        assert_eq!("7777".parse::<Sequence>().unwrap().distinct_count(), 1);
    }

    #[test]
    fn display_matches_brace_format() {
        let seq: Sequence = "4546".parse().unwrap();
        assert_eq!(seq.to_string(), "{ 4, 5, 4, 6 }");
    }
}
