//! Password symbol representation
//!
//! The palace lock shows eight engraved symbols, four red and four blue.
//! Only equality matters to the deduction; the numeric index is what the
//! CLI accepts and prints.

use std::fmt;

/// Number of distinct symbols a password can be drawn from
pub const ALPHABET_SIZE: usize = 8;

/// One of the eight lock symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symbol {
    RedStar = 0,
    RedHeart = 1,
    RedPawprint = 2,
    RedBlossom = 3,
    BluePuzzle = 4,
    BlueLeaf = 5,
    BlueCrescent = 6,
    BlueNote = 7,
}

impl Symbol {
    /// Every symbol, in index order
    pub const ALL: [Self; ALPHABET_SIZE] = [
        Self::RedStar,
        Self::RedHeart,
        Self::RedPawprint,
        Self::RedBlossom,
        Self::BluePuzzle,
        Self::BlueLeaf,
        Self::BlueCrescent,
        Self::BlueNote,
    ];

    /// Look up a symbol by its index (0-7)
    ///
    /// # Examples
    /// ```
    /// use password_solver::core::Symbol;
    ///
    /// assert_eq!(Symbol::from_index(3), Some(Symbol::RedBlossom));
    /// assert_eq!(Symbol::from_index(8), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALPHABET_SIZE {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Look up a symbol by its ASCII digit (`'0'`-`'7'`)
    #[inline]
    #[must_use]
    pub const fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '0'..='7' => Self::from_index(ch as u8 - b'0'),
            _ => None,
        }
    }

    /// The symbol's index (0-7)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable name of the engraving
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RedStar => "red star",
            Self::RedHeart => "red heart",
            Self::RedPawprint => "red pawprint",
            Self::RedBlossom => "red blossom",
            Self::BluePuzzle => "blue puzzle",
            Self::BlueLeaf => "blue leaf",
            Self::BlueCrescent => "blue crescent",
            Self::BlueNote => "blue note",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
