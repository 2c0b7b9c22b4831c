//! Algorithm catalogue: names, descriptions, complexities and listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::listing;
use crate::domain::error::AlgoscopeError;

/// The three step-emitting sorts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
}

impl SortAlgorithm {
    pub const ALL: [Self; 3] = [Self::Bubble, Self::Insertion, Self::Selection];

    /// Lowercase key used on the command line and in JSON.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bubble => {
                "Bubble Sort walks the list repeatedly, comparing adjacent elements and \
                 swapping any pair that is out of order. Each pass carries the largest \
                 remaining value to the end."
            }
            Self::Insertion => {
                "Insertion Sort grows a sorted prefix one element at a time, shifting \
                 larger elements right until the new key fits."
            }
            Self::Selection => {
                "Selection Sort finds the minimum of the unsorted suffix and swaps it \
                 into place at the front of that suffix."
            }
        }
    }

    #[must_use]
    pub const fn time_complexity(self) -> &'static str {
        "O(n²)"
    }

    #[must_use]
    pub const fn space_complexity(self) -> &'static str {
        "O(1)"
    }

    /// Code listing the runner's `line` markers index into.
    #[must_use]
    pub const fn listing(self) -> &'static [&'static str] {
        match self {
            Self::Bubble => listing::BUBBLE,
            Self::Insertion => listing::INSERTION,
            Self::Selection => listing::SELECTION,
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgoscopeError;

    /// Parses a key case-insensitively; the display name is accepted too.
    ///
    /// ```
    /// use algoscope::algorithms::SortAlgorithm;
    ///
    /// assert_eq!("Insertion".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Insertion);
    /// assert_eq!("selection sort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Selection);
    /// assert!("quick".parse::<SortAlgorithm>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|alg| alg.key().eq_ignore_ascii_case(wanted) || alg.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AlgoscopeError::UnknownAlgorithm(wanted.to_string()))
    }
}

/// The three step-emitting searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    #[default]
    Linear,
    Binary,
    Jump,
}

impl SearchAlgorithm {
    pub const ALL: [Self; 3] = [Self::Linear, Self::Binary, Self::Jump];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
            Self::Jump => "jump",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear Search",
            Self::Binary => "Binary Search",
            Self::Jump => "Jump Search",
        }
    }

    /// Name without the " Search" suffix, as used in log lines.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Binary => "Binary",
            Self::Jump => "Jump",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Linear => {
                "Linear Search checks every element in order until it meets the target \
                 or runs out of elements. It works on unsorted input."
            }
            Self::Binary => {
                "Binary Search halves a sorted search interval on every probe, comparing \
                 the middle element with the target."
            }
            Self::Jump => {
                "Jump Search skips through a sorted array in blocks of about the square \
                 root of its length, then scans the one block that can hold the target."
            }
        }
    }

    #[must_use]
    pub const fn time_complexity(self) -> &'static str {
        match self {
            Self::Linear => "O(n)",
            Self::Binary => "O(log n)",
            Self::Jump => "O(√n)",
        }
    }

    #[must_use]
    pub const fn space_complexity(self) -> &'static str {
        "O(1)"
    }

    #[must_use]
    pub const fn listing(self) -> &'static [&'static str] {
        match self {
            Self::Linear => listing::LINEAR,
            Self::Binary => listing::BINARY,
            Self::Jump => listing::JUMP,
        }
    }

    /// Whether the runner refuses unsorted input.
    #[must_use]
    pub const fn requires_sorted(self) -> bool {
        matches!(self, Self::Binary | Self::Jump)
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = AlgoscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|alg| alg.key().eq_ignore_ascii_case(wanted) || alg.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AlgoscopeError::UnknownAlgorithm(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for alg in SortAlgorithm::ALL {
            assert_eq!(alg.key().parse::<SortAlgorithm>().unwrap(), alg);
        }
        for alg in SearchAlgorithm::ALL {
            assert_eq!(alg.key().to_uppercase().parse::<SearchAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "interpolation".parse::<SearchAlgorithm>().unwrap_err();
        assert!(matches!(err, AlgoscopeError::UnknownAlgorithm(name) if name == "interpolation"));
    }

    #[test]
    fn only_binary_and_jump_need_sorted_input() {
        assert!(!SearchAlgorithm::Linear.requires_sorted());
        assert!(SearchAlgorithm::Binary.requires_sorted());
        assert!(SearchAlgorithm::Jump.requires_sorted());
    }

    #[test]
    fn every_algorithm_has_a_listing() {
        for alg in SortAlgorithm::ALL {
            assert!(!alg.listing().is_empty());
        }
        for alg in SearchAlgorithm::ALL {
            assert!(!alg.listing().is_empty());
        }
    }
}
