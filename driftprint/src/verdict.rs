// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Classification of similarity scores.


/// A human-readable category of a similarity score.
///
/// Variants are ordered from the least similar to the most similar.
///
/// | Score       | Verdict                                   |
/// |-------------|-------------------------------------------|
/// | `100`       | [`Unchanged`](Self::Unchanged)            |
/// | `80..=99`   | [`ModifiedSlightly`](Self::ModifiedSlightly) |
/// | `50..=79`   | [`ModifiedSignificantly`](Self::ModifiedSignificantly) |
/// | `1..=49`    | [`ModifiedHeavily`](Self::ModifiedHeavily) |
/// | `0`         | [`ChangedCompletely`](Self::ChangedCompletely) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// No detected similarity.
    ///
    /// This does not necessarily mean that the content is entirely
    /// different; fingerprints with unrelated block sizes also score zero.
    ChangedCompletely,
    /// Little in common.
    ModifiedHeavily,
    /// Large parts changed.
    ModifiedSignificantly,
    /// Small, local changes.
    ModifiedSlightly,
    /// Identical fingerprints.
    Unchanged,
}

/// The display color of a [`Verdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Red.
    Red,
    /// Magenta.
    Magenta,
}

/// Lower bounds of each category, in descending order.
const THRESHOLDS: [(u32, Verdict); 5] = [
    (100, Verdict::Unchanged),
    (80, Verdict::ModifiedSlightly),
    (50, Verdict::ModifiedSignificantly),
    (1, Verdict::ModifiedHeavily),
    (0, Verdict::ChangedCompletely),
];

impl Verdict {
    /// Classifies a similarity score.
    ///
    /// Scores above `100` are treated as `100`.
    ///
    /// # Example
    ///
    /// ```
    /// use driftprint::Verdict;
    ///
    /// assert_eq!(Verdict::from_score(100), Verdict::Unchanged);
    /// assert_eq!(Verdict::from_score(93), Verdict::ModifiedSlightly);
    /// assert_eq!(Verdict::from_score(0), Verdict::ChangedCompletely);
    /// ```
    pub fn from_score(score: u32) -> Self {
        THRESHOLDS
            .iter()
            .find(|&&(lower, _)| score >= lower)
            .map_or(Verdict::ChangedCompletely, |&(_, verdict)| verdict)
    }

    /// Returns the inclusive score range of this category.
    pub fn score_range(&self) -> (u32, u32) {
        let pos = THRESHOLDS
            .iter()
            .position(|&(_, verdict)| verdict == *self)
            .unwrap_or(THRESHOLDS.len() - 1);
        let lower = THRESHOLDS[pos].0;
        let upper = match pos {
            0 => 100,
            _ => THRESHOLDS[pos - 1].0 - 1,
        };
        (lower, upper)
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Unchanged => "Unchanged",
            Verdict::ModifiedSlightly => "Modified Slightly",
            Verdict::ModifiedSignificantly => "Modified Significantly",
            Verdict::ModifiedHeavily => "Modified Heavily",
            Verdict::ChangedCompletely => "Changed Completely",
        }
    }

    /// Returns the display color.
    pub fn color(&self) -> Color {
        match self {
            Verdict::Unchanged => Color::Green,
            Verdict::ModifiedSlightly => Color::Yellow,
            Verdict::ModifiedSignificantly => Color::Red,
            Verdict::ModifiedHeavily | Verdict::ChangedCompletely => Color::Magenta,
        }
    }
}

impl core::fmt::Display for Verdict {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
