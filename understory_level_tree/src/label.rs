// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node labels and the ordered alphabet they are drawn from.

use alloc::vec::Vec;
use core::fmt;

/// Identifier of a node, drawn from an [`Alphabet`].
///
/// A label is consumed the first time it is placed and can't be placed again
/// until the builder is reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(char);

impl Label {
    /// Create a label from a character.
    pub const fn new(ch: char) -> Self {
        Self(ch)
    }

    /// The character this label displays as.
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Label {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, duplicate-free set of labels a session may place.
///
/// The order is the order in which a palette presents the labels; it has no
/// effect on where a label lands in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    labels: Vec<Label>,
}

impl Alphabet {
    /// Labels of the default alphabet, `A` through `O`.
    pub const DEFAULT_LABELS: [char; 15] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    ];

    /// Build an alphabet from labels in presentation order.
    ///
    /// Repeated labels are dropped, keeping the first occurrence.
    pub fn new<I>(labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Label>,
    {
        let mut out: Vec<Label> = Vec::new();
        for label in labels {
            let label = label.into();
            if !out.contains(&label) {
                out.push(label);
            }
        }
        Self { labels: out }
    }

    /// Whether `label` belongs to this alphabet.
    pub fn contains(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    /// Position of `label` in presentation order.
    pub fn position(&self, label: Label) -> Option<usize> {
        self.labels.iter().position(|&l| l == label)
    }

    /// Iterate labels in presentation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Label> + '_ {
        self.labels.iter().copied()
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the alphabet has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LABELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn default_alphabet_is_a_through_o() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 15);
        assert_eq!(alphabet.iter().next(), Some(Label::new('A')));
        assert_eq!(alphabet.iter().last(), Some(Label::new('O')));
        assert!(!alphabet.contains(Label::new('P')));
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let alphabet = Alphabet::new(['x', 'y', 'x', 'z', 'y']);
        let labels: vec::Vec<char> = alphabet.iter().map(Label::as_char).collect();
        assert_eq!(labels, vec!['x', 'y', 'z']);
        assert_eq!(alphabet.position(Label::new('z')), Some(2));
    }

    #[test]
    fn label_displays_as_its_character() {
        assert_eq!(Label::from('Q').to_string(), "Q");
    }
}
