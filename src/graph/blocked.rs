// src/graph/blocked.rs
//! Directed edges to leave out of a single engine run.

use std::collections::BTreeSet;
use std::str::FromStr;

/// Ordered `(source, target)` label pairs excluded from one computation.
///
/// Blocking only masks the direct edge; the reverse edge of an undirected
/// graph has to be blocked on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSet {
    pairs: BTreeSet<(String, String)>,
}

impl BlockSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the pair was not already blocked.
    pub fn block(&mut self, source: impl Into<String>, target: impl Into<String>) -> bool {
        self.pairs.insert((source.into(), target.into()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for BlockSet {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (s, t) in iter {
            set.block(s, t);
        }
        set
    }
}

/// A single `SOURCE:TARGET` pair as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedPair {
    pub source: String,
    pub target: String,
}

impl FromStr for BlockedPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, target) = s
            .split_once(':')
            .ok_or_else(|| format!("expected SOURCE:TARGET, got '{s}'"))?;
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            return Err(format!("empty node label in '{s}'"));
        }
        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
        })
    }
}

impl FromIterator<BlockedPair> for BlockSet {
    fn from_iter<I: IntoIterator<Item = BlockedPair>>(iter: I) -> Self {
        iter.into_iter().map(|p| (p.source, p.target)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_is_directional() {
        let mut set = BlockSet::new();
        assert!(set.block("B", "C"));
        assert!(!set.block("B", "C"));
        assert!(set.block("C", "B"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![("B", "C"), ("C", "B")]);
    }

    #[test]
    fn test_parse_pair() {
        let p: BlockedPair = " B : C ".parse().unwrap();
        assert_eq!(p.source, "B");
        assert_eq!(p.target, "C");
        assert!("BC".parse::<BlockedPair>().is_err());
        assert!(":C".parse::<BlockedPair>().is_err());
    }

    #[test]
    fn test_collect_from_pairs() {
        let set: BlockSet = vec![("A", "B"), ("A", "B"), ("C", "D")].into_iter().collect();
        assert_eq!(set.len(), 2);
        let listed: Vec<_> = set.iter().collect();
        assert_eq!(listed, vec![("A", "B"), ("C", "D")]);
    }
}
