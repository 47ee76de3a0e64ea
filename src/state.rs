//! Crawl phase definitions for the spider's page loop
//!
//! This module defines the states a pagination chain moves through while it
//! is crawled, and the legal transitions between them.

use crate::SpiderError;
use std::fmt;

/// Represents the current phase of a pagination chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlPhase {
    /// Chain has a start URL but no request has been made yet
    Start,

    /// A page request is in flight
    Fetching,

    /// The fetched page is being run through the extraction rules
    Extracting,

    /// Extracted items are emitted; the next-page link is being resolved
    Following,

    // ===== Terminal Phases =====
    /// Pagination ended: the last page had no next-page link
    Done,

    /// The chain stopped on a fetch error or unusable document
    Failed,
}

impl CrawlPhase {
    /// Returns true if this is a terminal phase (the chain has ended)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Returns true if this phase represents a successfully finished chain
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true if the given transition is legal
    ///
    /// The legal transitions are exactly:
    /// Start -> Fetching, Fetching -> Extracting | Failed,
    /// Extracting -> Following, Following -> Fetching | Done.
    pub fn can_transition(&self, to: CrawlPhase) -> bool {
        matches!(
            (self, to),
            (Self::Start, Self::Fetching)
                | (Self::Fetching, Self::Extracting)
                | (Self::Fetching, Self::Failed)
                | (Self::Extracting, Self::Following)
                | (Self::Following, Self::Fetching)
                | (Self::Following, Self::Done)
        )
    }

    /// Advances to the given phase, rejecting illegal transitions
    pub fn transition_to(self, to: CrawlPhase) -> Result<CrawlPhase, SpiderError> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(SpiderError::InvalidTransition { from: self, to })
        }
    }

    /// Converts the phase to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Fetching => "fetching",
            Self::Extracting => "extracting",
            Self::Following => "following",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// Returns all possible phases
    pub fn all_phases() -> Vec<Self> {
        vec![
            Self::Start,
            Self::Fetching,
            Self::Extracting,
            Self::Following,
            Self::Done,
            Self::Failed,
        ]
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(!CrawlPhase::Start.is_terminal());
        assert!(!CrawlPhase::Fetching.is_terminal());
        assert!(!CrawlPhase::Extracting.is_terminal());
        assert!(!CrawlPhase::Following.is_terminal());

        assert!(CrawlPhase::Done.is_terminal());
        assert!(CrawlPhase::Failed.is_terminal());
    }

    #[test]
    fn test_is_success() {
        assert!(CrawlPhase::Done.is_success());

        assert!(!CrawlPhase::Failed.is_success());
        assert!(!CrawlPhase::Start.is_success());
    }

    #[test]
    fn test_legal_transitions() {
        assert!(CrawlPhase::Start.can_transition(CrawlPhase::Fetching));
        assert!(CrawlPhase::Fetching.can_transition(CrawlPhase::Extracting));
        assert!(CrawlPhase::Fetching.can_transition(CrawlPhase::Failed));
        assert!(CrawlPhase::Extracting.can_transition(CrawlPhase::Following));
        assert!(CrawlPhase::Following.can_transition(CrawlPhase::Fetching));
        assert!(CrawlPhase::Following.can_transition(CrawlPhase::Done));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!CrawlPhase::Start.can_transition(CrawlPhase::Extracting));
        assert!(!CrawlPhase::Start.can_transition(CrawlPhase::Done));
        assert!(!CrawlPhase::Fetching.can_transition(CrawlPhase::Following));
        assert!(!CrawlPhase::Fetching.can_transition(CrawlPhase::Done));
        assert!(!CrawlPhase::Extracting.can_transition(CrawlPhase::Failed));
        assert!(!CrawlPhase::Following.can_transition(CrawlPhase::Failed));

        // Terminal phases have no outgoing transitions
        for to in CrawlPhase::all_phases() {
            assert!(!CrawlPhase::Done.can_transition(to));
            assert!(!CrawlPhase::Failed.can_transition(to));
        }
    }

    #[test]
    fn test_transition_to_ok() {
        let phase = CrawlPhase::Start.transition_to(CrawlPhase::Fetching).unwrap();
        assert_eq!(phase, CrawlPhase::Fetching);
    }

    #[test]
    fn test_transition_to_rejects_illegal() {
        let result = CrawlPhase::Done.transition_to(CrawlPhase::Fetching);
        assert!(matches!(
            result,
            Err(SpiderError::InvalidTransition {
                from: CrawlPhase::Done,
                to: CrawlPhase::Fetching,
            })
        ));
    }

    #[test]
    fn test_full_chain_walk() {
        // A two-page chain: fetch, extract, follow, fetch, extract, follow, done
        let mut phase = CrawlPhase::Start;
        for _ in 0..2 {
            phase = phase.transition_to(CrawlPhase::Fetching).unwrap();
            phase = phase.transition_to(CrawlPhase::Extracting).unwrap();
            phase = phase.transition_to(CrawlPhase::Following).unwrap();
        }
        phase = phase.transition_to(CrawlPhase::Done).unwrap();
        assert!(phase.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CrawlPhase::Start), "start");
        assert_eq!(format!("{}", CrawlPhase::Fetching), "fetching");
        assert_eq!(format!("{}", CrawlPhase::Done), "done");
        assert_eq!(format!("{}", CrawlPhase::Failed), "failed");
    }

    #[test]
    fn test_all_phases_complete() {
        let all = CrawlPhase::all_phases();
        assert_eq!(all.len(), 6);

        // Verify no duplicates
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert_ne!(all[i], all[j], "Duplicate phase found");
            }
        }
    }
}
