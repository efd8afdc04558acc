//! Path service client.
//!
//! Queries are never cancelled. Every query is stamped with a [`PathTicket`]
//! from a monotonic sequence; the session keeps only the newest ticket and
//! drops responses carrying any other.

use std::cell::Cell;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::ServiceError;
use crate::model::{PathQuery, PathResult, SolverOption};

use super::http::HttpClient;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathTicket(pub u64);

/// Issues strictly increasing tickets. Clones share one counter.
#[derive(Clone, Debug, Default)]
pub struct PathSequencer {
    last: Rc<Cell<u64>>,
}

impl PathSequencer {
    pub fn issue(&self) -> PathTicket {
        let next = self.last.get() + 1;
        self.last.set(next);
        PathTicket(next)
    }

    pub fn latest(&self) -> Option<PathTicket> {
        match self.last.get() {
            0 => None,
            n => Some(PathTicket(n)),
        }
    }
}

#[derive(Deserialize)]
struct AlgorithmList {
    algorithms: Vec<SolverOption>,
}

#[derive(Deserialize)]
struct HeuristicList {
    heuristics: Vec<SolverOption>,
}

#[derive(Clone, Debug)]
pub struct PathServiceClient {
    http: HttpClient,
    sequencer: PathSequencer,
}

impl PartialEq for PathServiceClient {
    fn eq(&self, other: &Self) -> bool {
        self.http == other.http && Rc::ptr_eq(&self.sequencer.last, &other.sequencer.last)
    }
}

impl PathServiceClient {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            sequencer: PathSequencer::default(),
        }
    }

    /// Stamps a new query; every earlier ticket becomes stale.
    pub fn begin(&self) -> PathTicket {
        self.sequencer.issue()
    }

    pub fn is_latest(&self, ticket: PathTicket) -> bool {
        self.sequencer.latest() == Some(ticket)
    }

    pub async fn find_path(&self, query: &PathQuery) -> Result<PathResult, ServiceError> {
        self.http.post_json("/path/find", query).await
    }

    pub async fn algorithms(&self) -> Result<Vec<SolverOption>, ServiceError> {
        let list: AlgorithmList = self.http.get_json("/path/algorithms").await?;
        Ok(list.algorithms)
    }

    pub async fn heuristics(&self) -> Result<Vec<SolverOption>, ServiceError> {
        let list: HeuristicList = self.http.get_json("/path/heuristics").await?;
        Ok(list.heuristics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase_and_only_newest_is_latest() {
        let client = PathServiceClient::new(HttpClient::new("", 0));
        let a = client.begin();
        let b = client.begin();
        assert!(b > a);
        assert!(client.is_latest(b));
        assert!(!client.is_latest(a));
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let seq = PathSequencer::default();
        assert_eq!(seq.latest(), None);
        let other = seq.clone();
        seq.issue();
        assert_eq!(other.issue(), PathTicket(2));
        assert_eq!(seq.latest(), Some(PathTicket(2)));
    }

    #[test]
    fn test_option_lists_decode() {
        let raw = r#"{"algorithms":[{"id":"astar","name":"A*"},{"id":"adaptive_astar","name":"Adaptive"}]}"#;
        let list: AlgorithmList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.algorithms[1].id, "adaptive_astar");
        let raw = r#"{"heuristics":[{"id":"manhattan","name":"Manhattan"}]}"#;
        let list: HeuristicList = serde_json::from_str(raw).unwrap();
        assert_eq!(list.heuristics[0].name, "Manhattan");
    }
}
