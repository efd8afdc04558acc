//! Map service client: create, clear, fetch and per-cell update.

use serde::Deserialize;

use crate::error::ServiceError;
use crate::model::{Cell, CreateMapRequest, GridMap};

use super::http::HttpClient;

/// Reply to a cell update: the accepted cell, or a bare acknowledgement.
#[derive(Deserialize)]
#[serde(untagged)]
enum UpdateReply {
    Echo(Cell),
    Ack {
        #[allow(dead_code)]
        message: String,
    },
}

impl UpdateReply {
    /// Authoritative value for the cell that was sent.
    fn accepted(self, sent: &Cell) -> Cell {
        match self {
            UpdateReply::Echo(cell) => cell,
            UpdateReply::Ack { .. } => sent.clone(),
        }
    }
}

#[derive(Deserialize)]
struct Ack {
    #[allow(dead_code)]
    message: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapServiceClient {
    http: HttpClient,
}

impl MapServiceClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn create_map(&self, req: &CreateMapRequest) -> Result<GridMap, ServiceError> {
        self.http.post_json("/grid/create", req).await
    }

    /// Acknowledged only; callers refetch with [`Self::current_map`].
    pub async fn clear_map(&self) -> Result<(), ServiceError> {
        let _: Ack = self.http.post_empty("/grid/clear").await?;
        Ok(())
    }

    pub async fn current_map(&self) -> Result<GridMap, ServiceError> {
        self.http.get_json("/grid/current").await
    }

    pub async fn update_cell(&self, cell: &Cell) -> Result<Cell, ServiceError> {
        let reply: UpdateReply = self.http.post_json("/grid/cell/update", cell).await?;
        Ok(reply.accepted(cell))
    }
}
