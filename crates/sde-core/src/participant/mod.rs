//! Participant repository operations.

pub mod model;

use neo4rs::Query;
use sde_graph::GraphStore;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ensure_name, SdeError, SdeResult};

pub use model::{Participant, ParticipantCreate};

/// List all participants, in store-defined order.
pub async fn list_participants(store: &GraphStore) -> SdeResult<Vec<Participant>> {
    let query = Query::new(
        "MATCH (p:Participant)
         RETURN p.id as id, p.name as name, p.logicalName as logicalName"
            .to_string(),
    );

    let rows = store.query(query).await?;
    Ok(rows.iter().map(Participant::from_row).collect())
}

/// Create a participant node and return its full shape.
pub async fn create_participant(
    store: &GraphStore,
    input: ParticipantCreate,
) -> SdeResult<Participant> {
    ensure_name(&input.name, "participant")?;

    let id = Uuid::new_v4().to_string();
    let query = Query::new(
        "CREATE (p:Participant {id: $id, name: $name, logicalName: $logicalName})
         RETURN p.id as id, p.name as name, p.logicalName as logicalName"
            .to_string(),
    )
    .param("id", id.as_str())
    .param("name", input.name.as_str())
    .param("logicalName", input.logical_name.clone());

    let rows = store.query(query).await?;
    let participant = rows
        .first()
        .map(Participant::from_row)
        .ok_or(SdeError::CreateFailed("participant"))?;

    debug!(id = %participant.id, name = %participant.name, "Created participant");
    Ok(participant)
}
