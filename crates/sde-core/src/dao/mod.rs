//! DAO repository operations.

pub mod model;

use neo4rs::Query;
use sde_graph::GraphStore;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ensure_name, SdeError, SdeResult};

pub use model::{Dao, DaoCreate};

/// List all DAOs, in store-defined order.
pub async fn list_daos(store: &GraphStore) -> SdeResult<Vec<Dao>> {
    let query = Query::new(
        "MATCH (d:DAO)
         RETURN d.id as id, d.name as name, d.description as description"
            .to_string(),
    );

    let rows = store.query(query).await?;
    Ok(rows.iter().map(Dao::from_row).collect())
}

/// Create a DAO node and return its full shape.
pub async fn create_dao(store: &GraphStore, input: DaoCreate) -> SdeResult<Dao> {
    ensure_name(&input.name, "DAO")?;

    let id = Uuid::new_v4().to_string();
    let query = Query::new(
        "CREATE (d:DAO {id: $id, name: $name, description: $description})
         RETURN d.id as id, d.name as name, d.description as description"
            .to_string(),
    )
    .param("id", id.as_str())
    .param("name", input.name.as_str())
    .param("description", input.description.clone());

    let rows = store.query(query).await?;
    let dao = rows
        .first()
        .map(Dao::from_row)
        .ok_or(SdeError::CreateFailed("DAO"))?;

    debug!(id = %dao.id, name = %dao.name, "Created DAO");
    Ok(dao)
}
