//! Class repository operations.

pub mod model;

use neo4rs::Query;
use sde_graph::GraphStore;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ensure_name, SdeError, SdeResult};

pub use model::{Class, ClassCreate};

/// List all classes, in store-defined order.
pub async fn list_classes(store: &GraphStore) -> SdeResult<Vec<Class>> {
    let query = Query::new(
        "MATCH (c:Class)
         RETURN c.id as id, c.name as name, c.stereotype as stereotype,
                c.description as description, c.packageId as packageId"
            .to_string(),
    );

    let rows = store.query(query).await?;
    Ok(rows.iter().map(Class::from_row).collect())
}

/// Create a class node and return its full shape.
pub async fn create_class(store: &GraphStore, input: ClassCreate) -> SdeResult<Class> {
    ensure_name(&input.name, "class")?;

    let id = Uuid::new_v4().to_string();
    let query = Query::new(
        "CREATE (c:Class {id: $id, name: $name, stereotype: $stereotype,
                          description: $description, packageId: $packageId})
         RETURN c.id as id, c.name as name, c.stereotype as stereotype,
                c.description as description, c.packageId as packageId"
            .to_string(),
    )
    .param("id", id.as_str())
    .param("name", input.name.as_str())
    .param("stereotype", input.stereotype.clone())
    .param("description", input.description.clone())
    .param("packageId", input.package_id.clone());

    let rows = store.query(query).await?;
    let class = rows
        .first()
        .map(Class::from_row)
        .ok_or(SdeError::CreateFailed("class"))?;

    debug!(id = %class.id, name = %class.name, "Created class");
    Ok(class)
}
