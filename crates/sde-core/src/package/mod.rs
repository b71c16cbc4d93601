//! Package repository operations.

pub mod model;

use neo4rs::Query;
use sde_graph::GraphStore;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ensure_name, SdeError, SdeResult};

pub use model::{Package, PackageCreate};

/// List all packages, in store-defined order.
pub async fn list_packages(store: &GraphStore) -> SdeResult<Vec<Package>> {
    let query = Query::new(
        "MATCH (p:Package)
         RETURN p.id as id, p.name as name, p.description as description,
                p.parentId as parentId"
            .to_string(),
    );

    let rows = store.query(query).await?;
    Ok(rows.iter().map(Package::from_row).collect())
}

/// Create a package node and return its full shape.
pub async fn create_package(store: &GraphStore, input: PackageCreate) -> SdeResult<Package> {
    ensure_name(&input.name, "package")?;

    let id = Uuid::new_v4().to_string();
    let query = Query::new(
        "CREATE (p:Package {id: $id, name: $name, description: $description, parentId: $parentId})
         RETURN p.id as id, p.name as name, p.description as description,
                p.parentId as parentId"
            .to_string(),
    )
    .param("id", id.as_str())
    .param("name", input.name.as_str())
    .param("description", input.description.clone())
    .param("parentId", input.parent_id.clone());

    let rows = store.query(query).await?;
    let package = rows
        .first()
        .map(Package::from_row)
        .ok_or(SdeError::CreateFailed("package"))?;

    debug!(id = %package.id, name = %package.name, "Created package");
    Ok(package)
}
