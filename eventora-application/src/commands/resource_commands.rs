// Generic commands for the plain CRUD collections (vendors, users, bookings).

use tracing::info;

use crate::AppError;
use eventora_domain::{Resource, ResourceGateway, Validate};

pub async fn create_resource<R: Resource>(
    gateway: &dyn ResourceGateway<R>,
    draft: R::Draft,
) -> Result<R, AppError> {
    draft.validate()?;
    let created = gateway.create(&draft).await?;
    info!("created {} {}", R::LABEL, created.id());
    Ok(created)
}

pub async fn update_resource<R: Resource>(
    gateway: &dyn ResourceGateway<R>,
    id: &str,
    draft: R::Draft,
) -> Result<R, AppError> {
    draft.validate()?;
    let updated = gateway.update(id, &draft).await?;
    info!("updated {} {}", R::LABEL, updated.id());
    Ok(updated)
}

pub async fn delete_resource<R: Resource>(
    gateway: &dyn ResourceGateway<R>,
    id: &str,
) -> Result<(), AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest(format!("{} id is required", R::LABEL)));
    }
    gateway.delete(id).await?;
    info!("deleted {} {}", R::LABEL, id);
    Ok(())
}
