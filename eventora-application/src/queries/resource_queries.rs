use serde::Serialize;

use eventora_domain::{ListQuery, Page, Pagination, Resource, ResourceGateway};

use crate::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

pub async fn list_resources<R: Resource>(
    gateway: &dyn ResourceGateway<R>,
    query: ListQuery,
) -> Result<Listing<R>, AppError> {
    let Page {
        data, total_items, ..
    } = gateway.list(&query).await?;
    Ok(Listing {
        items: data,
        pagination: Pagination::new(query.page, query.limit, total_items),
    })
}

pub async fn get_resource<R: Resource>(
    gateway: &dyn ResourceGateway<R>,
    id: &str,
) -> Result<R, AppError> {
    Ok(gateway.get(id.trim()).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use eventora_domain::User;

    use crate::testing::{sample_user, FakeResourceGateway};

    #[tokio::test]
    async fn listing_carries_pagination() {
        let users: Vec<User> = (1..=8)
            .map(|n| User {
                id: format!("u{n}").into(),
                ..sample_user()
            })
            .collect();
        let gateway = FakeResourceGateway::with_items(users);
        let listing = list_resources::<User>(&gateway, ListQuery::new(2, 6, None))
            .await
            .expect("list");
        assert_eq!(listing.items.len(), 2);
        assert_eq!(listing.pagination.range_label(), "7–8 of 8");
        assert!(!listing.pagination.has_next());
    }

    #[tokio::test]
    async fn get_trims_identifier() {
        let gateway = FakeResourceGateway::with_items(vec![sample_user()]);
        let user = get_resource::<User>(&gateway, " u-1 ").await.expect("get");
        assert_eq!(user.name, "Ana");
    }
}
