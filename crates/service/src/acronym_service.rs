use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info, instrument};

use models::{acronym, acronym_category_pivot, category, user};
use crate::errors::ServiceError;

/// List every acronym, in storage order.
pub async fn list_acronyms(db: &DatabaseConnection) -> Result<Vec<acronym::Model>, ServiceError> {
    Ok(acronym::Entity::find().all(db).await?)
}

/// Create an acronym owned by `user_id`. The owner must already exist.
#[instrument(skip(db, long))]
pub async fn create_acronym(db: &DatabaseConnection, short: &str, long: &str, user_id: i32) -> Result<acronym::Model, ServiceError> {
    let created = acronym::create(db, short, long, user_id).await?;
    info!(id = created.id, "created acronym");
    Ok(created)
}

/// Get an acronym by id.
pub async fn get_acronym(db: &DatabaseConnection, id: i32) -> Result<acronym::Model, ServiceError> {
    acronym::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("acronym"))
}

/// Replace `short`, `long` and the owner of an existing acronym; the id is kept.
#[instrument(skip(db, long))]
pub async fn update_acronym(
    db: &DatabaseConnection,
    id: i32,
    short: &str,
    long: &str,
    user_id: i32,
) -> Result<acronym::Model, ServiceError> {
    let mut am: acronym::ActiveModel = get_acronym(db, id).await?.into();
    am.short = Set(short.to_string());
    am.long = Set(long.to_string());
    am.user_id = Set(user_id);
    let updated = am.update(db).await?;
    info!(id, "updated acronym");
    Ok(updated)
}

/// Delete an acronym. Its category edges go with it.
#[instrument(skip(db))]
pub async fn delete_acronym(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = acronym::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("acronym"));
    }
    info!(id, "deleted acronym");
    Ok(())
}

/// Acronyms whose `short` or `long` equals `term` exactly.
pub async fn search_acronyms(db: &DatabaseConnection, term: &str) -> Result<Vec<acronym::Model>, ServiceError> {
    let rows = acronym::Entity::find()
        .filter(
            Condition::any()
                .add(acronym::Column::Short.eq(term))
                .add(acronym::Column::Long.eq(term)),
        )
        .order_by_asc(acronym::Column::Id)
        .all(db)
        .await?;
    debug!(term, count = rows.len(), "searched acronyms");
    Ok(rows)
}

/// The acronym with the lowest id.
pub async fn first_acronym(db: &DatabaseConnection) -> Result<acronym::Model, ServiceError> {
    acronym::Entity::find()
        .order_by_asc(acronym::Column::Id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("acronym"))
}

/// All acronyms ordered by `short`, ties broken by id.
pub async fn sorted_acronyms(db: &DatabaseConnection) -> Result<Vec<acronym::Model>, ServiceError> {
    let rows = acronym::Entity::find()
        .order_by_asc(acronym::Column::Short)
        .order_by_asc(acronym::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// The user who owns acronym `id`.
pub async fn get_acronym_user(db: &DatabaseConnection, id: i32) -> Result<user::Model, ServiceError> {
    let found = get_acronym(db, id).await?;
    found
        .find_related(user::Entity)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("user"))
}

async fn ensure_category(db: &DatabaseConnection, id: i32) -> Result<category::Model, ServiceError> {
    category::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("category"))
}

/// Tag an acronym with a category. Re-attaching an existing pair is a no-op;
/// returns whether a new edge was written.
#[instrument(skip(db))]
pub async fn attach_category(db: &DatabaseConnection, acronym_id: i32, category_id: i32) -> Result<bool, ServiceError> {
    get_acronym(db, acronym_id).await?;
    ensure_category(db, category_id).await?;
    let added = acronym_category_pivot::attach(db, acronym_id, category_id).await?;
    info!(added, "attached category");
    Ok(added)
}

/// Categories attached to acronym `id`.
pub async fn list_acronym_categories(db: &DatabaseConnection, id: i32) -> Result<Vec<category::Model>, ServiceError> {
    let found = get_acronym(db, id).await?;
    let rows = found
        .find_related(category::Entity)
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Remove a category tag. Succeeds whether or not the edge existed; returns
/// whether one was removed.
#[instrument(skip(db))]
pub async fn detach_category(db: &DatabaseConnection, acronym_id: i32, category_id: i32) -> Result<bool, ServiceError> {
    get_acronym(db, acronym_id).await?;
    ensure_category(db, category_id).await?;
    let removed = acronym_category_pivot::detach(db, acronym_id, category_id).await?;
    info!(removed, "detached category");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn acronym_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = user::create(&db, "Foo", "foo").await?;

        let a = create_acronym(&db, "LOL", "Laugh Out Loud", u.id).await?;
        assert_eq!((a.short.as_str(), a.long.as_str(), a.user_id), ("LOL", "Laugh Out Loud", u.id));

        let found = get_acronym(&db, a.id).await?;
        assert_eq!(found, a);

        let updated = update_acronym(&db, a.id, "OMG", "Oh My God", u.id).await?;
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.short, "OMG");
        assert_eq!(updated.long, "Oh My God");

        delete_acronym(&db, a.id).await?;
        assert!(matches!(get_acronym(&db, a.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_acronym(&db, a.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_with_unknown_user_is_constraint_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_acronym(&db, "LOL", "Laugh Out Loud", 99).await.unwrap_err();
        assert!(matches!(err, ServiceError::Constraint(_)), "got {err:?}");
        assert!(list_acronyms(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_is_idempotent_and_can_reassign_owner() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let foo = user::create(&db, "Foo", "foo").await?;
        let bar = user::create(&db, "Bar", "bar").await?;
        let a = create_acronym(&db, "LOL", "Laugh Out Loud", foo.id).await?;

        let first = update_acronym(&db, a.id, "LOL", "Lots Of Love", bar.id).await?;
        let second = update_acronym(&db, a.id, "LOL", "Lots Of Love", bar.id).await?;
        assert_eq!(first, second);
        assert_eq!(get_acronym(&db, a.id).await?, second);
        assert_eq!(get_acronym_user(&db, a.id).await?, bar);

        assert!(matches!(update_acronym(&db, a.id, "LOL", "x", 77).await, Err(ServiceError::Constraint(_))));
        assert!(matches!(update_acronym(&db, 4242, "LOL", "x", foo.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn search_matches_short_or_long_exactly() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = user::create(&db, "Foo", "foo").await?;
        let lol = create_acronym(&db, "LOL", "Laugh Out Loud", u.id).await?;
        let tlol = create_acronym(&db, "TLOL", "LOL", u.id).await?;
        create_acronym(&db, "LOLZ", "Laughing", u.id).await?;

        let hits = search_acronyms(&db, "LOL").await?;
        assert_eq!(hits, vec![lol.clone(), tlol]);

        let by_long = search_acronyms(&db, "Laugh Out Loud").await?;
        assert_eq!(by_long, vec![lol]);

        assert!(search_acronyms(&db, "Laugh").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn first_and_sorted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(first_acronym(&db).await, Err(ServiceError::NotFound(_))));

        let u = user::create(&db, "Foo", "foo").await?;
        let omg = create_acronym(&db, "OMG", "Oh My God", u.id).await?;
        create_acronym(&db, "BRB", "Be Right Back", u.id).await?;
        create_acronym(&db, "LOL", "Laugh Out Loud", u.id).await?;
        create_acronym(&db, "BRB", "Big Red Button", u.id).await?;

        assert_eq!(first_acronym(&db).await?, omg);

        let sorted = sorted_acronyms(&db).await?;
        let shorts: Vec<&str> = sorted.iter().map(|a| a.short.as_str()).collect();
        assert_eq!(shorts, ["BRB", "BRB", "LOL", "OMG"]);
        assert!(sorted[0].id < sorted[1].id);
        assert_eq!(list_acronyms(&db).await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn acronym_user_lookup() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = user::create(&db, "Foo", "foo").await?;
        let a = create_acronym(&db, "LOL", "Laugh Out Loud", u.id).await?;
        assert_eq!(get_acronym_user(&db, a.id).await?, u);
        assert!(matches!(get_acronym_user(&db, a.id + 1).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn attach_list_detach_categories() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = user::create(&db, "Foo", "foo").await?;
        let a = create_acronym(&db, "LOL", "Laugh Out Loud", u.id).await?;
        let teen = category::create(&db, "Teenager").await?;
        let web = category::create(&db, "Internet").await?;

        assert!(detach_category(&db, a.id, teen.id).await.is_ok());

        assert!(attach_category(&db, a.id, teen.id).await?);
        assert!(!attach_category(&db, a.id, teen.id).await?);
        attach_category(&db, a.id, web.id).await?;
        assert_eq!(list_acronym_categories(&db, a.id).await?, vec![teen.clone(), web.clone()]);

        assert!(detach_category(&db, a.id, teen.id).await?);
        assert_eq!(list_acronym_categories(&db, a.id).await?, vec![web]);
        assert!(!detach_category(&db, a.id, teen.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn category_edges_require_both_ends() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let u = user::create(&db, "Foo", "foo").await?;
        let a = create_acronym(&db, "LOL", "Laugh Out Loud", u.id).await?;
        let c = category::create(&db, "Teenager").await?;

        assert!(matches!(attach_category(&db, a.id + 10, c.id).await, Err(ServiceError::NotFound(m)) if m.contains("acronym")));
        assert!(matches!(attach_category(&db, a.id, c.id + 10).await, Err(ServiceError::NotFound(m)) if m.contains("category")));
        assert!(matches!(detach_category(&db, a.id, c.id + 10).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(list_acronym_categories(&db, a.id + 10).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
