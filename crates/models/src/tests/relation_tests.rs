use anyhow::Result;
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait};

use super::setup_test_db;
use crate::{acronym, acronym_category_pivot, category, user};

#[tokio::test]
async fn test_user_has_many_acronyms() -> Result<()> {
    let db = setup_test_db().await?;
    let foo = user::create(&db, "Foo", "foo").await?;
    let bar = user::create(&db, "Bar", "bar").await?;
    let lol = acronym::create(&db, "LOL", "Laugh Out Loud", foo.id).await?;
    let omg = acronym::create(&db, "OMG", "Oh My God", foo.id).await?;
    acronym::create(&db, "BRB", "Be Right Back", bar.id).await?;

    let owned = foo.find_related(acronym::Entity).all(&db).await?;
    assert_eq!(owned.len(), 2);
    assert!(owned.contains(&lol) && owned.contains(&omg));

    let owner = lol.find_related(user::Entity).one(&db).await?;
    assert_eq!(owner, Some(foo));
    Ok(())
}

#[tokio::test]
async fn test_attach_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    let u = user::create(&db, "Foo", "foo").await?;
    let a = acronym::create(&db, "LOL", "Laugh Out Loud", u.id).await?;
    let c = category::create(&db, "Teenager").await?;

    assert!(acronym_category_pivot::attach(&db, a.id, c.id).await?);
    assert!(!acronym_category_pivot::attach(&db, a.id, c.id).await?);
    assert_eq!(acronym_category_pivot::Entity::find().count(&db).await?, 1);

    let cats = a.find_related(category::Entity).all(&db).await?;
    assert_eq!(cats, vec![c.clone()]);
    let acrs = c.find_related(acronym::Entity).all(&db).await?;
    assert_eq!(acrs, vec![a]);
    Ok(())
}

#[tokio::test]
async fn test_detach_reports_removed_rows() -> Result<()> {
    let db = setup_test_db().await?;
    let u = user::create(&db, "Foo", "foo").await?;
    let a = acronym::create(&db, "LOL", "Laugh Out Loud", u.id).await?;
    let c = category::create(&db, "Teenager").await?;

    assert!(!acronym_category_pivot::detach(&db, a.id, c.id).await?);
    acronym_category_pivot::attach(&db, a.id, c.id).await?;
    assert!(acronym_category_pivot::detach(&db, a.id, c.id).await?);
    assert!(a.find_related(category::Entity).all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_deleting_acronym_drops_its_edges() -> Result<()> {
    let db = setup_test_db().await?;
    let u = user::create(&db, "Foo", "foo").await?;
    let a = acronym::create(&db, "LOL", "Laugh Out Loud", u.id).await?;
    let c1 = category::create(&db, "Teenager").await?;
    let c2 = category::create(&db, "Internet").await?;
    acronym_category_pivot::attach(&db, a.id, c1.id).await?;
    acronym_category_pivot::attach(&db, a.id, c2.id).await?;

    acronym::Entity::delete_by_id(a.id).exec(&db).await?;
    assert_eq!(acronym_category_pivot::Entity::find().count(&db).await?, 0);
    assert_eq!(category::Entity::find().count(&db).await?, 2);
    Ok(())
}
