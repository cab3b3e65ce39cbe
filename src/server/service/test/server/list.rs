use super::*;

/// Tests listing with no options.
///
/// Verifies that every server is listed without member counts.
///
/// Expected: Ok with all servers as plain entries
#[tokio::test]
async fn lists_all_servers_without_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, first) = factory::helpers::create_server_with_dependencies(db).await?;
    let (_, _, second) = factory::helpers::create_server_with_dependencies(db).await?;

    let servers = ServerListingService::new(db)
        .list(ListServersParam::default(), None)
        .await?;

    assert_eq!(ids(&servers), vec![first.id, second.id]);
    assert!(servers
        .iter()
        .all(|s| matches!(s, ListedServer::Plain(_))));

    Ok(())
}

/// Tests listing with member counts.
///
/// Verifies that the same servers are listed, each annotated with its membership size.
///
/// Expected: Ok with counts 3 and 1
#[tokio::test]
async fn annotates_member_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let a = factory::create_account(db).await?;
    let b = factory::create_account(db).await?;
    let c = factory::create_account(db).await?;
    let category = factory::create_category(db).await?;
    let big = ServerFactory::new(db, category.id, a.id)
        .members(vec![a.id, b.id, c.id])
        .build()
        .await?;
    let small = ServerFactory::new(db, category.id, b.id)
        .members(vec![b.id])
        .build()
        .await?;

    let servers = ServerListingService::new(db)
        .list(
            ListServersParam {
                with_num_members: true,
                ..Default::default()
            },
            None,
        )
        .await?;

    assert_eq!(ids(&servers), vec![big.id, small.id]);
    assert_eq!(servers[0].member_count(), Some(3));
    assert_eq!(servers[1].member_count(), Some(1));

    Ok(())
}

/// Tests the `by_user` option with an authenticated caller.
///
/// Expected: Ok with exactly the caller's servers
#[tokio::test]
async fn by_user_lists_caller_servers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caller = factory::create_account(db).await?;
    let other = factory::create_account(db).await?;
    let category = factory::create_category(db).await?;
    let joined = ServerFactory::new(db, category.id, other.id)
        .members(vec![other.id, caller.id])
        .build()
        .await?;
    ServerFactory::new(db, category.id, other.id)
        .members(vec![other.id])
        .build()
        .await?;
    let owned = ServerFactory::new(db, category.id, caller.id)
        .members(vec![caller.id])
        .build()
        .await?;
    let caller = Account::from_entity(caller);

    let servers = ServerListingService::new(db)
        .list(
            ListServersParam {
                by_user: true,
                ..Default::default()
            },
            Some(&caller),
        )
        .await?;

    assert_eq!(ids(&servers), vec![joined.id, owned.id]);

    Ok(())
}

/// Tests the `by_user` option for an anonymous caller.
///
/// Expected: Err(ListingError::AuthenticationRequired)
#[tokio::test]
async fn by_user_requires_authentication() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::create_server_with_dependencies(db).await?;

    let result = ServerListingService::new(db)
        .list(
            ListServersParam {
                by_user: true,
                ..Default::default()
            },
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ListingErr(ListingError::AuthenticationRequired(
            "by_user"
        )))
    ));

    Ok(())
}

/// Tests the `by_serverid` option.
///
/// Expected: Ok with the single requested server
#[tokio::test]
async fn by_serverid_lists_single_server() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _, _) = factory::helpers::create_server_with_dependencies(db).await?;
    let (_, _, wanted) = factory::helpers::create_server_with_dependencies(db).await?;
    let caller = Account::from_entity(owner);

    let servers = ServerListingService::new(db)
        .list(
            ListServersParam {
                by_serverid: flag(&wanted.id.to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await?;

    assert_eq!(ids(&servers), vec![wanted.id]);

    Ok(())
}

/// Tests `by_serverid` with an id that does not exist.
///
/// Expected: Err(ListingError::ServerNotFound)
#[tokio::test]
async fn by_serverid_unknown_is_validation_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _, _) = factory::helpers::create_server_with_dependencies(db).await?;
    let caller = Account::from_entity(owner);

    let result = ServerListingService::new(db)
        .list(
            ListServersParam {
                by_serverid: flag("999999"),
                ..Default::default()
            },
            Some(&caller),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ListingErr(ListingError::ServerNotFound(999_999)))
    ));

    Ok(())
}

/// Tests `by_serverid` with a non-numeric value.
///
/// Expected: Err(ListingError::InvalidServerId)
#[tokio::test]
async fn by_serverid_non_numeric_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, _, _) = factory::helpers::create_server_with_dependencies(db).await?;
    let caller = Account::from_entity(owner);

    let result = ServerListingService::new(db)
        .list(
            ListServersParam {
                by_serverid: flag("abc"),
                ..Default::default()
            },
            Some(&caller),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ListingErr(ListingError::InvalidServerId(_)))
    ));

    Ok(())
}

/// Tests `by_serverid` for a server outside the chosen category.
///
/// Expected: Err(ListingError::ServerNotFound)
#[tokio::test]
async fn by_serverid_outside_category_is_validation_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_account(db).await?;
    let gaming = factory::category::create_category_named(db, "gaming").await?;
    let music = factory::category::create_category_named(db, "music").await?;
    ServerFactory::new(db, gaming.id, owner.id).build().await?;
    let music_server = ServerFactory::new(db, music.id, owner.id).build().await?;
    let caller = Account::from_entity(owner);

    let result = ServerListingService::new(db)
        .list(
            ListServersParam {
                category: flag("gaming"),
                by_serverid: flag(&music_server.id.to_string()),
                ..Default::default()
            },
            Some(&caller),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ListingErr(ListingError::ServerNotFound(id))) if id == music_server.id
    ));

    Ok(())
}

/// Tests the `qty` option.
///
/// Verifies that at most `qty` servers are returned, preserving id order.
///
/// Expected: Ok with the first two servers
#[tokio::test]
async fn qty_truncates_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_account(db).await?;
    let category = factory::create_category(db).await?;
    let mut created = Vec::new();
    for _ in 0..3 {
        created.push(ServerFactory::new(db, category.id, owner.id).build().await?.id);
    }

    let servers = ServerListingService::new(db)
        .list(
            ListServersParam {
                qty: flag("2"),
                ..Default::default()
            },
            None,
        )
        .await?;

    assert_eq!(ids(&servers), created[..2].to_vec());

    Ok(())
}

/// Tests the `qty` option with an invalid value.
///
/// Expected: Err(ListingError::InvalidQuantity)
#[tokio::test]
async fn qty_must_be_integer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServerListingService::new(db)
        .list(
            ListServersParam {
                qty: flag("many"),
                ..Default::default()
            },
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ListingErr(ListingError::InvalidQuantity(_)))
    ));

    Ok(())
}

/// Tests the `qty` option with a value beyond the SQL limit range.
///
/// Expected: Err(ListingError::InvalidQuantity) for the out-of-range value, Ok for i64::MAX
#[tokio::test]
async fn qty_beyond_limit_range_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_server(db).await?;

    let service = ServerListingService::new(db);

    let result = service
        .list(
            ListServersParam {
                qty: flag("18446744073709551615"),
                ..Default::default()
            },
            None,
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::ListingErr(ListingError::InvalidQuantity(_)))
    ));

    let servers = service
        .list(
            ListServersParam {
                qty: flag("9223372036854775807"),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(servers.len(), 1);

    Ok(())
}
