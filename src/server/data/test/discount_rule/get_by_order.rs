use super::*;

/// Tests listing the bands of an order.
///
/// Expected: Only the order's bands, ordered by lower bound, with the type description
#[tokio::test]
async fn lists_bands_of_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discount_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let discount_type = factory::create_discount_type(db).await?;
    factory::discount_rule::DiscountRuleFactory::new(db, 500, discount_type.id)
        .group_id(4)
        .range(Decimal::new(1000, 0), Decimal::new(5000, 0))
        .percent(Decimal::new(20, 0))
        .build()
        .await?;
    factory::discount_rule::DiscountRuleFactory::new(db, 500, discount_type.id)
        .group_id(2)
        .bonus_percent(Decimal::new(5, 0))
        .build()
        .await?;
    factory::create_discount_rule(db, 600, discount_type.id).await?;

    let repo = DiscountRuleRepository::new(db);
    let rules = repo.get_by_order(500).await?;

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].group_id, 2);
    assert_eq!(rules[0].bonus_percent, Some(Decimal::new(5, 0)));
    assert_eq!(rules[1].group_id, 4);
    assert_eq!(rules[1].percent, Decimal::new(20, 0));
    assert!(rules.iter().all(|r| r.discount_type == discount_type.description));

    Ok(())
}

/// Tests an order without bands.
///
/// Expected: Empty list
#[tokio::test]
async fn empty_for_unknown_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_discount_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscountRuleRepository::new(db);
    assert!(repo.get_by_order(500).await?.is_empty());

    Ok(())
}
