use super::*;

fn credentials(document: &str, secret: &str) -> LoginParams {
    LoginParams {
        document: document.to_string(),
        secret: secret.to_string(),
    }
}

/// Tests finding an active promoter by document.
///
/// Expected: Promoter with the joined company name
#[tokio::test]
async fn finds_active_promoter_with_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promoter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::CompanyFactory::new(db)
        .name("Joias Sul")
        .build()
        .await?;
    let client = factory::create_promoter(db, company.id, "12345678900").await?;

    let repo = PromoterRepository::new(db);
    let promoter = repo
        .find_by_credentials(&credentials("12345678900", "12345678900"))
        .await?
        .unwrap();

    assert_eq!(promoter.id, client.id);
    assert_eq!(promoter.company_id, company.id);
    assert_eq!(promoter.company_name, "Joias Sul");
    assert_eq!(promoter.document, "12345678900");

    Ok(())
}

/// Tests that the secret must also equal the document.
///
/// Expected: None for a wrong secret
#[tokio::test]
async fn rejects_wrong_secret() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promoter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_promoter_with_company(db, "12345678900").await?;

    let repo = PromoterRepository::new(db);
    let result = repo
        .find_by_credentials(&credentials("12345678900", "senha"))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the group and status filters.
///
/// Verifies that clients outside groups 2 and 4, and inactive promoters, cannot log in,
/// while group 4 can.
///
/// Expected: None for group 3 and status 1, Some for group 4
#[tokio::test]
async fn filters_by_group_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promoter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    factory::client::ClientFactory::new(db, company.id)
        .document("111")
        .group_id(3)
        .build()
        .await?;
    factory::client::ClientFactory::new(db, company.id)
        .document("222")
        .status(1)
        .build()
        .await?;
    factory::client::ClientFactory::new(db, company.id)
        .document("333")
        .group_id(4)
        .build()
        .await?;

    let repo = PromoterRepository::new(db);
    assert!(repo.find_by_credentials(&credentials("111", "111")).await?.is_none());
    assert!(repo.find_by_credentials(&credentials("222", "222")).await?.is_none());
    assert!(repo.find_by_credentials(&credentials("333", "333")).await?.is_some());

    Ok(())
}

/// Tests the tie-break when several promoters share a document.
///
/// Expected: Lowest CLI_COD wins regardless of insertion order
#[tokio::test]
async fn lowest_code_wins() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_promoter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    factory::client::ClientFactory::new(db, company.id)
        .id(20)
        .document("555")
        .build()
        .await?;
    factory::client::ClientFactory::new(db, company.id)
        .id(7)
        .document("555")
        .build()
        .await?;

    let repo = PromoterRepository::new(db);
    let promoter = repo
        .find_by_credentials(&credentials("555", "555"))
        .await?
        .unwrap();

    assert_eq!(promoter.id, 7);

    Ok(())
}
