use super::*;

/// Tests a successful login.
///
/// Expected: Promoter with company data
#[tokio::test]
async fn logs_in_active_promoter() {
    let test = TestBuilder::new().with_promoter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, client) = factory::helpers::create_promoter_with_company(db, "98765432100")
        .await
        .unwrap();

    let promoter = PromoterService::new(db)
        .login(LoginParams {
            document: "98765432100".to_string(),
            secret: "98765432100".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(promoter.id, client.id);
    assert_eq!(promoter.company_name, company.name);
}

/// Tests unknown credentials.
///
/// Expected: Err(AuthErr(InvalidCredentials))
#[tokio::test]
async fn rejects_unknown_credentials() {
    let test = TestBuilder::new().with_promoter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PromoterService::new(db)
        .login(LoginParams {
            document: "000".to_string(),
            secret: "000".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
}
