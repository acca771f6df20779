//! Integration tests for the consent event store.
//!
//! Exercises create validation, category defaulting, append-only listing
//! and the limit clamp against a real database.

use assert_matches::assert_matches;
use consentd_core::consent::{ConsentAction, ConsentCategories};
use consentd_db::models::consent::CreateConsent;
use consentd_db::repositories::ConsentRepo;
use consentd_db::StoreError;
use sqlx::PgPool;

fn accept_event(principal: &str) -> CreateConsent {
    CreateConsent {
        principal_identifier: Some(principal.to_string()),
        action: Some(ConsentAction::Accept),
        ..Default::default()
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_without_action_is_rejected_with_no_write(pool: PgPool) {
    let input = CreateConsent {
        principal_identifier: Some("subject@example.com".into()),
        ..Default::default()
    };

    let err = ConsentRepo::create(&pool, input).await.unwrap_err();
    assert_matches!(err, StoreError::Validation { code: "missing_action" });

    let records = ConsentRepo::list(&pool, None).await.unwrap();
    assert!(records.is_empty(), "rejected submission must not be persisted");
}

#[sqlx::test(migrations = "./migrations")]
async fn create_defaults_categories_to_essential_only(pool: PgPool) {
    let record = ConsentRepo::create(&pool, accept_event("a@example.com"))
        .await
        .unwrap();

    assert_eq!(record.action, "accept");
    assert_eq!(*record.categories, ConsentCategories::default());
    assert!(record.categories.essential);
    assert_eq!(record.meta, serde_json::json!({}));
}

#[sqlx::test(migrations = "./migrations")]
async fn create_forces_essential_true(pool: PgPool) {
    let input = CreateConsent {
        action: Some(ConsentAction::Partial),
        categories: Some(ConsentCategories {
            essential: false,
            functional: true,
            analytics: false,
            marketing: true,
        }),
        ..Default::default()
    };

    let record = ConsentRepo::create(&pool, input).await.unwrap();
    assert!(record.categories.essential);
    assert!(record.categories.functional);
    assert!(record.categories.marketing);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_captures_submission_metadata(pool: PgPool) {
    let input = CreateConsent {
        action: Some(ConsentAction::Accept),
        consent_text: Some("We use cookies to improve your experience".into()),
        ip: Some("203.0.113.9".into()),
        user_agent: Some("integration-test/1.0".into()),
        meta: Some(serde_json::json!({"source": "banner"})),
        ..Default::default()
    };

    let record = ConsentRepo::create(&pool, input).await.unwrap();
    assert_eq!(record.ip.as_deref(), Some("203.0.113.9"));
    assert_eq!(record.user_agent.as_deref(), Some("integration-test/1.0"));
    assert_eq!(record.meta, serde_json::json!({"source": "banner"}));
    assert!(record.principal_identifier.is_none(), "anonymous submission");
}

#[sqlx::test(migrations = "./migrations")]
async fn list_orders_newest_first_and_clamps_limit(pool: PgPool) {
    for i in 0..3 {
        ConsentRepo::create(&pool, accept_event(&format!("subject-{i}@example.com")))
            .await
            .unwrap();
    }

    let all = ConsentRepo::list(&pool, Some(500)).await.unwrap();
    assert_eq!(all.len(), 3);
    for pair in all.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "records must be ordered created_at descending"
        );
    }

    // A limit below the minimum still returns one record.
    let one = ConsentRepo::list(&pool, Some(0)).await.unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].id, all[0].id);
}
