// End to end in memory test for the email delivery flow, through REST and GraphQL.
use crate::modules::work_logs::adapters::outbound::work_log_store_in_memory::InMemoryWorkLogStore;
use crate::shared::infrastructure::mailer::in_memory::InMemoryMailer;
use crate::shell::auth::{USER_ID_HEADER, USER_ROLE_HEADER};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::work_logs::WorkLogBuilder;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn seeded_store() -> Arc<InMemoryWorkLogStore> {
    Arc::new(InMemoryWorkLogStore::with_rows(vec![
        WorkLogBuilder::new()
            .work_log_id("wl-1")
            .user_id("42")
            .start_at(2024, 3, 1, 10, 0)
            .duration_ms(3_600_000)
            .build(),
        WorkLogBuilder::new()
            .work_log_id("wl-2")
            .user_id("42")
            .start_at(2024, 3, 4, 7, 15)
            .duration_ms(5_400_000)
            .build(),
    ]))
}

#[tokio::test]
async fn emails_the_monthly_report_as_a_csv_attachment() {
    let mailer = Arc::new(InMemoryMailer::new());
    let app = router(AppState::new(seeded_store(), mailer.clone(), "Europe/Bucharest"));

    let response = app
        .oneshot(
            Request::post("/reports/email")
                .header("content-type", "application/json")
                .header(USER_ID_HEADER, "42")
                .body(Body::from(
                    r#"{"userId":"42","email":"teddy@example.com","month":3,"year":2024}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let sent = mailer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    let email = &sent[0].email;
    assert_eq!(email.subject, "Monthly Worklog Report");
    assert_eq!(email.body, "Attached is your monthly worklog report.");
    assert_eq!(email.attachments.len(), 1);
    assert_eq!(email.attachments[0].filename, "User-42-2024-3.csv");
    assert_eq!(email.attachments[0].mime_type, "text/csv");
    assert_eq!(
        String::from_utf8(email.attachments[0].content.clone()).unwrap(),
        "2024-03-01 12:00,2024-03-01 13:00,1.00\n2024-03-04 09:15,2024-03-04 10:45,1.50\n"
    );
}

#[tokio::test]
async fn emails_the_monthly_report_through_graphql() {
    let mailer = Arc::new(InMemoryMailer::new());
    let app = router(AppState::new(seeded_store(), mailer.clone(), "Europe/Bucharest"));
    let query = serde_json::json!({
        "query": r#"mutation { emailMonthlyReport(userId: "42", email: "boss@example.com", month: 3, year: 2024) }"#
    });

    let response = app
        .oneshot(
            Request::post("/gql")
                .header("content-type", "application/json")
                .header(USER_ID_HEADER, "1")
                .header(USER_ROLE_HEADER, "admin")
                .body(Body::from(query.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["data"]["emailMonthlyReport"], true);
    let sent = mailer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email.to, "boss@example.com");
}

#[tokio::test]
async fn does_not_email_anything_for_an_empty_month() {
    let mailer = Arc::new(InMemoryMailer::new());
    let app = router(AppState::new(seeded_store(), mailer.clone(), "Europe/Bucharest"));

    let response = app
        .oneshot(
            Request::post("/reports/email")
                .header("content-type", "application/json")
                .header(USER_ID_HEADER, "42")
                .body(Body::from(
                    r#"{"user_id":"42","email":"teddy@example.com","month":2,"year":2024}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(mailer.sent.lock().await.is_empty());
}
