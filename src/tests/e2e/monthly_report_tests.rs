// End to end in memory test for the monthly report flow.
//
// Seeds the in memory store across a month boundary and a DST transition, then
// drives the full router with a GET request.
use crate::modules::work_logs::adapters::outbound::work_log_store_in_memory::InMemoryWorkLogStore;
use crate::shared::infrastructure::mailer::in_memory::InMemoryMailer;
use crate::shell::auth::USER_ID_HEADER;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::work_logs::WorkLogBuilder;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn downloads_the_monthly_report_in_the_configured_zone() {
    let store = Arc::new(InMemoryWorkLogStore::new());
    for (id, (month, day, hour, minute), duration_ms) in [
        ("before-month", (2, 29, 21, 59), 60_000),
        ("local-midnight", (2, 29, 22, 0), 3_600_000),
        ("scenario-a", (3, 1, 10, 0), 3_600_000),
        ("scenario-b", (3, 15, 6, 0), 5_400_000),
        ("after-dst", (3, 31, 6, 0), 3_630_000),
        ("next-month", (3, 31, 21, 0), 3_600_000),
    ] {
        store
            .insert(
                WorkLogBuilder::new()
                    .work_log_id(id)
                    .user_id("42")
                    .start_at(2024, month, day, hour, minute)
                    .duration_ms(duration_ms)
                    .build(),
            )
            .await;
    }
    let state = AppState::new(store, Arc::new(InMemoryMailer::new()), "Europe/Bucharest");

    let response = router(state)
        .oneshot(
            Request::get("/reports/monthly?userId=42&month=3&year=2024")
                .header(USER_ID_HEADER, "42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        String::from_utf8(bytes.to_vec()).unwrap(),
        "2024-03-01 00:00,2024-03-01 01:00,1.00\n\
         2024-03-01 12:00,2024-03-01 13:00,1.00\n\
         2024-03-15 08:00,2024-03-15 09:30,1.50\n\
         2024-03-31 09:00,2024-03-31 10:00,1.01\n"
    );
}
