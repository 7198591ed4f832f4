use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use fitconnect::api::routes::create_routes;
use fitconnect::auth::USER_ID_HEADER;
use fitconnect::models::{CreateTrainerProfile, CreateUser, Role};
use fitconnect::storage::{DynStorage, MemoryStore, Storage};

struct TestApp {
    router: Router,
    athlete_id: i64,
    trainer_id: i64,
}

/// Builds the full router over an in-memory store seeded with one athlete
/// and one trainer who already has a profile.
async fn test_app() -> TestApp {
    let store: DynStorage = Arc::new(MemoryStore::new());

    let athlete = store
        .create_user(new_user("ana", "ana@example.com", Role::Athlete))
        .await
        .unwrap();
    let trainer = store
        .create_user(new_user("coach", "coach@example.com", Role::Trainer))
        .await
        .unwrap();
    store
        .create_trainer_profile(CreateTrainerProfile {
            user_id: trainer.id,
            years_of_experience: Some(7),
            certifications: Some("NASM-CPT".to_string()),
            specialization: Some("strength".to_string()),
            price_per_session: Some(8000),
        })
        .await
        .unwrap();

    TestApp {
        router: create_routes(store),
        athlete_id: athlete.id,
        trainer_id: trainer.id,
    }
}

fn new_user(username: &str, email: &str, role: Role) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        full_name: username.to_string(),
        role,
        bio: None,
        profile_image: None,
        specialties: None,
    }
}

fn request(method: Method, uri: &str, caller: Option<i64>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = caller {
        builder = builder.header(USER_ID_HEADER, id.to_string());
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &TestApp, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app().await;
    let (status, body) = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn protected_routes_require_a_known_caller() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        request(Method::GET, "/api/connections/athlete", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/connections/athlete", Some(999), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn public_trainer_listing_needs_no_caller() {
    let app = test_app().await;
    let (status, body) = send(&app, request(Method::GET, "/api/trainers", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["username"], "coach");
    assert_eq!(body[0]["trainer_profile"]["rating_count"], 0);
    assert!(body[0].get("password_hash").is_none());
}

#[tokio::test]
async fn ratings_update_the_published_aggregate() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/ratings",
            Some(app.athlete_id),
            Some(json!({ "trainer_id": app.trainer_id, "rating": 4, "review": "solid" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["athlete_id"], app.athlete_id);

    let uri = format!("/api/trainers/{}", app.trainer_id);
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trainer_profile"]["rating"], 4.0);
    assert_eq!(body["trainer_profile"]["rating_count"], 1);

    send(
        &app,
        request(
            Method::POST,
            "/api/ratings",
            Some(app.athlete_id),
            Some(json!({ "trainer_id": app.trainer_id, "rating": 5 })),
        ),
    )
    .await;
    let (_, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(body["trainer_profile"]["rating"], 4.5);
    assert_eq!(body["trainer_profile"]["rating_count"], 2);

    let uri = format!("/api/trainers/{}/ratings", app.trainer_id);
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["athlete"]["username"], "ana");
}

#[tokio::test]
async fn trainers_cannot_submit_ratings() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/ratings",
            Some(app.trainer_id),
            Some(json!({ "trainer_id": app.trainer_id, "rating": 5 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn out_of_range_ratings_are_rejected() {
    let app = test_app().await;
    for value in [0, 6] {
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/api/ratings",
                Some(app.athlete_id),
                Some(json!({ "trainer_id": app.trainer_id, "rating": value })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation error");
    }
}

#[tokio::test]
async fn connection_lifecycle() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/connections",
            Some(app.athlete_id),
            Some(json!({ "trainer_id": app.trainer_id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    let connection_id = body["id"].as_i64().unwrap();

    // Only the referenced trainer may respond.
    let uri = format!("/api/connections/{connection_id}");
    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            &uri,
            Some(app.athlete_id),
            Some(json!({ "status": "accepted" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            &uri,
            Some(app.trainer_id),
            Some(json!({ "status": "accepted" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "accepted");

    // Accepted and rejected are terminal.
    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            &uri,
            Some(app.trainer_id),
            Some(json!({ "status": "rejected" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            "/api/connections/999",
            Some(app.trainer_id),
            Some(json!({ "status": "accepted" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn connection_listings_join_the_counterparty() {
    let app = test_app().await;
    send(
        &app,
        request(
            Method::POST,
            "/api/connections",
            Some(app.athlete_id),
            Some(json!({ "trainer_id": app.trainer_id })),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        request(
            Method::GET,
            "/api/connections/athlete",
            Some(app.athlete_id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["trainer"]["username"], "coach");

    let (status, body) = send(
        &app,
        request(
            Method::GET,
            "/api/connections/trainer",
            Some(app.trainer_id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["athlete"]["username"], "ana");
}

#[tokio::test]
async fn messaging_flow() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/messages",
            Some(app.athlete_id),
            Some(json!({ "receiver_id": app.trainer_id, "content": "hi coach" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["read"], false);

    send(
        &app,
        request(
            Method::POST,
            "/api/messages",
            Some(app.trainer_id),
            Some(json!({ "receiver_id": app.athlete_id, "content": "hello" })),
        ),
    )
    .await;

    // Both participants see the same conversation, oldest first.
    let uri = format!("/api/messages/{}", app.trainer_id);
    let (status, body) = send(&app, request(Method::GET, &uri, Some(app.athlete_id), None)).await;
    assert_eq!(status, StatusCode::OK);
    let messages = body.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["content"], "hi coach");

    // The trainer marks the athlete's messages as read.
    let uri = format!("/api/messages/read/{}", app.athlete_id);
    let (status, _) = send(&app, request(Method::PUT, &uri, Some(app.trainer_id), None)).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/messages/{}", app.athlete_id);
    let (_, body) = send(&app, request(Method::GET, &uri, Some(app.trainer_id), None)).await;
    let messages = body.as_array().unwrap();
    assert_eq!(messages[0]["read"], true);
    // The trainer's own outgoing message is untouched.
    assert_eq!(messages[1]["read"], false);
}

#[tokio::test]
async fn empty_messages_are_rejected() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/messages",
            Some(app.athlete_id),
            Some(json!({ "receiver_id": app.trainer_id, "content": "   " })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_updates_return_the_public_view() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            "/api/profile",
            Some(app.athlete_id),
            Some(json!({ "full_name": "Ana Silva", "bio": "runner" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["full_name"], "Ana Silva");
    assert_eq!(body["bio"], "runner");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn trainer_profile_management() {
    let app = test_app().await;

    // The seeded trainer already has a profile, so creating another fails.
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/trainer-profile",
            Some(app.trainer_id),
            Some(json!({ "specialization": "mobility" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            "/api/trainer-profile",
            Some(app.trainer_id),
            Some(json!({ "specialization": "mobility" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["specialization"], "mobility");

    // Athletes have no trainer profile to manage.
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/trainer-profile",
            Some(app.athlete_id),
            Some(json!({ "specialization": "yoga" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn plan_publishing_and_browsing() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/trainer/workout-plans",
            Some(app.trainer_id),
            Some(json!({
                "title": "Strength base",
                "description": "Three sessions a week",
                "duration_weeks": 8,
                "level": "beginner",
                "price": 4900
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["trainer_id"], app.trainer_id);
    let plan_id = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, request(Method::GET, "/api/workout-plans", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["trainer"]["username"], "coach");

    let uri = format!("/api/workout-plans/{plan_id}");
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Strength base");

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/trainer/workout-plans",
            Some(app.athlete_id),
            Some(json!({
                "title": "Nope",
                "description": "",
                "duration_weeks": 4,
                "level": "beginner",
                "price": 0
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/trainer/nutrition-plans",
            Some(app.trainer_id),
            Some(json!({
                "title": "Cut",
                "description": "Calorie deficit",
                "duration_weeks": 12,
                "goal": "weight_loss",
                "price": 3900
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["goal"], "weight_loss");

    let uri = format!("/api/trainers/{}/nutrition-plans", app.trainer_id);
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_trainer_is_not_found() {
    let app = test_app().await;

    // An athlete id is not a trainer.
    let uri = format!("/api/trainers/{}", app.athlete_id);
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");

    let (status, _) = send(&app, request(Method::GET, "/api/trainers/999", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
