//! HTTP-level integration tests for the timesheet endpoints: pending
//! seeding, confirmation, edit-window gating, and confirmed totals.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Local, NaiveDate};
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn create_person(pool: &PgPool, code: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/people",
            serde_json::json!({
                "timesheet_code": code,
                "full_name": format!("Person {code}"),
            }),
        )
        .await,
    )
    .await;
    json["id"].as_str().unwrap().to_string()
}

async fn create_project(pool: &PgPool, code: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"code": code, "name": format!("Project {code}")}),
        )
        .await,
    )
    .await;
    json["id"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn assignment_seeds_a_pending_row(pool: PgPool) {
    let person = create_person(&pool, "P1").await;
    let project = create_project(&pool, "PRJ-1").await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        "/api/v1/assignments",
        serde_json::json!([
            {"person_id": person, "project_id": project, "date": today(), "hours": 8.0},
        ]),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/timesheets/{person}/rows")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let cell = rows[0]["days"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["date"] == today().to_string())
        .unwrap();
    assert_eq!(cell["planned_hours"], 8.0);
    assert_eq!(cell["actual_hours"], serde_json::Value::Null);
    assert_eq!(cell["status"], "pending");
    assert_eq!(cell["entry_id"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sliding_window_mode_shows_trailing_days(pool: PgPool) {
    let person = create_person(&pool, "P1").await;
    let project = create_project(&pool, "PRJ-1").await;

    // Ten days back is always before the current Sunday-first week, so the
    // cell is invisible in week mode but inside a 14-day trailing window.
    let trailing = today() - Duration::days(10);
    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        "/api/v1/assignments",
        serde_json::json!([
            {"person_id": person, "project_id": project, "date": trailing, "hours": 4.0},
        ]),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let week_mode = body_json(get(app, &format!("/api/v1/timesheets/{person}/rows")).await).await;
    assert!(week_mode["rows"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/timesheets/{person}/rows?days=14")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let windowed = body_json(response).await;

    let days = windowed["days"].as_array().unwrap();
    assert_eq!(days.len(), 14);
    assert_eq!(days[13], today().to_string());

    let cell = windowed["rows"][0]["days"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["date"] == trailing.to_string())
        .unwrap();
    assert_eq!(cell["planned_hours"], 4.0);
    assert_eq!(cell["status"], "pending");

    // A zero-length window is rejected rather than rendered empty.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/timesheets/{person}/rows?days=0")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn saving_actuals_confirms_the_cell(pool: PgPool) {
    let person = create_person(&pool, "P1").await;
    let project = create_project(&pool, "PRJ-1").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/timesheets/{person}"),
        serde_json::json!({
            "project_id": project,
            "date": today(),
            "planned_hours": 8.0,
            "actual_hours": 7.5,
            "notes": "left early",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let entry = body_json(response).await;
    assert_eq!(entry["status"], "confirmed");
    assert_eq!(entry["actual_hours"], 7.5);

    // The merged rows now show the stored entry instead of the seed.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/timesheets/{person}/rows")).await).await;
    let cell = json["rows"][0]["days"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["date"] == today().to_string())
        .unwrap();
    assert_eq!(cell["status"], "confirmed");
    assert_eq!(cell["notes"], "left early");
    assert!(cell["entry_id"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn writes_outside_the_edit_window_return_422(pool: PgPool) {
    let person = create_person(&pool, "P1").await;
    let project = create_project(&pool, "PRJ-1").await;

    let stale = today() - Duration::days(60);
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/timesheets/{person}"),
        serde_json::json!({
            "project_id": project,
            "date": stale,
            "planned_hours": 8.0,
            "actual_hours": 8.0,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "EDIT_WINDOW_CLOSED");

    // Future dates are rejected too; nothing was written either way.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/timesheets/{person}"),
        serde_json::json!({
            "project_id": project,
            "date": today() + Duration::days(1),
            "planned_hours": 8.0,
            "actual_hours": 8.0,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let app = common::build_test_app(pool);
    let totals = body_json(get(app, &format!("/api/v1/timesheets/{person}/totals")).await).await;
    assert_eq!(totals["week_total"], 0.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn totals_count_only_confirmed_entries(pool: PgPool) {
    let person = create_person(&pool, "P1").await;
    let confirmed = create_project(&pool, "PRJ-1").await;
    let pending = create_project(&pool, "PRJ-2").await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/timesheets/{person}"),
        serde_json::json!({
            "project_id": confirmed,
            "date": today(),
            "planned_hours": 8.0,
            "actual_hours": 6.0,
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/timesheets/{person}"),
        serde_json::json!({
            "project_id": pending,
            "date": today(),
            "planned_hours": 4.0,
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let totals = body_json(get(app, &format!("/api/v1/timesheets/{person}/totals")).await).await;

    let day = totals["days"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["date"] == today().to_string())
        .unwrap();
    assert_eq!(day["confirmed_hours"], 6.0);
    assert_eq!(totals["week_total"], 6.0);

    // The month total is anchored to the mid-week day, so today's entry only
    // counts when it shares that day's month.
    let anchor = forecast_core::calendar::week_for(today(), 0)[3];
    let expected = if anchor.format("%Y-%m").to_string() == today().format("%Y-%m").to_string() {
        6.0
    } else {
        0.0
    };
    assert_eq!(totals["month_total"], expected);
}
