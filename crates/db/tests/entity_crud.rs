//! CRUD integration tests for the client, person, and project repositories.

use forecast_db::models::client::{CreateClient, UpdateClient};
use forecast_db::models::person::{CreatePerson, UpdatePerson};
use forecast_db::models::project::{CreateProject, UpdateProject};
use forecast_db::repositories::{ClientRepo, PersonRepo, ProjectRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn client_lifecycle(pool: PgPool) {
    let created = ClientRepo::create(
        &pool,
        &CreateClient {
            tax_id: "12.345.678/0001-90".to_string(),
            legal_name: "Acme Holdings SA".to_string(),
            trade_name: Some("Acme".to_string()),
            city: None,
            state: None,
            segment: Some("Manufacturing".to_string()),
            email: None,
            phone: None,
            active: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(created.legal_name, "Acme Holdings SA");
    assert!(created.active);

    let updated = ClientRepo::update(
        &pool,
        created.id,
        &UpdateClient {
            tax_id: None,
            legal_name: None,
            trade_name: None,
            city: Some("Porto Alegre".to_string()),
            state: Some("RS".to_string()),
            segment: None,
            email: None,
            phone: None,
            active: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.state.as_deref(), Some("RS"));
    assert_eq!(updated.legal_name, "Acme Holdings SA");

    assert!(ClientRepo::delete(&pool, created.id).await.unwrap());
    assert!(ClientRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn person_lifecycle_and_departments(pool: PgPool) {
    let created = PersonRepo::create(
        &pool,
        &CreatePerson {
            timesheet_code: "AB".to_string(),
            full_name: "Ada Byron".to_string(),
            short_name: Some("Ada".to_string()),
            role: Some("Senior".to_string()),
            department: Some("Audit".to_string()),
            hourly_cost: Some(55.0),
            email: Some("ada@example.com".to_string()),
            active: None,
        },
    )
    .await
    .unwrap();
    assert!(created.active);

    let updated = PersonRepo::update(
        &pool,
        created.id,
        &UpdatePerson {
            timesheet_code: None,
            full_name: None,
            short_name: None,
            role: None,
            department: Some("Advisory".to_string()),
            hourly_cost: None,
            email: None,
            active: Some(false),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.department.as_deref(), Some("Advisory"));
    assert!(!updated.active);

    let departments = PersonRepo::departments(&pool).await.unwrap();
    assert_eq!(departments, vec!["Advisory".to_string()]);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_timesheet_code_is_rejected(pool: PgPool) {
    let input = CreatePerson {
        timesheet_code: "AB".to_string(),
        full_name: "Ada Byron".to_string(),
        short_name: None,
        role: None,
        department: None,
        hourly_cost: None,
        email: None,
        active: None,
    };
    PersonRepo::create(&pool, &input).await.unwrap();

    let err = PersonRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().unwrap();
    assert!(db_err.is_unique_violation());
}

#[sqlx::test(migrations = "./migrations")]
async fn project_lifecycle_and_open_listing(pool: PgPool) {
    let open = ProjectRepo::create(
        &pool,
        &CreateProject {
            code: "PRJ-2".to_string(),
            name: "Year-end audit".to_string(),
            client_name: Some("Acme Holdings".to_string()),
            project_type: None,
            status: None,
            budget_hours: Some(120.0),
            budget_value: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(open.status, "open");

    let closed = ProjectRepo::create(
        &pool,
        &CreateProject {
            code: "PRJ-1".to_string(),
            name: "Prior-year audit".to_string(),
            client_name: None,
            project_type: None,
            status: Some("closed".to_string()),
            budget_hours: None,
            budget_value: None,
        },
    )
    .await
    .unwrap();

    let open_list = ProjectRepo::list_open(&pool).await.unwrap();
    assert_eq!(open_list.len(), 1);
    assert_eq!(open_list[0].id, open.id);

    ProjectRepo::update(
        &pool,
        closed.id,
        &UpdateProject {
            code: None,
            name: None,
            client_name: None,
            project_type: None,
            status: Some("open".to_string()),
            budget_hours: None,
            budget_value: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    // Open listing is ordered by code.
    let open_list = ProjectRepo::list_open(&pool).await.unwrap();
    assert_eq!(open_list.len(), 2);
    assert_eq!(open_list[0].code, "PRJ-1");
}
