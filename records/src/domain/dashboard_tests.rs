//! Tests for the records dashboard service.

use std::sync::Arc;

use rstest::fixture;

use super::*;
use crate::domain::ports::{InMemoryRecordGateway, MockRecordGateway, RecordGatewayError};
use crate::domain::{FieldError, RecordField, ValidatedRecord};

const ENTRIES: [(RecordField, &str); 9] = [
    (RecordField::FirstName, " Ann "),
    (RecordField::LastName, "Lee"),
    (RecordField::Phone, "555 123 4567"),
    (RecordField::Email, "ann@example.com"),
    (RecordField::Address, "1 Main St"),
    (RecordField::State, "Texas"),
    (RecordField::District, "Austin"),
    (RecordField::City, "Austin"),
    (RecordField::ZipCode, "73301"),
];

fn fill(form: &mut RecordForm) {
    for (field, value) in ENTRIES {
        form.update_field(field, value).expect("entry is accepted");
    }
}

#[fixture]
fn stored() -> Record {
    Record {
        id: Some(RecordId::new("7")),
        first_name: "Bob".to_owned(),
        last_name: "Stone".to_owned(),
        phone: "(555)-987-6543".to_owned(),
        email: "bob@example.com".to_owned(),
        address: "2 Elm St".to_owned(),
        state: "Texas".to_owned(),
        district: "Dallas".to_owned(),
        city: "Dallas".to_owned(),
        zip_code: "75001".to_owned(),
    }
}

fn echo_with_id(
    id: &'static str,
) -> impl FnOnce(&ValidatedRecord) -> Result<Record, RecordGatewayError> + Send + 'static {
    move |record| Ok(record.record().clone().with_id(RecordId::new(id)))
}

fn dashboard(gateway: MockRecordGateway) -> RecordsDashboard<MockRecordGateway> {
    RecordsDashboard::new(Arc::new(gateway))
}

#[tokio::test]
async fn load_replaces_store_contents() {
    let mut gateway = MockRecordGateway::new();
    let rows = vec![stored()];
    gateway
        .expect_list()
        .times(1)
        .return_once(move || Ok(rows));

    let mut dashboard = dashboard(gateway);
    let count = dashboard.load().await.expect("load succeeds");

    assert_eq!(count, 1);
    assert_eq!(dashboard.store().records(), &[stored()]);
}

#[tokio::test]
async fn failed_load_keeps_previous_rows() {
    let mut gateway = MockRecordGateway::new();
    gateway
        .expect_list()
        .times(1)
        .return_once(|| Err(RecordGatewayError::transport("connection refused")));

    let mut dashboard = dashboard(gateway);
    dashboard.store_mut().replace_all(vec![stored()]);

    let err = dashboard.load().await.expect_err("list fails");

    assert_eq!(err.to_string(), "Something went wrong while saving user!");
    assert_eq!(dashboard.store().len(), 1);
}

#[tokio::test]
async fn valid_create_sends_normalised_record_once() {
    let mut gateway = MockRecordGateway::new();
    gateway
        .expect_create()
        .withf(|record| {
            let record = record.record();
            record.first_name == "Ann" && record.phone == "(555)-123-4567" && record.id.is_none()
        })
        .times(1)
        .return_once(echo_with_id("101"));

    let mut dashboard = dashboard(gateway);
    fill(dashboard.create_form_mut());

    let created = dashboard.submit_create().await.expect("create succeeds");

    assert_eq!(created.id, Some(RecordId::new("101")));
    let page = dashboard.store().projection();
    assert_eq!(page.items().len(), 1);
    assert_eq!(
        page.items().first().and_then(|record| record.id.clone()),
        Some(RecordId::new("101"))
    );
    assert_eq!(dashboard.create_form(), &RecordForm::new());
}

#[tokio::test]
async fn invalid_create_never_calls_gateway() {
    let mut gateway = MockRecordGateway::new();
    gateway.expect_create().never();

    let mut dashboard = dashboard(gateway);
    fill(dashboard.create_form_mut());
    dashboard
        .create_form_mut()
        .update_field(RecordField::Email, "bad")
        .expect("email accepted");

    let err = dashboard.submit_create().await.expect_err("email invalid");

    let errors = err.field_errors().expect("validation failure");
    assert_eq!(errors.message(RecordField::Email), "Invalid email format");
    assert_eq!(errors.len(), 1);
    assert!(dashboard.store().is_empty());
    assert!(!dashboard.create_form().is_submitting());
}

#[tokio::test]
async fn failed_create_keeps_form_and_store() {
    let mut gateway = MockRecordGateway::new();
    gateway
        .expect_create()
        .times(1)
        .return_once(|_| Err(RecordGatewayError::rejected(409_u16, "Email already exists")));

    let mut dashboard = dashboard(gateway);
    fill(dashboard.create_form_mut());
    let draft = dashboard.create_form().draft().clone();

    let err = dashboard.submit_create().await.expect_err("create rejected");

    assert_eq!(err.to_string(), "Email already exists");
    assert_eq!(dashboard.create_form().draft(), &draft);
    assert!(!dashboard.create_form().is_submitting());
    assert!(dashboard.store().is_empty());
}

#[test]
fn open_edit_requires_loaded_record() {
    let mut dashboard = dashboard(MockRecordGateway::new());
    let err = dashboard
        .open_edit(&RecordId::new("7"))
        .expect_err("nothing loaded");
    assert_eq!(
        err,
        DashboardError::RecordNotFound {
            id: RecordId::new("7")
        }
    );
}

#[test]
fn close_edit_without_session_fails() {
    let mut dashboard = dashboard(MockRecordGateway::new());
    assert_eq!(dashboard.close_edit(), Err(DashboardError::NoEditInProgress));
}

#[tokio::test]
async fn submit_edit_without_session_fails() {
    let mut gateway = MockRecordGateway::new();
    gateway.expect_update().never();
    let mut dashboard = dashboard(gateway);
    assert_eq!(
        dashboard.submit_edit().await,
        Err(DashboardError::NoEditInProgress)
    );
}

#[tokio::test]
async fn successful_edit_replaces_row_and_closes_dialog() {
    let mut gateway = MockRecordGateway::new();
    gateway
        .expect_update()
        .withf(|id, record| id.to_string() == "7" && record.record().city == "Houston")
        .times(1)
        .return_once(|id, record| Ok(record.record().clone().with_id(id.clone())));

    let mut dashboard = dashboard(gateway);
    dashboard.store_mut().replace_all(vec![stored()]);

    let session = dashboard.open_edit(&RecordId::new("7")).expect("record loaded");
    session
        .form_mut()
        .update_field(RecordField::City, "Houston")
        .expect("city accepted");

    let updated = dashboard.submit_edit().await.expect("update succeeds");

    assert_eq!(updated.city, "Houston");
    assert!(dashboard.edit_session().is_none());
    let row = dashboard.store().get(&RecordId::new("7")).expect("row kept");
    assert_eq!(row.city, "Houston");
    assert_eq!(dashboard.store().len(), 1);
}

#[tokio::test]
async fn failed_edit_keeps_dialog_open_and_row_unchanged() {
    let mut gateway = MockRecordGateway::new();
    gateway
        .expect_update()
        .times(1)
        .return_once(|_, _| Err(RecordGatewayError::timeout("30s elapsed")));

    let mut dashboard = dashboard(gateway);
    dashboard.store_mut().replace_all(vec![stored()]);
    dashboard
        .open_edit(&RecordId::new("7"))
        .expect("record loaded")
        .form_mut()
        .update_field(RecordField::City, "Houston")
        .expect("city accepted");

    let err = dashboard.submit_edit().await.expect_err("update times out");

    assert!(matches!(err, DashboardError::Transport { .. }));
    let session = dashboard.edit_session().expect("dialog stays open");
    assert!(session.can_close());
    assert_eq!(session.form().draft().city, "Houston");
    let row = dashboard.store().get(&RecordId::new("7")).expect("row kept");
    assert_eq!(row.city, "Dallas");
}

#[tokio::test]
async fn invalid_edit_never_calls_gateway() {
    let mut gateway = MockRecordGateway::new();
    gateway.expect_update().never();

    let mut dashboard = dashboard(gateway);
    dashboard.store_mut().replace_all(vec![stored()]);
    dashboard
        .open_edit(&RecordId::new("7"))
        .expect("record loaded")
        .form_mut()
        .update_field(RecordField::Phone, "555")
        .expect("phone accepted");

    let err = dashboard.submit_edit().await.expect_err("phone too short");

    assert_eq!(
        err.field_errors()
            .map(|errors| errors.message(RecordField::Phone)),
        Some("Phone number must be 10 digits")
    );
    assert!(dashboard.edit_session().is_some());
}

#[tokio::test]
async fn loaded_row_outside_catalogue_is_not_sent() {
    let mut gateway = MockRecordGateway::new();
    gateway.expect_update().never();
    let foreign = Record {
        district: "Seattle".to_owned(),
        ..stored()
    };

    let mut dashboard = dashboard(gateway);
    dashboard.store_mut().replace_all(vec![foreign]);
    dashboard
        .open_edit(&RecordId::new("7"))
        .expect("record loaded")
        .form_mut()
        .update_field(RecordField::City, "Houston")
        .expect("city accepted");

    let err = dashboard.submit_edit().await.expect_err("district is foreign");

    assert_eq!(
        err.field_errors()
            .and_then(|errors| errors.get(RecordField::District)),
        Some(FieldError::DistrictOutsideState)
    );
    assert!(dashboard.edit_session().is_some());
}

#[tokio::test]
async fn in_memory_gateway_drives_full_cycle() {
    let gateway = Arc::new(InMemoryRecordGateway::with_records([stored()]));
    let mut dashboard = RecordsDashboard::new(Arc::clone(&gateway));

    assert_eq!(dashboard.load().await.expect("load"), 1);
    fill(dashboard.create_form_mut());
    let created = dashboard.submit_create().await.expect("create");
    assert_eq!(created.id, Some(RecordId::new("1")));

    dashboard.store_mut().set_query("ann");
    assert_eq!(dashboard.store().projection().total_items(), 1);

    dashboard.close_edit().expect_err("no dialog open");
    dashboard.open_edit(&RecordId::new("1")).expect("created row loaded");
    dashboard.close_edit().expect("idle dialog closes");
    assert!(dashboard.edit_session().is_none());
}
