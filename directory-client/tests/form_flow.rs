// directory-client/tests/form_flow.rs
// Form state machine against an in-memory API

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use directory_client::{
    ClientError, ClientResult, DraftField, EmployeeApi, FormFlow, FormState, IdScheme,
    NotificationKind,
};
use shared::{Employee, EmployeeCreate, EmployeeCreated, HealthResponse};

/// Records every create call; answers with a fixed outcome
struct RecordingApi {
    calls: Mutex<Vec<EmployeeCreate>>,
    fail: bool,
}

impl RecordingApi {
    fn ok() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn calls(&self) -> Vec<EmployeeCreate> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmployeeApi for RecordingApi {
    async fn health(&self) -> ClientResult<HealthResponse> {
        Ok(HealthResponse::ok())
    }

    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        Ok(Vec::new())
    }

    async fn create_employee(&self, payload: &EmployeeCreate) -> ClientResult<EmployeeCreated> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(payload.clone());
        if self.fail {
            return Err(ClientError::Server {
                status: 500,
                message: "Erreur serveur".to_string(),
            });
        }
        Ok(EmployeeCreated::new(calls.len() as u64))
    }
}

/// API whose create call never answers
struct StalledApi;

#[async_trait]
impl EmployeeApi for StalledApi {
    async fn health(&self) -> ClientResult<HealthResponse> {
        Ok(HealthResponse::ok())
    }

    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        Ok(Vec::new())
    }

    async fn create_employee(&self, _payload: &EmployeeCreate) -> ClientResult<EmployeeCreated> {
        std::future::pending().await
    }
}

fn fill(flow: &mut FormFlow) {
    let fields = [
        (DraftField::FirstName, "Ada"),
        (DraftField::LastName, "Lovelace"),
        (DraftField::Email, "ada@x.io"),
        (DraftField::Department, "Développement"),
        (DraftField::Position, "Lead Developer"),
        (DraftField::HireDate, "2024-01-02"),
        (DraftField::Salary, "50000"),
    ];
    for (field, value) in fields {
        flow.update_field(field, value).unwrap();
    }
}

#[tokio::test]
async fn test_submit_success() {
    let api = RecordingApi::ok();
    let mut flow = FormFlow::default();
    fill(&mut flow);

    let notification = flow.submit(&api).await.unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(
        notification.description,
        "Ada Lovelace a été ajouté à l'équipe."
    );
    assert_eq!(flow.state(), FormState::Editing);
    assert!(flow.draft().is_empty());

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    let sent = &calls[0];
    assert_eq!(sent.first_name.as_deref(), Some("Ada"));
    assert_eq!(sent.status.as_deref(), Some("active"));
    assert_eq!(sent.avatar, None);
    assert_eq!(sent.salary, Some(50000.into()));
}

#[tokio::test]
async fn test_submit_failure_is_not_retried() {
    let api = RecordingApi::failing();
    let mut flow = FormFlow::new(IdScheme::Snowflake);
    fill(&mut flow);

    let notification = flow.submit(&api).await.unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(api.calls().len(), 1);
    assert_eq!(flow.draft().first_name, "Ada");
    assert!(flow.can_submit());
}

#[tokio::test]
async fn test_blank_salary_sent_as_null() {
    let api = RecordingApi::ok();
    let mut flow = FormFlow::default();
    fill(&mut flow);
    flow.update_field(DraftField::Salary, "").unwrap();

    flow.submit(&api).await.unwrap();
    assert_eq!(api.calls()[0].salary, None);
}

#[tokio::test]
async fn test_submit_works_through_trait_object() {
    let api: Box<dyn EmployeeApi> = Box::new(RecordingApi::ok());
    let mut flow = FormFlow::default();
    fill(&mut flow);

    let notification = flow.submit(api.as_ref()).await.unwrap();
    assert!(notification.is_success());
}

#[tokio::test]
async fn test_dropped_submit_reopens_form() {
    let mut flow = FormFlow::default();
    fill(&mut flow);

    let outcome = tokio::time::timeout(Duration::from_millis(50), flow.submit(&StalledApi)).await;
    assert!(outcome.is_err());

    assert_eq!(flow.state(), FormState::Editing);
    assert!(flow.can_submit());
    assert_eq!(flow.draft().first_name, "Ada");
    flow.update_field(DraftField::Phone, "+33 6 00 00 00 00").unwrap();

    // The form can be submitted again afterwards
    let api = RecordingApi::ok();
    let notification = flow.submit(&api).await.unwrap();
    assert!(notification.is_success());
    assert_eq!(api.calls().len(), 1);
}
