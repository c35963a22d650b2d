use shared::{EmployeeCreate, EmployeeCreated};
use thiserror::Error;

use super::{Draft, DraftField, IdScheme};
use crate::{ClientError, EmployeeApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    /// A create call is in flight; the submit control is disabled
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Toast shown to the user once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn added(first_name: &str, last_name: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Employé ajouté avec succès !".to_string(),
            description: format!("{first_name} {last_name} a été ajouté à l'équipe."),
        }
    }

    fn failed() -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Erreur lors de l'ajout".to_string(),
            description: "Impossible d'ajouter l'employé. Vérifiez l'API.".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

/// Transition refused by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error("no submission in progress")]
    NotSubmitting,
}

/// The creation form: a draft plus the submission state
#[derive(Debug, Clone, Default)]
pub struct FormFlow {
    draft: Draft,
    state: FormState,
    id_scheme: IdScheme,
}

impl FormFlow {
    pub fn new(id_scheme: IdScheme) -> Self {
        Self {
            id_scheme,
            ..Default::default()
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn can_submit(&self) -> bool {
        self.state == FormState::Editing
    }

    /// Edit one field. Refused while a submission is in flight so the
    /// success message names the person actually sent.
    pub fn update_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if self.state == FormState::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// `Editing -> Submitting`; returns the body to POST.
    pub fn begin_submit(&mut self) -> Result<EmployeeCreate, FormError> {
        if self.state == FormState::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.state = FormState::Submitting;
        let payload = self.draft.to_payload(self.id_scheme.generate());
        tracing::debug!(id = ?payload.id, "Submitting employee");
        Ok(payload)
    }

    /// `Submitting -> Editing`; clears the draft only on success.
    pub fn finish(
        &mut self,
        result: Result<EmployeeCreated, ClientError>,
    ) -> Result<Notification, FormError> {
        if self.state != FormState::Submitting {
            return Err(FormError::NotSubmitting);
        }
        self.state = FormState::Editing;

        let notification = match result {
            Ok(created) => {
                tracing::info!(handle = created.id, "Employee added");
                let notification =
                    Notification::added(&self.draft.first_name, &self.draft.last_name);
                self.draft = Draft::default();
                notification
            }
            Err(e) => {
                tracing::warn!(error = %e, "Employee creation failed");
                Notification::failed()
            }
        };
        Ok(notification)
    }

    /// Abandon an in-flight submission: back to `Editing`, draft kept.
    pub fn cancel(&mut self) -> Result<(), FormError> {
        if self.state != FormState::Submitting {
            return Err(FormError::NotSubmitting);
        }
        self.state = FormState::Editing;
        tracing::debug!("Employee submission cancelled");
        Ok(())
    }

    /// One full submission: exactly one create call, no retry.
    ///
    /// Dropping the returned future before it completes leaves the form in
    /// `Editing` with the draft intact.
    pub async fn submit<A>(&mut self, api: &A) -> Result<Notification, FormError>
    where
        A: EmployeeApi + ?Sized,
    {
        let payload = self.begin_submit()?;
        let mut guard = SubmitGuard(self);
        let result = api.create_employee(&payload).await;
        guard.0.finish(result)
    }
}

/// Reopens the form if a submission is dropped mid-flight
struct SubmitGuard<'a>(&'a mut FormFlow);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.0.state == FormState::Submitting {
            let _ = self.0.cancel();
        }
    }
}
