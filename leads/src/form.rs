use std::time::Duration;

use thiserror::Error;

use crate::industries::BusinessType;
use crate::schema::{validate, Field, FieldErrors, LeadDraft, LeadFormData};

/// How long the confirmation stays up before the dialog closes itself.
pub const SUCCESS_CLOSE_DELAY: Duration = Duration::from_secs(2);
/// Artificial latency of the offline intake used in demos and local work.
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1_500);

pub const SUBMIT_FAILED_BANNER: &str =
    "Something went wrong sending your request. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Success,
}

/// Identifies one accepted submission so late completions can be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; the caller must send `lead` and report back.
    Accepted {
        ticket: SubmissionTicket,
        lead: LeadFormData,
    },
    /// Validation failed; errors are on the form.
    Rejected,
    /// A submission is already in flight or the success message is up.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("the server refused the request with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("the server found problems with the form: {0}")]
    Invalid(FieldErrors),
}

impl SubmitError {
    fn banner(&self) -> String {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            SubmitError::Invalid(_) => "Please fix the highlighted fields and try again.".to_string(),
            _ => SUBMIT_FAILED_BANNER.to_string(),
        }
    }
}

/// State of the lead form inside the contact dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    draft: LeadDraft,
    errors: FieldErrors,
    phase: FormPhase,
    banner: Option<String>,
    next_ticket: u64,
    in_flight: Option<SubmissionTicket>,
}

impl LeadForm {
    pub fn new(selected_service: &str) -> Self {
        Self {
            draft: LeadDraft::with_service(selected_service),
            errors: FieldErrors::new(),
            phase: FormPhase::Editing,
            banner: None,
            next_ticket: 0,
            in_flight: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Applies a keystroke. Returns false when inputs are locked.
    pub fn set_field(&mut self, field: Field, value: String) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        self.draft.set(field, value);
        self.errors.remove(field);
        true
    }

    /// Follows the dialog's selection while the visitor is still editing.
    pub fn sync_service(&mut self, label: &str) -> bool {
        if self.phase != FormPhase::Editing || label.trim().is_empty() {
            return false;
        }
        if self.draft.selected_service == label {
            return false;
        }
        self.draft.selected_service = label.to_string();
        self.errors.remove(Field::SelectedService);
        true
    }

    pub fn submit(&mut self, allowed: &[BusinessType]) -> SubmitAttempt {
        if self.phase != FormPhase::Editing {
            return SubmitAttempt::Ignored;
        }

        match validate(&self.draft, allowed) {
            Ok(lead) => {
                let ticket = SubmissionTicket(self.next_ticket);
                self.next_ticket += 1;
                self.in_flight = Some(ticket);
                self.errors.clear();
                self.banner = None;
                self.phase = FormPhase::Submitting;
                SubmitAttempt::Accepted { ticket, lead }
            }
            Err(errors) => {
                self.errors = errors;
                SubmitAttempt::Rejected
            }
        }
    }

    /// Reports how the submission for `ticket` went. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: SubmissionTicket, outcome: Result<(), SubmitError>) -> bool {
        if self.phase != FormPhase::Submitting || self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(()) => {
                self.draft.clear_contact_fields();
                self.phase = FormPhase::Success;
            }
            Err(err) => {
                self.banner = Some(err.banner());
                if let SubmitError::Invalid(errors) = err {
                    self.errors.extend(errors);
                }
                self.phase = FormPhase::Editing;
            }
        }
        true
    }

    /// Leaves the confirmation screen so the form is ready for the next visitor.
    pub fn acknowledge_success(&mut self) -> bool {
        if self.phase != FormPhase::Success {
            return false;
        }
        self.phase = FormPhase::Editing;
        self.errors.clear();
        self.banner = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::industries::Industry;

    fn fill(form: &mut LeadForm) {
        form.set_field(Field::Name, "Priya Raman".into());
        form.set_field(Field::Email, "priya@ramandental.com".into());
        form.set_field(Field::Phone, "415-555-0182".into());
        form.set_field(Field::BusinessType, "dental".into());
        form.set_field(Field::Message, "New patient bookings are flat.".into());
    }

    fn healthcare() -> &'static [BusinessType] {
        Industry::Healthcare.business_types()
    }

    fn accept(form: &mut LeadForm) -> (SubmissionTicket, LeadFormData) {
        match form.submit(healthcare()) {
            SubmitAttempt::Accepted { ticket, lead } => (ticket, lead),
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn valid_submission_goes_through_submitting_to_success() {
        let mut form = LeadForm::new("Dental Growth - $1,297/mo");
        fill(&mut form);

        let (ticket, lead) = accept(&mut form);
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(form.errors().is_empty());
        assert_eq!(lead.selected_service, "Dental Growth - $1,297/mo");

        assert!(form.complete(ticket, Ok(())));
        assert_eq!(form.phase(), FormPhase::Success);
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::SelectedService), "Dental Growth - $1,297/mo");
    }

    #[test]
    fn invalid_submission_stays_editing_and_keeps_input() {
        let mut form = LeadForm::new("Healthcare Marketing Consultation");
        fill(&mut form);
        form.set_field(Field::Email, "priya@".into());
        let before = form.draft().clone();

        assert_eq!(form.submit(healthcare()), SubmitAttempt::Rejected);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.errors().len(), 1);
        assert!(form.error(Field::Email).is_some());
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = LeadForm::new("x");
        assert_eq!(form.submit(healthcare()), SubmitAttempt::Rejected);
        assert!(form.error(Field::Name).is_some());
        form.set_field(Field::Name, "Al".into());
        assert!(form.error(Field::Name).is_none());
        assert!(form.error(Field::Email).is_some());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = LeadForm::new("Healthcare Marketing Consultation");
        fill(&mut form);

        let (ticket, _) = accept(&mut form);
        assert_eq!(form.submit(healthcare()), SubmitAttempt::Ignored);
        assert!(!form.set_field(Field::Name, "changed".into()));

        assert!(form.complete(ticket, Ok(())));
        assert!(!form.complete(ticket, Ok(())));
        assert_eq!(form.submit(healthcare()), SubmitAttempt::Ignored);
    }

    #[test]
    fn failure_returns_to_editing_with_banner() {
        let mut form = LeadForm::new("Healthcare Marketing Consultation");
        fill(&mut form);
        let before = form.draft().clone();

        let (ticket, _) = accept(&mut form);
        let err = SubmitError::Network("connection reset".into());
        assert!(form.complete(ticket, Err(err)));

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.banner(), Some(SUBMIT_FAILED_BANNER));
        assert_eq!(form.draft(), &before);

        // manual retry gets a fresh ticket
        let (retry, _) = accept(&mut form);
        assert_ne!(retry, ticket);
        assert!(form.banner().is_none());
    }

    #[test]
    fn server_message_and_field_errors_surface() {
        let mut form = LeadForm::new("Healthcare Marketing Consultation");
        fill(&mut form);

        let (ticket, _) = accept(&mut form);
        form.complete(
            ticket,
            Err(SubmitError::Rejected {
                status: 429,
                message: Some("Too many requests, please wait a minute.".into()),
            }),
        );
        assert_eq!(form.banner(), Some("Too many requests, please wait a minute."));

        let (ticket, _) = accept(&mut form);
        let mut fields = FieldErrors::new();
        fields.insert(Field::Email, "Please enter a valid email address");
        form.complete(ticket, Err(SubmitError::Invalid(fields)));
        assert_eq!(form.error(Field::Email), Some("Please enter a valid email address"));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut form = LeadForm::new("Healthcare Marketing Consultation");
        fill(&mut form);
        let (first, _) = accept(&mut form);
        form.complete(first, Err(SubmitError::Network("timeout".into())));

        let (second, _) = accept(&mut form);
        assert!(!form.complete(first, Ok(())));
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(form.complete(second, Ok(())));
    }

    #[test]
    fn acknowledge_returns_to_clean_editing() {
        let mut form = LeadForm::new("Healthcare Marketing Consultation");
        assert!(!form.acknowledge_success());
        fill(&mut form);
        let (ticket, _) = accept(&mut form);
        form.complete(ticket, Ok(()));

        assert!(form.acknowledge_success());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft(), &LeadDraft::with_service("Healthcare Marketing Consultation"));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn sync_service_only_while_editing() {
        let mut form = LeadForm::new("Healthcare Marketing Consultation");
        assert!(form.sync_service("Clinic Starter - $997/mo"));
        assert!(!form.sync_service(""));
        assert_eq!(form.value(Field::SelectedService), "Clinic Starter - $997/mo");

        fill(&mut form);
        accept(&mut form);
        assert!(!form.sync_service("Something else"));
        assert_eq!(form.value(Field::SelectedService), "Clinic Starter - $997/mo");
    }
}
