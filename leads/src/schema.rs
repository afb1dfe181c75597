use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::industries::BusinessType;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_LEN: usize = 10;
pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    BusinessType,
    Message,
    SelectedService,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::BusinessType,
        Field::Message,
        Field::SelectedService,
    ];

    /// Name used on the wire and as the html input name.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::BusinessType => "businessType",
            Field::Message => "message",
            Field::SelectedService => "selectedService",
        }
    }
}

/// Per-field validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.key(), message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// What the user has typed so far. Never rejected, only validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    #[serde(alias = "marketingChallenge")]
    pub message: String,
    pub selected_service: String,
}

impl LeadDraft {
    pub fn with_service(selected_service: impl Into<String>) -> Self {
        Self {
            selected_service: selected_service.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::BusinessType => &self.business_type,
            Field::Message => &self.message,
            Field::SelectedService => &self.selected_service,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::BusinessType => self.business_type = value,
            Field::Message => self.message = value,
            Field::SelectedService => self.selected_service = value,
        }
    }

    /// Empties everything the visitor typed, keeping the service label.
    pub fn clear_contact_fields(&mut self) {
        let selected_service = std::mem::take(&mut self.selected_service);
        *self = Self::with_service(selected_service);
    }
}

/// A lead that passed validation. This is the payload handed to intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub message: String,
    pub selected_service: String,
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Checks every field and reports all failures at once.
///
/// `allowed` is the business type list of the page the form was opened
/// from. The draft is left untouched either way.
pub fn validate(draft: &LeadDraft, allowed: &[BusinessType]) -> Result<LeadFormData, FieldErrors> {
    let mut errors = FieldErrors::new();

    if char_len(&draft.name) < MIN_NAME_LEN {
        errors.insert(Field::Name, "Name must be at least 2 characters");
    }
    if !draft.email.validate_email() {
        errors.insert(Field::Email, "Please enter a valid email address");
    }
    if char_len(&draft.phone) < MIN_PHONE_LEN {
        errors.insert(Field::Phone, "Phone number must be at least 10 characters");
    }
    if draft.business_type.is_empty() {
        errors.insert(Field::BusinessType, "Please select your business type");
    } else if !allowed.iter().any(|option| option.value == draft.business_type) {
        errors.insert(Field::BusinessType, "Please select a valid business type");
    }
    if char_len(&draft.message) < MIN_MESSAGE_LEN {
        errors.insert(Field::Message, "Please tell us a bit more (at least 10 characters)");
    }
    if draft.selected_service.trim().is_empty() {
        errors.insert(Field::SelectedService, "Please choose a service");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(LeadFormData {
        name: draft.name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        business_type: draft.business_type.clone(),
        message: draft.message.clone(),
        selected_service: draft.selected_service.clone(),
    })
}
