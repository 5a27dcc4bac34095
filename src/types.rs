//! Common types and data structures

use crate::constants::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
use serde::{Deserialize, Serialize};

/// The record collected by the form. Every field is a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
}

/// Identifies one field of [`UserDetails`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
    Age,
    Gender,
}

impl UserField {
    /// Display order in the form
    pub const ALL: [UserField; 4] = [
        UserField::Name,
        UserField::Email,
        UserField::Age,
        UserField::Gender,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserField::Name => "NAME",
            UserField::Email => "EMAIL",
            UserField::Age => "AGE",
            UserField::Gender => "GENDER",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            UserField::Name => "Full name",
            UserField::Email => "name@example.com",
            UserField::Age => "Age in years",
            UserField::Gender => "Type or pick a suggestion",
        }
    }
}

impl UserDetails {
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Age => &self.age,
            UserField::Gender => &self.gender,
        }
    }

    pub fn field_mut(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::Name => &mut self.name,
            UserField::Email => &mut self.email,
            UserField::Age => &mut self.age,
            UserField::Gender => &mut self.gender,
        }
    }

    #[cfg(test)]
    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }
}

/// Outcome of a submission, shown to the user as a blocking modal.
/// The server's reply is only logged, never shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Success,
    Failure { error: String },
}

impl Alert {
    pub fn is_success(&self) -> bool {
        matches!(self, Alert::Success)
    }

    /// Secondary text under the message
    pub fn detail(&self) -> Option<&str> {
        match self {
            Alert::Success => None,
            Alert::Failure { error } => Some(error),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Alert::Success => SUCCESS_MESSAGE,
            Alert::Failure { .. } => FAILURE_MESSAGE,
        }
    }
}

/// Submission state shared between the UI thread and the request task
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Finished(Alert),
}
