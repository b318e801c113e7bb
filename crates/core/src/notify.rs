//! Notification text shown after a create, update or delete request returns.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    fn past_tense(self) -> &'static str {
        match self {
            Action::Create => "created",
            Action::Update => "updated",
            Action::Delete => "deleted",
        }
    }
}

/// Whether the request touched one task or several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Multiplicity {
    #[default]
    Single,
    Multiple,
}

impl Multiplicity {
    fn noun(self) -> &'static str {
        match self {
            Multiplicity::Single => "Task",
            Multiplicity::Multiple => "Tasks",
        }
    }
}

enum StatusMessage {
    Success(Action, Multiplicity),
    ClientError,
    ServerError,
    Other,
}

impl StatusMessage {
    fn classify(status: u16, action: Action, count: Multiplicity) -> Self {
        match status {
            200..=299 => StatusMessage::Success(action, count),
            400..=499 => StatusMessage::ClientError,
            500..=599 => StatusMessage::ServerError,
            _ => StatusMessage::Other,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Success(action, count) => {
                write!(f, "{} successfully {}", count.noun(), action.past_tense())
            }
            StatusMessage::ClientError => {
                write!(f, "Client-side error encountered, please try again")
            }
            StatusMessage::ServerError => {
                write!(f, "Server-side error encountered, please try again")
            }
            StatusMessage::Other => write!(f, "Error encountered, please try again"),
        }
    }
}

/// Message for an HTTP status code returned by a task request.
pub fn status_message(status: u16, action: Action, count: Multiplicity) -> String {
    StatusMessage::classify(status, action, count).to_string()
}
