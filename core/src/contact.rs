use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Form control `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
    #[error("a message is already being sent")]
    Busy,
    #[error("message not delivered: {0}")]
    Relay(String),
}

/// A validated message ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contents of the contact form while the visitor types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    name: String,
    email: String,
    message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        for field in ContactField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// Delivery of a contact message. The site ships without an email relay;
/// the browser build logs the message instead.
pub trait ContactRelay {
    fn send(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Sent,
    Failed(ContactError),
}

impl SubmitStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitStatus::Pending)
    }
}

/// Submit lifecycle: `Idle -> Pending -> Sent | Failed`. The draft is
/// cleared only after a successful delivery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    status: SubmitStatus,
}

impl ContactSubmission {
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn begin(&mut self, draft: &ContactDraft) -> Result<ContactMessage, ContactError> {
        if self.status.is_pending() {
            return Err(ContactError::Busy);
        }
        match draft.validate() {
            Ok(message) => {
                self.status = SubmitStatus::Pending;
                Ok(message)
            }
            Err(err) => {
                self.status = SubmitStatus::Failed(err.clone());
                Err(err)
            }
        }
    }

    pub fn finish(&mut self, outcome: Result<(), ContactError>, draft: &mut ContactDraft) {
        if !self.status.is_pending() {
            return;
        }
        self.status = match outcome {
            Ok(()) => {
                *draft = ContactDraft::default();
                SubmitStatus::Sent
            }
            Err(err) => SubmitStatus::Failed(err),
        };
    }

    /// Runs one full submit against `relay`.
    pub fn submit<R>(&mut self, draft: &mut ContactDraft, relay: &R) -> &SubmitStatus
    where
        R: ContactRelay + ?Sized,
    {
        if let Ok(message) = self.begin(draft) {
            let outcome = relay.send(&message);
            self.finish(outcome, draft);
        }
        &self.status
    }
}
