//! Form validation and the step machines behind the contact and
//! forgot-password pages.
//!
//! Transitions are synchronous here. The storefront waits a simulated
//! network delay between a successful transition and its response.

use serde::{Deserialize, Serialize};

use crate::types::{Email, EmailError};

/// Minimum length of a new password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Number of digits in a reset code.
pub const RESET_CODE_LENGTH: usize = 6;

/// Inline validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid email address.")]
    InvalidEmail(#[from] EmailError),
    #[error("Please enter the 6-digit code.")]
    InvalidCode,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("This step has expired. Please continue from where you left off.")]
    WrongStep(ResetStep),
}

// =============================================================================
// Forgot password
// =============================================================================

/// Steps of the password reset flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetStep {
    #[default]
    Email,
    Sent,
    Reset,
    Success,
}

impl ResetStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sent => "sent",
            Self::Reset => "reset",
            Self::Success => "success",
        }
    }
}

/// State of one visitor's password reset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForgotPassword {
    step: ResetStep,
    email: Option<Email>,
}

impl ForgotPassword {
    #[must_use]
    pub const fn step(&self) -> ResetStep {
        self.step
    }

    /// Address the code was sent to, once past the first step.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    fn expect_step(&self, step: ResetStep) -> Result<(), FormError> {
        if self.step == step {
            Ok(())
        } else {
            Err(FormError::WrongStep(self.step))
        }
    }

    /// `Email -> Sent` when `input` is a well-formed address.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidEmail`] and stays on `Email` otherwise.
    pub fn submit_email(&mut self, input: &str) -> Result<(), FormError> {
        self.expect_step(ResetStep::Email)?;
        let email = Email::parse(input)?;
        self.email = Some(email);
        self.step = ResetStep::Sent;
        Ok(())
    }

    /// `Sent -> Reset` when `code` is exactly six ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidCode`] and stays on `Sent` otherwise.
    pub fn verify_code(&mut self, code: &str) -> Result<(), FormError> {
        self.expect_step(ResetStep::Sent)?;
        let code = code.trim();
        if code.len() != RESET_CODE_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormError::InvalidCode);
        }
        self.step = ResetStep::Reset;
        Ok(())
    }

    /// Ask for another code; the step does not change.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::WrongStep`] outside `Sent`.
    pub fn resend(&self) -> Result<(), FormError> {
        self.expect_step(ResetStep::Sent)
    }

    /// `Reset -> Success` when the password is long enough and confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::PasswordTooShort`] or
    /// [`FormError::PasswordMismatch`] and stays on `Reset`.
    pub fn reset_password(&mut self, password: &str, confirm: &str) -> Result<(), FormError> {
        self.expect_step(ResetStep::Reset)?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(FormError::PasswordTooShort);
        }
        if password != confirm {
            return Err(FormError::PasswordMismatch);
        }
        self.step = ResetStep::Success;
        Ok(())
    }

    /// Back to the first step, forgetting the address.
    pub fn restart(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Contact
// =============================================================================

/// Topic picked in the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactSubject {
    #[default]
    General,
    Order,
    Returns,
    Wholesale,
    Press,
}

impl ContactSubject {
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Order,
        Self::Returns,
        Self::Wholesale,
        Self::Press,
    ];

    /// Parse a form value, falling back to `General`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "order" => Self::Order,
            "returns" => Self::Returns,
            "wholesale" => Self::Wholesale,
            "press" => Self::Press,
            _ => Self::General,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Order => "order",
            Self::Returns => "returns",
            Self::Wholesale => "wholesale",
            Self::Press => "press",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Order => "Order Support",
            Self::Returns => "Returns & Exchanges",
            Self::Wholesale => "Wholesale",
            Self::Press => "Press & Media",
        }
    }
}

/// Contact form fields as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// A contact message that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactForm {
    /// Validate fields in display order and return the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Required`] for a blank name or message and
    /// [`FormError::InvalidEmail`] for a malformed address.
    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Required("Name"));
        }
        let email = Email::parse(&self.email)?;
        let message = self.message.trim();
        if message.is_empty() {
            return Err(FormError::Required("Message"));
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email,
            subject: ContactSubject::parse(&self.subject),
            message: message.to_string(),
        })
    }
}

/// Send status of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl ContactStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Sent => "sent",
        }
    }
}

/// `Idle -> Sending -> Sent -> Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFlow {
    status: ContactStatus,
}

impl ContactFlow {
    #[must_use]
    pub const fn status(&self) -> ContactStatus {
        self.status
    }

    /// Validate and move to `Sending`.
    ///
    /// Each POST starts from a fresh flow, so a second message from the same
    /// visitor is simply another send. The page disables its submit button
    /// while a send is in flight.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the status unchanged.
    pub fn submit(&mut self, form: &ContactForm) -> Result<ContactMessage, FormError> {
        let message = form.validate()?;
        self.status = ContactStatus::Sending;
        Ok(message)
    }

    /// `Sending -> Sent` once the simulated request completes.
    pub fn complete(&mut self) {
        if self.status == ContactStatus::Sending {
            self.status = ContactStatus::Sent;
        }
    }

    /// Back to a blank form.
    pub fn reset(&mut self) {
        self.status = ContactStatus::Idle;
    }
}
