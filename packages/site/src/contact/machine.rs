//! Submission state machine for the contact form
//!
//! A single [`ContactController`] owns the form values, the visible errors and
//! the submission phase. The phase moves to `Submitting` before the request is
//! issued, so a second submit while a request is in flight is refused.

use std::fmt::Display;

use super::form::{ContactField, FormState};
use super::validation::{validate, ErrorState, ALREADY_SUBMITTED, SUBMIT_FAILED};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Outcome of asking the controller to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; send this snapshot to the form backend
    Send(FormState),
    /// Nothing to send; the reason is in the controller's errors
    Blocked,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactController {
    form: FormState,
    errors: Option<ErrorState>,
    phase: SubmissionPhase,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> Option<&ErrorState> {
        self.errors.as_ref()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// True once a submission has been delivered; never resets
    pub fn has_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Succeeded
    }

    /// Record a keystroke. Clears any visible errors.
    pub fn update_input(&mut self, field: ContactField, value: impl Into<String>) {
        self.errors = None;
        self.form.set(field, value);
        if self.phase == SubmissionPhase::Failed {
            self.phase = SubmissionPhase::Idle;
        }
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        match self.phase {
            SubmissionPhase::Succeeded | SubmissionPhase::Submitting => {
                tracing::debug!(phase = ?self.phase, "Duplicate contact submission refused");
                self.errors = Some(ErrorState::general(ALREADY_SUBMITTED));
                return SubmitAttempt::Blocked;
            }
            SubmissionPhase::Idle | SubmissionPhase::Failed | SubmissionPhase::Validating => {}
        }

        let resume = self.phase;
        self.phase = SubmissionPhase::Validating;
        match validate(&self.form) {
            Ok(()) => {
                self.errors = None;
                self.phase = SubmissionPhase::Submitting;
                SubmitAttempt::Send(self.form.clone())
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "Contact form failed validation");
                self.errors = Some(errors);
                self.phase = resume;
                SubmitAttempt::Blocked
            }
        }
    }

    /// Apply the form backend's answer to the in-flight submission
    pub fn finish_submit<E: Display>(&mut self, result: Result<(), E>) {
        if self.phase != SubmissionPhase::Submitting {
            tracing::warn!(phase = ?self.phase, "Submission result arrived with no submission in flight");
            return;
        }

        match result {
            Ok(()) => {
                self.form = FormState::thank_you();
                self.errors = None;
                self.phase = SubmissionPhase::Succeeded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission failed");
                self.errors = Some(ErrorState::general(SUBMIT_FAILED));
                self.phase = SubmissionPhase::Failed;
            }
        }
    }
}
