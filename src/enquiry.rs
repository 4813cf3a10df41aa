// src/enquiry.rs
//
// Enquiry desk: the lead-capture form, its submission boundary, and the
// status banner lifecycle.
//
// Submission is fire-and-forget in current scope: the sink receives the
// record, the banner shows success immediately, and the form resets. A
// real transport would implement EnquirySink and report failure through
// the Error status kind.

use std::time::{Duration, Instant};

use crate::config::consts::STATUS_CLEAR_SECS;

/// Banner text after a submission.
pub const SUBMIT_SUCCESS_MSG: &str =
    "Thank you for your enquiry. We will get in touch with you shortly.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Audience {
    #[default]
    Candidate,
    Employer,
}

impl Audience {
    pub fn label(self) -> &'static str {
        match self {
            Audience::Candidate => "Candidate",
            Audience::Employer => "Employer",
        }
    }
}

/// The 8-field enquiry record. Created all-empty, mutated field by field
/// from the inputs, reset wholesale after a submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnquiryForm {
    pub contact_person: String,
    pub company_name: String,
    pub address: String,
    pub email: String,
    pub country: String,
    pub phone: String,
    pub audience: Audience,
    pub details: String,
}

impl EnquiryForm {
    /// Presence check for the required fields (company name and address
    /// are optional). No format validation here.
    pub fn is_complete(&self) -> bool {
        !self.contact_person.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.country.trim().is_empty()
            && !self.details.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// A banner message with its expiry.
#[derive(Clone, Debug)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
    clear_at: Instant,
}

/// Where submitted enquiries go. The shipped sink just logs; an email or
/// API transport slots in behind the same trait.
pub trait EnquirySink {
    fn submit(&self, form: &EnquiryForm);
}

pub struct LogSink;

impl EnquirySink for LogSink {
    fn submit(&self, form: &EnquiryForm) {
        logf!(
            "Enquiry: Submitted ({}) {} <{}> {} / {}",
            form.audience.label(),
            form.contact_person,
            form.email,
            form.phone,
            form.country,
        );
    }
}

pub struct EnquiryDesk {
    pub form: EnquiryForm,
    status: Option<Status>,
}

impl EnquiryDesk {
    pub fn new() -> Self {
        Self { form: EnquiryForm::default(), status: None }
    }

    /// Hand the record to the sink, show success, reset the form.
    /// The banner clears on its own after `STATUS_CLEAR_SECS`.
    pub fn submit(&mut self, sink: &dyn EnquirySink, now: Instant) {
        sink.submit(&self.form);
        self.status = Some(Status {
            kind: StatusKind::Success,
            message: s!(SUBMIT_SUCCESS_MSG),
            clear_at: now + Duration::from_secs(STATUS_CLEAR_SECS),
        });
        self.form = EnquiryForm::default();
    }

    /// Run every frame: drop an expired banner.
    pub fn tick(&mut self, now: Instant) {
        if let Some(s) = &self.status {
            if now >= s.clear_at {
                self.status = None;
            }
        }
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
}

impl Default for EnquiryDesk {
    fn default() -> Self {
        Self::new()
    }
}
