use super::{
    ContactError, EmailRelay, EmailVerdict, EmailVerifier, FormSubmission, SubmissionStatus,
    TemplateParams,
};
use crate::toast::{Notify, ToastKind};
use async_trait::async_trait;
use std::time::Duration;

pub const SUCCESS_MESSAGE: &str = "Message successfully sent!";

/// How long the success toast stays up before the form is cleared.
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_millis(3800);

/// What the flow needs from the view hosting the form.
#[async_trait(?Send)]
pub trait ContactUi: Notify {
    fn status(&self) -> SubmissionStatus;
    fn set_status(&self, status: SubmissionStatus);
    fn clear_form(&self);
    /// False once the hosting view has been unmounted.
    fn is_live(&self) -> bool;
    async fn pause(&self, duration: Duration);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Rejected(ContactError),
    /// A submission was already running; nothing happened.
    AlreadyInFlight,
    /// The view went away mid-flight; no further state was touched.
    Abandoned,
}

pub struct ContactFlow<V, R> {
    verifier: V,
    relay: R,
    clear_delay: Duration,
}

impl<V, R> ContactFlow<V, R>
where
    V: EmailVerifier,
    R: EmailRelay,
{
    pub fn new(verifier: V, relay: R) -> Self {
        Self {
            verifier,
            relay,
            clear_delay: SUCCESS_CLEAR_DELAY,
        }
    }

    pub fn with_clear_delay(mut self, clear_delay: Duration) -> Self {
        self.clear_delay = clear_delay;
        self
    }

    /// Run one submission attempt to completion.
    ///
    /// The status is busy from the first state change until exactly one of
    /// the success, rejection, or invalid-address paths finishes. No call is
    /// retried.
    pub async fn submit<U: ContactUi>(&self, ui: &U, submission: FormSubmission) -> SubmissionOutcome {
        if ui.status().is_busy() {
            log::debug!("contact submission ignored, one is already in flight");
            return SubmissionOutcome::AlreadyInFlight;
        }

        if let Some(field) = submission.first_missing_field() {
            return reject(ui, ContactError::MissingField(field));
        }

        ui.set_status(SubmissionStatus::Validating);
        let verdict = self.verifier.verify(&submission.email).await;
        if !ui.is_live() {
            return SubmissionOutcome::Abandoned;
        }
        match verdict {
            Ok(EmailVerdict::Valid) => {}
            Ok(EmailVerdict::Invalid) => return reject(ui, ContactError::InvalidEmail),
            Err(err) => {
                log::warn!("{}", err);
                return reject(ui, ContactError::InvalidEmail);
            }
        }

        ui.set_status(SubmissionStatus::Sending);
        let params = TemplateParams::from_submission(&submission);
        let delivery = self.relay.send(&params).await;
        if !ui.is_live() {
            return SubmissionOutcome::Abandoned;
        }
        if let Err(err) = delivery {
            log::warn!("{}", err);
            return reject(ui, ContactError::DeliveryRejected);
        }

        ui.notify(SUCCESS_MESSAGE, ToastKind::Success);
        ui.pause(self.clear_delay).await;
        if !ui.is_live() {
            return SubmissionOutcome::Abandoned;
        }
        ui.clear_form();
        ui.set_status(SubmissionStatus::Succeeded);
        SubmissionOutcome::Sent
    }
}

fn reject<U: ContactUi>(ui: &U, error: ContactError) -> SubmissionOutcome {
    ui.set_status(SubmissionStatus::Failed(error.clone()));
    ui.notify(&error.user_message(), ToastKind::Error);
    SubmissionOutcome::Rejected(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{RelayError, VerifyError};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Status(SubmissionStatus),
        Toast(ToastKind, String),
        Pause(Duration),
        Clear,
    }

    struct RecordingUi {
        status: RefCell<SubmissionStatus>,
        events: RefCell<Vec<Event>>,
        live: Cell<bool>,
        /// Unmount the view when this many awaits have completed.
        unmount_after_awaits: Option<usize>,
        awaits: Cell<usize>,
    }

    impl RecordingUi {
        fn new() -> Self {
            Self {
                status: RefCell::new(SubmissionStatus::Idle),
                events: RefCell::new(Vec::new()),
                live: Cell::new(true),
                unmount_after_awaits: None,
                awaits: Cell::new(0),
            }
        }

        fn unmounting_after(awaits: usize) -> Self {
            Self {
                unmount_after_awaits: Some(awaits),
                ..Self::new()
            }
        }

        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        /// Called by the test doubles whenever the flow resumes from an await.
        fn awaited(&self) {
            let n = self.awaits.get() + 1;
            self.awaits.set(n);
            if self.unmount_after_awaits == Some(n) {
                self.live.set(false);
            }
        }
    }

    impl Notify for RecordingUi {
        fn notify(&self, message: &str, kind: ToastKind) {
            self.events
                .borrow_mut()
                .push(Event::Toast(kind, message.to_string()));
        }
    }

    #[async_trait(?Send)]
    impl ContactUi for RecordingUi {
        fn status(&self) -> SubmissionStatus {
            self.status.borrow().clone()
        }

        fn set_status(&self, status: SubmissionStatus) {
            self.events.borrow_mut().push(Event::Status(status.clone()));
            *self.status.borrow_mut() = status;
        }

        fn clear_form(&self) {
            self.events.borrow_mut().push(Event::Clear);
        }

        fn is_live(&self) -> bool {
            self.live.get()
        }

        async fn pause(&self, duration: Duration) {
            self.events.borrow_mut().push(Event::Pause(duration));
            self.awaited();
        }
    }

    enum VerifierReply {
        Verdict(EmailVerdict),
        Unreachable,
    }

    struct StubVerifier<'a> {
        reply: VerifierReply,
        calls: RefCell<Vec<String>>,
        ui: Option<&'a RecordingUi>,
    }

    impl<'a> StubVerifier<'a> {
        fn answering(verdict: EmailVerdict) -> Self {
            Self {
                reply: VerifierReply::Verdict(verdict),
                calls: RefCell::new(Vec::new()),
                ui: None,
            }
        }

        fn unreachable() -> Self {
            Self {
                reply: VerifierReply::Unreachable,
                ..Self::answering(EmailVerdict::Invalid)
            }
        }

        fn observed_by(mut self, ui: &'a RecordingUi) -> Self {
            self.ui = Some(ui);
            self
        }
    }

    #[async_trait(?Send)]
    impl EmailVerifier for StubVerifier<'_> {
        async fn verify(&self, email: &str) -> Result<EmailVerdict, VerifyError> {
            self.calls.borrow_mut().push(email.to_string());
            if let Some(ui) = self.ui {
                ui.awaited();
            }
            match self.reply {
                VerifierReply::Verdict(verdict) => Ok(verdict),
                VerifierReply::Unreachable => Err(transport_error()),
            }
        }
    }

    struct StubRelay<'a> {
        accept: bool,
        sent: RefCell<Vec<TemplateParams>>,
        ui: Option<&'a RecordingUi>,
    }

    impl<'a> StubRelay<'a> {
        fn accepting() -> Self {
            Self {
                accept: true,
                sent: RefCell::new(Vec::new()),
                ui: None,
            }
        }

        fn rejecting() -> Self {
            Self {
                accept: false,
                ..Self::accepting()
            }
        }

        fn observed_by(mut self, ui: &'a RecordingUi) -> Self {
            self.ui = Some(ui);
            self
        }
    }

    #[async_trait(?Send)]
    impl EmailRelay for StubRelay<'_> {
        async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(params.clone());
            if let Some(ui) = self.ui {
                ui.awaited();
            }
            if self.accept {
                Ok(())
            } else {
                Err(RelayError::Rejected {
                    status: 400,
                    body: "The template ID is invalid".to_string(),
                })
            }
        }
    }

    /// A reqwest error without touching the network: the URL never parses.
    fn transport_error() -> VerifyError {
        match reqwest::Client::new().get("not a url").build() {
            Err(err) => VerifyError::Transport(err),
            Ok(_) => unreachable!("relative URL must not build"),
        }
    }

    fn submission() -> FormSubmission {
        FormSubmission {
            name: "jOHN smith".to_string(),
            email: "john@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "Hi there".to_string(),
        }
    }

    fn toast(kind: ToastKind, message: &str) -> Event {
        Event::Toast(kind, message.to_string())
    }

    #[test]
    fn test_success_path_clears_after_pause() {
        let ui = RecordingUi::new();
        let flow = ContactFlow::new(
            StubVerifier::answering(EmailVerdict::Valid),
            StubRelay::accepting(),
        );

        let outcome = block_on(flow.submit(&ui, submission()));

        assert_eq!(outcome, SubmissionOutcome::Sent);
        assert_eq!(
            ui.events(),
            vec![
                Event::Status(SubmissionStatus::Validating),
                Event::Status(SubmissionStatus::Sending),
                toast(ToastKind::Success, SUCCESS_MESSAGE),
                Event::Pause(SUCCESS_CLEAR_DELAY),
                Event::Clear,
                Event::Status(SubmissionStatus::Succeeded),
            ]
        );
        assert_eq!(*flow.verifier.calls.borrow(), vec!["john@example.com"]);

        let sent = flow.relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].firstname, "John");
        assert_eq!(sent[0].name, "jOHN smith");
    }

    #[test]
    fn test_busy_until_form_cleared() {
        let ui = RecordingUi::new();
        let flow = ContactFlow::new(
            StubVerifier::answering(EmailVerdict::Valid),
            StubRelay::accepting(),
        )
        .with_clear_delay(Duration::from_millis(10));

        block_on(flow.submit(&ui, submission()));

        let events = ui.events();
        let pause = events.iter().position(|e| matches!(e, Event::Pause(_))).unwrap();
        let clear = events.iter().position(|e| *e == Event::Clear).unwrap();
        let idle_again = events
            .iter()
            .position(|e| matches!(e, Event::Status(s) if !s.is_busy()))
            .unwrap();
        assert!(pause < clear);
        assert_eq!(idle_again, clear + 1);
        assert_eq!(events[pause], Event::Pause(Duration::from_millis(10)));
    }

    #[test]
    fn test_invalid_email_never_reaches_relay() {
        let ui = RecordingUi::new();
        let flow = ContactFlow::new(
            StubVerifier::answering(EmailVerdict::Invalid),
            StubRelay::accepting(),
        );

        let outcome = block_on(flow.submit(&ui, submission()));

        assert_eq!(outcome, SubmissionOutcome::Rejected(ContactError::InvalidEmail));
        assert!(flow.relay.sent.borrow().is_empty());
        assert_eq!(
            ui.events(),
            vec![
                Event::Status(SubmissionStatus::Validating),
                Event::Status(SubmissionStatus::Failed(ContactError::InvalidEmail)),
                toast(ToastKind::Error, "Please enter a valid email address"),
            ]
        );
    }

    #[test]
    fn test_verification_transport_error_counts_as_invalid() {
        let ui = RecordingUi::new();
        let flow = ContactFlow::new(StubVerifier::unreachable(), StubRelay::accepting());

        let outcome = block_on(flow.submit(&ui, submission()));

        assert_eq!(outcome, SubmissionOutcome::Rejected(ContactError::InvalidEmail));
        assert!(flow.relay.sent.borrow().is_empty());
        assert_eq!(ui.status(), SubmissionStatus::Failed(ContactError::InvalidEmail));
    }

    #[test]
    fn test_delivery_failure_keeps_fields_and_reenables_immediately() {
        let ui = RecordingUi::new();
        let flow = ContactFlow::new(
            StubVerifier::answering(EmailVerdict::Valid),
            StubRelay::rejecting(),
        );

        let outcome = block_on(flow.submit(&ui, submission()));

        assert_eq!(outcome, SubmissionOutcome::Rejected(ContactError::DeliveryRejected));
        let events = ui.events();
        assert!(!events.contains(&Event::Clear));
        assert!(!events.iter().any(|e| matches!(e, Event::Pause(_))));
        assert_eq!(
            events,
            vec![
                Event::Status(SubmissionStatus::Validating),
                Event::Status(SubmissionStatus::Sending),
                Event::Status(SubmissionStatus::Failed(ContactError::DeliveryRejected)),
                toast(ToastKind::Error, "Failed to send the message, please try again"),
            ]
        );
        assert!(!ui.status().is_busy());
    }

    #[test]
    fn test_reentry_while_busy_is_ignored() {
        for busy in [SubmissionStatus::Validating, SubmissionStatus::Sending] {
            let ui = RecordingUi::new();
            *ui.status.borrow_mut() = busy.clone();
            let flow = ContactFlow::new(
                StubVerifier::answering(EmailVerdict::Valid),
                StubRelay::accepting(),
            );

            let outcome = block_on(flow.submit(&ui, submission()));

            assert_eq!(outcome, SubmissionOutcome::AlreadyInFlight);
            assert!(ui.events().is_empty());
            assert!(flow.verifier.calls.borrow().is_empty());
            assert!(flow.relay.sent.borrow().is_empty());
            assert_eq!(ui.status(), busy);
        }
    }

    #[test]
    fn test_resubmit_after_failure_runs_again() {
        let ui = RecordingUi::new();
        *ui.status.borrow_mut() = SubmissionStatus::Failed(ContactError::DeliveryRejected);
        let flow = ContactFlow::new(
            StubVerifier::answering(EmailVerdict::Valid),
            StubRelay::accepting(),
        )
        .with_clear_delay(Duration::ZERO);

        assert_eq!(block_on(flow.submit(&ui, submission())), SubmissionOutcome::Sent);
        assert_eq!(flow.verifier.calls.borrow().len(), 1);
    }

    #[test]
    fn test_blank_field_rejected_before_any_call() {
        let ui = RecordingUi::new();
        let flow = ContactFlow::new(
            StubVerifier::answering(EmailVerdict::Valid),
            StubRelay::accepting(),
        );
        let mut form = submission();
        form.subject = "   ".to_string();

        let outcome = block_on(flow.submit(&ui, form));

        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected(ContactError::MissingField("subject"))
        );
        assert!(flow.verifier.calls.borrow().is_empty());
        assert_eq!(
            ui.events(),
            vec![
                Event::Status(SubmissionStatus::Failed(ContactError::MissingField("subject"))),
                toast(ToastKind::Error, "Please fill in your subject"),
            ]
        );
    }

    #[test]
    fn test_unmount_during_verification_stops_flow() {
        let ui = RecordingUi::unmounting_after(1);
        let flow = ContactFlow::new(
            StubVerifier::answering(EmailVerdict::Valid).observed_by(&ui),
            StubRelay::accepting(),
        );

        let outcome = block_on(flow.submit(&ui, submission()));

        assert_eq!(outcome, SubmissionOutcome::Abandoned);
        assert!(flow.relay.sent.borrow().is_empty());
        assert_eq!(ui.events(), vec![Event::Status(SubmissionStatus::Validating)]);
    }

    #[test]
    fn test_unmount_during_delivery_skips_feedback() {
        let ui = RecordingUi::unmounting_after(2);
        let flow = ContactFlow::new(
            StubVerifier::answering(EmailVerdict::Valid).observed_by(&ui),
            StubRelay::accepting().observed_by(&ui),
        );

        let outcome = block_on(flow.submit(&ui, submission()));

        assert_eq!(outcome, SubmissionOutcome::Abandoned);
        assert_eq!(flow.relay.sent.borrow().len(), 1);
        assert_eq!(
            ui.events(),
            vec![
                Event::Status(SubmissionStatus::Validating),
                Event::Status(SubmissionStatus::Sending),
            ]
        );
    }

    #[test]
    fn test_unmount_during_success_pause_leaves_form_alone() {
        let ui = RecordingUi::unmounting_after(3);
        let flow = ContactFlow::new(
            StubVerifier::answering(EmailVerdict::Valid).observed_by(&ui),
            StubRelay::accepting().observed_by(&ui),
        );

        let outcome = block_on(flow.submit(&ui, submission()));

        assert_eq!(outcome, SubmissionOutcome::Abandoned);
        let events = ui.events();
        assert!(!events.contains(&Event::Clear));
        assert_eq!(events.last(), Some(&Event::Pause(SUCCESS_CLEAR_DELAY)));
    }
}
