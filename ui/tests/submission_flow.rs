//! End-to-end inquiry flow against an in-memory form collector: draft edits,
//! payload on the wire, and what the form looks like after the reply.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::{InquiryClient, SubmitError, Transport};
use futures::executor::block_on;
use tokio::time::timeout;
use ui::core::config::SiteConfig;
use ui::core::inquiry::{
    DraftEdit, EventType, GuestCount, InquiryDraft, InquiryForm, SubmitBlocked, SubmitOutcome,
    TermsAcceptance, TextField,
};
use ui::core::timing::after_ms;

/// Replies with a fixed status (or a network failure) and keeps every body it saw.
struct Collector {
    reply: Result<u16, ()>,
    bodies: RefCell<Vec<String>>,
}

impl Collector {
    fn replying(status: u16) -> Self {
        Self {
            reply: Ok(status),
            bodies: RefCell::new(Vec::new()),
        }
    }

    fn unreachable() -> Self {
        Self {
            reply: Err(()),
            bodies: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for Collector {
    async fn post_json(&self, _url: &str, body: String) -> Result<u16, SubmitError> {
        self.bodies.borrow_mut().push(body);
        self.reply
            .map_err(|()| SubmitError::Network("connection reset".into()))
    }
}

fn wedding_form() -> InquiryForm {
    let mut form = InquiryForm::default();
    fill_wedding(&mut form);
    form
}

fn fill_wedding(form: &mut InquiryForm) {
    for edit in [
        DraftEdit::Text(TextField::FirstName, "Maria".into()),
        DraftEdit::Text(TextField::LastName, "Huber".into()),
        DraftEdit::Text(TextField::Email, "maria@example.at".into()),
        DraftEdit::Text(TextField::Phone, "+43 660 1234567".into()),
        DraftEdit::Text(TextField::Message, "Trauung im Garten, Feier in der Grotte".into()),
        DraftEdit::EventType(Some(EventType::Wedding)),
        DraftEdit::GuestCount(Some(GuestCount::UpTo150)),
        DraftEdit::Terms(TermsAcceptance::Checked),
    ] {
        form.apply(edit);
    }
}

/// What the contact section does on one submit click, minus the rendering.
/// Returns the outcome and how many alerts were raised.
fn click_submit<T: Transport>(
    form: &mut InquiryForm,
    client: &InquiryClient<T>,
    require_terms: bool,
) -> Result<(SubmitOutcome, usize), SubmitBlocked> {
    let payload = form.begin_submit(require_terms)?;
    let result = block_on(client.submit(&payload));
    let outcome = form.finish_submit(result);
    let alerts = usize::from(outcome == SubmitOutcome::Failed);
    Ok((outcome, alerts))
}

#[test]
fn accepted_inquiry_posts_values_and_resets_the_form() {
    let client = InquiryClient::with_transport("https://collector.test/f", Collector::replying(200));
    let mut form = wedding_form();

    let (outcome, alerts) = click_submit(&mut form, &client, true).expect("not blocked");

    let bodies = client.transport().bodies.borrow();
    assert_eq!(bodies.len(), 1);
    assert!(
        bodies[0].contains(r#""eventType":"wedding","guestCount":"101-150""#),
        "{}",
        bodies[0]
    );
    assert!(bodies[0].ends_with(r#""terms":true}"#), "{}", bodies[0]);
    drop(bodies);

    let SubmitOutcome::Accepted(ticket) = outcome else {
        panic!("expected acceptance, got {outcome:?}");
    };
    assert_eq!(alerts, 0);
    assert_eq!(form.draft, InquiryDraft::default());
    for field in [
        TextField::FirstName,
        TextField::LastName,
        TextField::Email,
        TextField::Phone,
        TextField::Message,
    ] {
        assert_eq!(form.draft.text(field), "");
    }
    assert!(form.banner_visible());

    // A stale ticket leaves the banner alone.
    fill_wedding(&mut form);
    let (outcome, _) = click_submit(&mut form, &client, true).expect("not blocked");
    assert!(matches!(outcome, SubmitOutcome::Accepted(newer) if newer != ticket));
    form.hide_banner(ticket);
    assert!(form.banner_visible());
}

#[tokio::test(start_paused = true)]
async fn success_banner_hides_after_the_configured_delay() {
    let delay = SiteConfig::default().success_banner_ms;
    let client = InquiryClient::with_transport("https://collector.test/f", Collector::replying(200));
    let form = Rc::new(RefCell::new(wedding_form()));

    let payload = form.borrow_mut().begin_submit(true).expect("not blocked");
    let result = client.submit(&payload).await;
    let SubmitOutcome::Accepted(ticket) = form.borrow_mut().finish_submit(result) else {
        panic!("expected acceptance");
    };

    let hide = after_ms(delay, {
        let form = Rc::clone(&form);
        move || form.borrow_mut().hide_banner(ticket)
    });
    tokio::pin!(hide);

    let early = timeout(Duration::from_millis(delay - 1), &mut hide).await;
    assert!(early.is_err());
    assert!(form.borrow().banner_visible());

    hide.await;
    assert!(!form.borrow().banner_visible());
}

#[test]
fn rejected_inquiry_keeps_every_value_and_alerts_once() {
    let client = InquiryClient::with_transport("https://collector.test/f", Collector::replying(422));
    let mut form = wedding_form();
    let before = form.draft.clone();

    let (outcome, alerts) = click_submit(&mut form, &client, true).expect("not blocked");
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(alerts, 1);
    assert_eq!(form.draft, before);
    assert!(!form.banner_visible());
    assert!(!form.is_sending());

    // A second click is a second attempt with its own single alert.
    let (_, alerts) = click_submit(&mut form, &client, true).expect("not blocked");
    assert_eq!(alerts, 1);
    assert_eq!(client.transport().bodies.borrow().len(), 2);
    assert_eq!(form.draft, before);
}

#[test]
fn network_failure_is_handled_like_a_rejection() {
    let client = InquiryClient::with_transport("https://collector.test/f", Collector::unreachable());
    let mut form = wedding_form();
    let before = form.draft.clone();

    let (outcome, alerts) = click_submit(&mut form, &client, true).expect("not blocked");
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(alerts, 1);
    assert_eq!(form.draft, before);
}

#[test]
fn unticked_terms_send_nothing_when_gated() {
    let client = InquiryClient::with_transport("https://collector.test/f", Collector::replying(200));
    let mut form = wedding_form();
    form.apply(DraftEdit::Terms(TermsAcceptance::Unchecked));

    let blocked = click_submit(&mut form, &client, true).unwrap_err();
    assert_eq!(blocked, SubmitBlocked::TermsNotAccepted);
    assert!(client.transport().bodies.borrow().is_empty());
    assert_eq!(form.blocked(), Some(SubmitBlocked::TermsNotAccepted));

    form.apply(DraftEdit::Terms(TermsAcceptance::Checked));
    assert_eq!(form.blocked(), None);
    assert!(click_submit(&mut form, &client, true).is_ok());
}

#[test]
fn ungated_form_sends_terms_as_false() {
    let client = InquiryClient::with_transport("https://collector.test/f", Collector::replying(201));
    let mut form = wedding_form();
    form.apply(DraftEdit::Terms(TermsAcceptance::Unchecked));

    let (outcome, _) = click_submit(&mut form, &client, false).expect("not gated");
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert!(client.transport().bodies.borrow()[0].ends_with(r#""terms":false}"#));
}
