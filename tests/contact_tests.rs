// Host-side tests for the simulated contact form.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod contact {
    include!("../src/core/contact.rs");
}

use contact::*;

fn filled() -> ContactFlow {
    let mut flow = ContactFlow::new();
    flow.set_field(ContactField::Name, "Ada");
    flow.set_field(ContactField::Email, "ada@example.com");
    flow.set_field(ContactField::Subject, "Hello");
    flow.set_field(ContactField::Message, "Nice orrery");
    flow
}

#[test]
fn fields_update_while_idle() {
    let flow = filled();
    assert_eq!(flow.form().name, "Ada");
    assert_eq!(flow.form().email, "ada@example.com");
    assert_eq!(flow.form().subject, "Hello");
    assert_eq!(flow.form().message, "Nice orrery");
    assert_eq!(flow.phase(), TransmissionPhase::Idle);
}

#[test]
fn transmission_runs_two_then_three_seconds() {
    let mut flow = filled();
    assert!(flow.submit());
    assert!(matches!(flow.phase(), TransmissionPhase::Transmitting { .. }));

    assert!(!flow.tick(1.9));
    assert!(matches!(flow.phase(), TransmissionPhase::Transmitting { .. }));
    assert!(flow.tick(0.2));
    assert!(matches!(flow.phase(), TransmissionPhase::Complete { .. }));

    assert!(!flow.tick(2.5));
    assert_eq!(flow.form().name, "Ada");
    assert!(flow.tick(0.5));
    assert_eq!(flow.phase(), TransmissionPhase::Idle);
    assert_eq!(flow.form(), &ContactForm::default());
}

#[test]
fn submit_while_busy_is_ignored() {
    let mut flow = filled();
    assert!(flow.submit());
    flow.tick(1.0);
    assert!(!flow.submit());
    // the running timer was not restarted
    assert!(flow.tick(1.0));
    assert!(!flow.submit());
}

#[test]
fn form_is_frozen_mid_transmission() {
    let mut flow = filled();
    flow.submit();
    flow.set_field(ContactField::Name, "Grace");
    assert_eq!(flow.form().name, "Ada");
}

#[test]
fn idle_tick_does_nothing() {
    let mut flow = ContactFlow::new();
    assert!(!flow.tick(10.0));
    assert_eq!(flow.phase(), TransmissionPhase::Idle);
}

#[test]
fn field_ids_are_distinct() {
    let ids: Vec<_> = ContactField::ALL.iter().map(|f| f.element_id()).collect();
    for (i, a) in ids.iter().enumerate() {
        assert!(a.starts_with("contact-"));
        assert!(!ids[i + 1..].contains(a));
    }
}
