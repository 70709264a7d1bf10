// UI-only contact form: submitting plays a timed "transmission" and resets.
// Nothing is sent anywhere.

pub const TRANSMIT_SEC: f32 = 2.0;
pub const SUCCESS_SEC: f32 = 3.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// DOM id of the matching input.
    pub fn element_id(self) -> &'static str {
        match self {
            ContactField::Name => "contact-name",
            ContactField::Email => "contact-email",
            ContactField::Subject => "contact-subject",
            ContactField::Message => "contact-message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransmissionPhase {
    Idle,
    Transmitting { elapsed: f32 },
    Complete { elapsed: f32 },
}

#[derive(Clone, Debug)]
pub struct ContactFlow {
    form: ContactForm,
    phase: TransmissionPhase,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            phase: TransmissionPhase::Idle,
        }
    }
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[inline]
    pub fn phase(&self) -> TransmissionPhase {
        self.phase
    }

    /// Edits are accepted only while idle; the form is frozen mid-transmission.
    pub fn set_field(&mut self, field: ContactField, value: &str) {
        if self.phase != TransmissionPhase::Idle {
            return;
        }
        let slot = match field {
            ContactField::Name => &mut self.form.name,
            ContactField::Email => &mut self.form.email,
            ContactField::Subject => &mut self.form.subject,
            ContactField::Message => &mut self.form.message,
        };
        slot.clear();
        slot.push_str(value);
    }

    /// Returns false when a transmission is already running.
    pub fn submit(&mut self) -> bool {
        if self.phase != TransmissionPhase::Idle {
            return false;
        }
        log::info!("[contact] simulated transmission started");
        self.phase = TransmissionPhase::Transmitting { elapsed: 0.0 };
        true
    }

    /// Advance timers; returns true when the phase changed.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        let dt = dt_sec.max(0.0);
        match self.phase {
            TransmissionPhase::Idle => false,
            TransmissionPhase::Transmitting { elapsed } => {
                let t = elapsed + dt;
                if t >= TRANSMIT_SEC {
                    self.phase = TransmissionPhase::Complete {
                        elapsed: t - TRANSMIT_SEC,
                    };
                    true
                } else {
                    self.phase = TransmissionPhase::Transmitting { elapsed: t };
                    false
                }
            }
            TransmissionPhase::Complete { elapsed } => {
                let t = elapsed + dt;
                if t >= SUCCESS_SEC {
                    self.form = ContactForm::default();
                    self.phase = TransmissionPhase::Idle;
                    true
                } else {
                    self.phase = TransmissionPhase::Complete { elapsed: t };
                    false
                }
            }
        }
    }
}
