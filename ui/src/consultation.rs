//! Consultation request form.
//!
//! There is no backend: submitting builds a `mailto:` link addressed to the
//! company inbox and hands it to the mail client. The form then shows a
//! success panel for its reset delay (`SiteConfig::form_reset_ms`) and clears
//! itself.
//!
//! ```text
//! Editing --submit--> Submitted{at} --(now - at >= reset delay)--> Editing (fields cleared)
//! ```

use crate::core::config::FORM_RESET_MS;
use crate::core::timing::Clock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultationFields {
    pub name: String,
    pub email: String,
    pub country: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Country,
    Message,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted {
        at_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationForm {
    fields: ConsultationFields,
    phase: FormPhase,
    reset_after_ms: u64,
}

impl Default for ConsultationForm {
    fn default() -> Self {
        Self::with_reset_delay(FORM_RESET_MS)
    }
}

impl ConsultationForm {
    /// Empty form that reverts `reset_after_ms` after submission.
    pub fn with_reset_delay(reset_after_ms: u64) -> Self {
        Self {
            fields: ConsultationFields::default(),
            phase: FormPhase::Editing,
            reset_after_ms,
        }
    }

    pub fn fields(&self) -> &ConsultationFields {
        &self.fields
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted { .. })
    }

    /// Edits are ignored while the success panel is shown.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitted() {
            return;
        }
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Country => &mut self.fields.country,
            Field::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    /// Move to `Submitted` and return the `mailto:` link to open.
    ///
    /// Submitting again while already submitted keeps the first timestamp.
    pub fn submit(&mut self, recipient: &str, clock: &impl Clock) -> String {
        let link = mailto_link(recipient, &self.fields);
        if !self.is_submitted() {
            self.phase = FormPhase::Submitted {
                at_ms: clock.now_ms(),
            };
            tracing::info!(country = %self.fields.country, "consultation request submitted");
        }
        link
    }

    /// Milliseconds until the form reverts, `None` while editing.
    pub fn remaining_ms(&self, clock: &impl Clock) -> Option<u64> {
        match self.phase {
            FormPhase::Editing => None,
            FormPhase::Submitted { at_ms } => {
                let elapsed = clock.now_ms().saturating_sub(at_ms);
                Some(self.reset_after_ms.saturating_sub(elapsed))
            }
        }
    }

    /// Revert to an empty `Editing` form once the delay has passed. Returns
    /// `true` when the form changed.
    pub fn tick(&mut self, clock: &impl Clock) -> bool {
        if self.remaining_ms(clock) == Some(0) {
            *self = Self::with_reset_delay(self.reset_after_ms);
            true
        } else {
            false
        }
    }
}

/// Percent-encode like `encodeURIComponent`: the marks `!'()*` stay literal.
fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// `mailto:` URI with a URL-encoded subject and body.
pub fn mailto_link(recipient: &str, fields: &ConsultationFields) -> String {
    let subject = format!("Consultation Request from {}", fields.name);
    let body = format!(
        "Name: {}\nEmail: {}\nCountry: {}\n\nMessage:\n{}",
        fields.name, fields.email, fields.country, fields.message
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_component(&subject),
        encode_component(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timing::ManualClock;

    fn filled() -> ConsultationForm {
        let mut form = ConsultationForm::default();
        form.set(Field::Name, "Anna Weber");
        form.set(Field::Email, "anna@example.com");
        form.set(Field::Country, "Germany");
        form.set(Field::Message, "Hi & thanks!");
        form
    }

    #[test]
    fn submit_then_revert_after_delay() {
        let clock = ManualClock::starting_at(1_000);
        let mut form = filled();

        form.submit("mail@gripability.com", &clock);
        assert_eq!(form.phase(), FormPhase::Submitted { at_ms: 1_000 });
        assert_eq!(form.fields().name, "Anna Weber");

        clock.advance(2_999);
        assert!(!form.tick(&clock));
        assert!(form.is_submitted());
        assert_eq!(form.remaining_ms(&clock), Some(1));

        clock.advance(1);
        assert!(form.tick(&clock));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.fields(), &ConsultationFields::default());
    }

    #[test]
    fn editing_form_never_ticks() {
        let clock = ManualClock::starting_at(0);
        let mut form = filled();
        clock.advance(10_000);
        assert!(!form.tick(&clock));
        assert_eq!(form.fields().country, "Germany");
        assert_eq!(form.remaining_ms(&clock), None);
    }

    #[test]
    fn edits_while_submitted_are_ignored() {
        let clock = ManualClock::starting_at(0);
        let mut form = filled();
        form.submit("mail@gripability.com", &clock);
        form.set(Field::Name, "Someone Else");
        assert_eq!(form.fields().name, "Anna Weber");
    }

    #[test]
    fn resubmitting_keeps_first_timestamp() {
        let clock = ManualClock::starting_at(0);
        let mut form = filled();
        form.submit("mail@gripability.com", &clock);
        clock.advance(2_000);
        form.submit("mail@gripability.com", &clock);
        clock.advance(1_000);
        assert!(form.tick(&clock));
    }

    #[test]
    fn mailto_is_url_encoded() {
        let link = mailto_link("mail@gripability.com", filled().fields());
        assert!(link.starts_with(
            "mailto:mail@gripability.com?subject=Consultation%20Request%20from%20Anna%20Weber&body="
        ));
        assert!(link.contains("Name%3A%20Anna%20Weber%0AEmail%3A%20anna%40example.com"));
        assert!(link.contains("%0A%0AMessage%3A%0AHi%20%26%20thanks!"));
    }

    #[test]
    fn unreserved_marks_stay_literal() {
        let fields = ConsultationFields {
            name: "O'Neil (Dr.)".into(),
            message: "Wow! 5*3 = 15 ~ 100%".into(),
            ..Default::default()
        };
        let link = mailto_link("mail@gripability.com", &fields);
        assert!(link.contains("subject=Consultation%20Request%20from%20O'Neil%20(Dr.)&"));
        assert!(link.ends_with("Wow!%205*3%20%3D%2015%20~%20100%25"));
    }

    #[test]
    fn configured_delay_controls_revert() {
        let clock = ManualClock::starting_at(0);
        let mut form = ConsultationForm::with_reset_delay(500);
        form.set(Field::Name, "Anna Weber");
        form.submit("mail@gripability.com", &clock);
        assert_eq!(form.remaining_ms(&clock), Some(500));

        clock.advance(500);
        assert!(form.tick(&clock));
        assert_eq!(form, ConsultationForm::with_reset_delay(500));

        // The revert keeps the configured delay for the next submission.
        form.submit("mail@gripability.com", &clock);
        assert_eq!(form.remaining_ms(&clock), Some(500));
    }

    #[test]
    fn empty_form_still_builds_a_link() {
        let link = mailto_link("mail@gripability.com", &ConsultationFields::default());
        assert_eq!(
            link,
            "mailto:mail@gripability.com?subject=Consultation%20Request%20from%20\
             &body=Name%3A%20%0AEmail%3A%20%0ACountry%3A%20%0A%0AMessage%3A%0A"
        );
    }
}
