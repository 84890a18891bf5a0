//! Inline verdict region next to the appointment form.

/// Availability verdict display. A transport failure (`Warning`) is kept
/// visually distinct from a genuine negative verdict (`Unavailable`):
/// "the check broke" and "the slot is taken" must never look alike.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AvailabilityNotice {
    /// Region cleared: incomplete form or initial state.
    #[default]
    Empty,
    /// Request in flight.
    Checking,
    /// Positive verdict with the server message.
    Available(String),
    /// Negative verdict with the server message.
    Unavailable(String),
    /// Transport failure while checking.
    Warning(String),
}

impl AvailabilityNotice {
    /// Text as painted, verdict glyph included.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Checking => Some("Vérification...".to_string()),
            Self::Available(message) => Some(format!("✓ {message}")),
            Self::Unavailable(message) => Some(format!("✗ {message}")),
            Self::Warning(message) => Some(message.clone()),
        }
    }

    /// Bootstrap alert class for the current verdict.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Empty | Self::Checking => None,
            Self::Available(_) => Some("alert-success"),
            Self::Unavailable(_) => Some("alert-danger"),
            Self::Warning(_) => Some("alert-warning"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_verdict_renders_glyph_and_message() {
        let notice = AvailabilityNotice::Unavailable("Le médecin a déjà un rendez-vous".into());
        assert_eq!(
            notice.display_text().unwrap(),
            "✗ Le médecin a déjà un rendez-vous"
        );
        assert_eq!(notice.css_class(), Some("alert-danger"));
    }

    #[test]
    fn positive_verdict_renders_check_glyph() {
        let notice = AvailabilityNotice::Available("Plage horaire disponible".into());
        assert_eq!(notice.display_text().unwrap(), "✓ Plage horaire disponible");
        assert_eq!(notice.css_class(), Some("alert-success"));
    }

    #[test]
    fn warning_is_distinct_from_negative() {
        let warning = AvailabilityNotice::Warning("Erreur lors de la vérification".into());
        let negative = AvailabilityNotice::Unavailable("Erreur lors de la vérification".into());
        assert_ne!(warning.css_class(), negative.css_class());
    }

    #[test]
    fn empty_paints_nothing() {
        assert!(AvailabilityNotice::Empty.display_text().is_none());
        assert!(AvailabilityNotice::Empty.css_class().is_none());
    }
}
