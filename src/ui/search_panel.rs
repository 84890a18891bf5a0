//! Results region under the patient search field.

use crate::api::types::PatientHit;

/// What the results region currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    /// Region blank: either never searched or cleared by a short query.
    #[default]
    Idle,
    /// Request dispatched, spinner up.
    Loading,
    /// The server answered with zero hits.
    Empty,
    /// One table row per hit, each with its detail link.
    Results(Vec<PatientHit>),
    /// Transport or parse failure.
    Failed,
}

/// The search results region. `visible` maps to the container's
/// display toggle; every terminal render replaces the loading state
/// entirely, so indicators never stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPanel {
    pub visible: bool,
    pub state: SearchState,
}

impl SearchPanel {
    /// Short or empty query: hide the region and drop its content.
    /// Signals "not a search" rather than "empty result".
    pub fn clear(&mut self) {
        self.visible = false;
        self.state = SearchState::Idle;
    }

    /// Reveal the region with the loading indicator.
    pub fn loading(&mut self) {
        self.visible = true;
        self.state = SearchState::Loading;
    }

    /// Render a server response: empty-state message or the result table.
    pub fn render(&mut self, hits: Vec<PatientHit>) {
        self.visible = true;
        self.state = if hits.is_empty() {
            SearchState::Empty
        } else {
            SearchState::Results(hits)
        };
    }

    /// Render the error state.
    pub fn fail(&mut self) {
        self.visible = true;
        self.state = SearchState::Failed;
    }

    /// Message shown for the non-table states, matching the page copy.
    pub fn message(&self) -> Option<&'static str> {
        match self.state {
            SearchState::Empty => Some("Aucun patient trouvé."),
            SearchState::Failed => Some("Une erreur est survenue lors de la recherche."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit() -> PatientHit {
        PatientHit {
            id: 1,
            nom: "Dupont".into(),
            prenom: "Jean".into(),
            id_patient: "PAT-0042".into(),
            date_naissance: "14/02/1980".into(),
            url: "/patients/1/".into(),
        }
    }

    #[test]
    fn starts_hidden_and_idle() {
        let panel = SearchPanel::default();
        assert!(!panel.visible);
        assert_eq!(panel.state, SearchState::Idle);
    }

    #[test]
    fn empty_response_is_not_an_empty_table() {
        let mut panel = SearchPanel::default();
        panel.loading();
        panel.render(vec![]);
        assert_eq!(panel.state, SearchState::Empty);
        assert_eq!(panel.message(), Some("Aucun patient trouvé."));
    }

    #[test]
    fn results_replace_the_loading_indicator() {
        let mut panel = SearchPanel::default();
        panel.loading();
        panel.render(vec![hit()]);
        match &panel.state {
            SearchState::Results(hits) => assert_eq!(hits.len(), 1),
            other => panic!("Expected Results, got: {other:?}"),
        }
    }

    #[test]
    fn clear_hides_and_empties() {
        let mut panel = SearchPanel::default();
        panel.loading();
        panel.render(vec![hit()]);
        panel.clear();
        assert!(!panel.visible);
        assert_eq!(panel.state, SearchState::Idle);
        assert!(panel.message().is_none());
    }

    #[test]
    fn failure_state_has_its_own_copy() {
        let mut panel = SearchPanel::default();
        panel.loading();
        panel.fail();
        assert!(panel.visible);
        assert_eq!(
            panel.message(),
            Some("Une erreur est survenue lors de la recherche.")
        );
    }
}
