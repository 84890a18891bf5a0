//! Appointment status transitions.
//!
//! The badge and button state only ever change on a *successful* server
//! response. Nothing is painted optimistically, so a failed request
//! leaves the page exactly as it was.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::types::StatusUpdateResponse;
use crate::api::ClinicClient;
use crate::config;
use crate::ui::{ActionButton, ButtonId, StatusBoard};

/// Controller for the quick-action status buttons of an appointment page.
pub struct StatusController {
    client: Arc<ClinicClient>,
    board: Arc<Mutex<StatusBoard>>,
    /// CSRF token read from the surrounding form at page bind.
    csrf_token: String,
    dismiss_delay: Duration,
    fade_delay: Duration,
}

impl StatusController {
    pub fn new(
        client: Arc<ClinicClient>,
        board: Arc<Mutex<StatusBoard>>,
        csrf_token: &str,
    ) -> Self {
        Self {
            client,
            board,
            csrf_token: csrf_token.to_string(),
            dismiss_delay: config::NOTICE_DISMISS_DELAY,
            fade_delay: config::NOTICE_FADE_DELAY,
        }
    }

    /// Override the notice timings.
    pub fn with_notice_delays(mut self, dismiss: Duration, fade: Duration) -> Self {
        self.dismiss_delay = dismiss;
        self.fade_delay = fade;
        self
    }

    /// Click handler for a registered action button. Disabled buttons
    /// swallow the click, like their DOM counterparts.
    pub async fn clicked(&self, id: ButtonId) {
        let action = {
            let Ok(board) = self.board.lock() else { return };
            match board.button(id) {
                Some(button) if !button.disabled => button.clone(),
                _ => return,
            }
        };

        let result = self
            .client
            .update_status(
                action.rdv_id,
                action.target,
                &self.csrf_token,
                action.return_to,
            )
            .await;

        match result {
            Ok(response) if response.success => self.reconcile(&action, response),
            Ok(response) => {
                if let Ok(mut board) = self.board.lock() {
                    board.alert.raise(format!(
                        "Erreur lors de la mise à jour du statut: {}",
                        response.message
                    ));
                }
            }
            Err(e) => {
                tracing::error!(error = %e, rdv_id = action.rdv_id, "status update failed");
                if let Ok(mut board) = self.board.lock() {
                    board
                        .alert
                        .raise("Une erreur est survenue lors de la mise à jour du statut.");
                }
            }
        }
    }

    /// Apply a server-confirmed transition: repaint the badge with the
    /// clicked button's label, disable the appointment's buttons when the
    /// new status is terminal, and append an auto-dismissing notice.
    fn reconcile(&self, action: &ActionButton, response: StatusUpdateResponse) {
        let new_status = response.statut.unwrap_or(action.target);

        let notice_id = {
            let Ok(mut board) = self.board.lock() else { return };
            board.repaint_badge(action.rdv_id, new_status, &action.label);
            if new_status.is_terminal() {
                board.disable_all_for(action.rdv_id);
            }
            board.push_notice(&response.message)
        };

        let board = Arc::clone(&self.board);
        let (dismiss_delay, fade_delay) = (self.dismiss_delay, self.fade_delay);
        tokio::spawn(async move {
            tokio::time::sleep(dismiss_delay).await;
            if let Ok(mut board) = board.lock() {
                board.begin_fade(notice_id);
            }
            tokio::time::sleep(fade_delay).await;
            if let Ok(mut board) = board.lock() {
                board.remove_notice(notice_id);
            }
        });
    }
}
