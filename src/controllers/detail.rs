//! Appointment detail modal population.

use std::sync::{Arc, Mutex};

use crate::api::ClinicClient;
use crate::ui::{AlertSlot, DetailModal};

/// Controller for the appointment detail modal.
pub struct DetailController {
    client: Arc<ClinicClient>,
    modal: Arc<Mutex<DetailModal>>,
    alert: Arc<Mutex<AlertSlot>>,
}

impl DetailController {
    pub fn new(
        client: Arc<ClinicClient>,
        modal: Arc<Mutex<DetailModal>>,
        alert: Arc<Mutex<AlertSlot>>,
    ) -> Self {
        Self {
            client,
            modal,
            alert,
        }
    }

    /// Fetch one appointment and reveal the filled modal. On failure the
    /// modal stays as it was and a blocking alert is raised instead.
    pub async fn show(&self, rdv_id: i64) {
        match self.client.appointment_detail(rdv_id).await {
            Ok(detail) => {
                if let Ok(mut modal) = self.modal.lock() {
                    modal.fill(rdv_id, &detail);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, rdv_id, "appointment detail fetch failed");
                if let Ok(mut alert) = self.alert.lock() {
                    alert.raise("Impossible de charger les détails du rendez-vous.");
                }
            }
        }
    }

    pub fn close(&self) {
        if let Ok(mut modal) = self.modal.lock() {
            modal.close();
        }
    }
}
