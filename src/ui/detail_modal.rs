//! Appointment detail modal.

use crate::api::types::AppointmentDetail;

/// View state of the appointment detail modal. Hidden until a detail
/// fetch succeeds; a failed fetch never reveals a half-filled modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailModal {
    pub visible: bool,
    pub patient_nom: String,
    pub date_heure: String,
    pub medecin_nom: String,
    pub motif: String,
    pub statut: String,
    pub notes: String,
    /// Target of the modal's edit action.
    pub edit_url: String,
}

impl DetailModal {
    /// Fill every field from the server payload and reveal the modal.
    pub fn fill(&mut self, rdv_id: i64, detail: &AppointmentDetail) {
        self.patient_nom = detail.patient_nom.clone();
        self.date_heure = detail.date_heure.clone();
        self.medecin_nom = detail.medecin_nom.clone();
        self.motif = detail.motif.clone();
        self.statut = detail.statut.clone();
        self.notes = detail
            .notes
            .clone()
            .unwrap_or_else(|| "Aucune note".to_string());
        self.edit_url = format!("/rendezvous/{rdv_id}/modifier/");
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}
