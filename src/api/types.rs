//! Wire types for the clinic server's JSON endpoints.
//!
//! Field names mirror the server's French payloads exactly. Every value
//! here is ephemeral: received per request, rendered, and discarded.
//! The server stays the sole source of truth.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// One row of a live patient search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientHit {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    /// Clinic-assigned patient number, distinct from the database id.
    pub id_patient: String,
    /// Preformatted `dd/mm/YYYY` by the server.
    pub date_naissance: String,
    /// Absolute path of the patient detail page.
    pub url: String,
}

/// Verdict of an availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityVerdict {
    pub disponible: bool,
    pub message: String,
}

/// Result of a status transition POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub message: String,
    /// Optional: the current server omits it, in which case the clicked
    /// button's target status is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statut: Option<AppointmentStatus>,
}

/// Appointment detail payload backing the detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDetail {
    pub patient_nom: String,
    pub date_heure: String,
    pub medecin_nom: String,
    pub motif: String,
    pub statut: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Form values feeding an availability check. All four required fields
/// are the raw strings of the bound inputs; the server parses them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityQuery {
    pub medecin: String,
    pub date: String,
    pub heure: String,
    pub duree: String,
    /// Appointment being edited, excluded from the server's conflict scan.
    pub rdv_id: Option<String>,
}

impl AvailabilityQuery {
    /// All four required fields carry a value.
    pub fn is_complete(&self) -> bool {
        !self.medecin.is_empty()
            && !self.date.is_empty()
            && !self.heure.is_empty()
            && !self.duree.is_empty()
    }
}

/// Destination hint carried on a status update so the server's JSON
/// response can still be destination-aware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnTo {
    #[default]
    List,
    Calendar,
    Day,
}

impl ReturnTo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Calendar => "calendar",
            Self::Day => "day",
        }
    }
}

/// Appointment lifecycle status.
///
/// `Termine` and `Annule` are terminal: once reached, no further
/// transition is offered for that appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Planifie,
    Confirme,
    Termine,
    Annule,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        Self::Planifie,
        Self::Confirme,
        Self::Termine,
        Self::Annule,
    ];

    /// Wire value, as posted to and received from the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planifie => "PLANIFIE",
            Self::Confirme => "CONFIRME",
            Self::Termine => "TERMINE",
            Self::Annule => "ANNULE",
        }
    }

    /// Human-readable label, matching the server's display strings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planifie => "Planifié",
            Self::Confirme => "Confirmé",
            Self::Termine => "Terminé",
            Self::Annule => "Annulé",
        }
    }

    /// Bootstrap badge color class for this status.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Planifie => "bg-info",
            Self::Confirme => "bg-primary",
            Self::Termine => "bg-success",
            Self::Annule => "bg-danger",
        }
    }

    /// Terminal statuses admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Termine | Self::Annule)
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLANIFIE" => Ok(Self::Planifie),
            "CONFIRME" => Ok(Self::Confirme),
            "TERMINE" => Ok(Self::Termine),
            "ANNULE" => Ok(Self::Annule),
            other => Err(ClientError::UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
