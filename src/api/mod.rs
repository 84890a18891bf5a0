//! Clinic server API: wire types and the HTTP client.

pub mod client;
pub mod types;

pub use client::ClinicClient;
pub use types::{
    AppointmentDetail, AppointmentStatus, AvailabilityQuery, AvailabilityVerdict, PatientHit,
    ReturnTo, StatusUpdateResponse,
};
