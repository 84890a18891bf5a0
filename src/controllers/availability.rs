//! Availability check on the appointment form.

use std::sync::{Arc, Mutex};

use crate::api::types::AvailabilityQuery;
use crate::api::ClinicClient;
use crate::ui::AvailabilityNotice;

/// Controller bound to the doctor / date / time / duration fields and
/// the inline verdict region.
///
/// No debounce here: change events on form fields are rare enough to
/// query the server directly.
pub struct AvailabilityController {
    client: Arc<ClinicClient>,
    notice: Arc<Mutex<AvailabilityNotice>>,
}

impl AvailabilityController {
    pub fn new(client: Arc<ClinicClient>, notice: Arc<Mutex<AvailabilityNotice>>) -> Self {
        Self { client, notice }
    }

    /// Change handler for any of the bound fields. An incomplete form
    /// clears the verdict without querying.
    pub async fn fields_changed(&self, form: &AvailabilityQuery) {
        if !form.is_complete() {
            self.set(AvailabilityNotice::Empty);
            return;
        }

        self.set(AvailabilityNotice::Checking);

        match self.client.check_availability(form).await {
            Ok(verdict) if verdict.disponible => {
                self.set(AvailabilityNotice::Available(verdict.message));
            }
            Ok(verdict) => {
                self.set(AvailabilityNotice::Unavailable(verdict.message));
            }
            Err(e) => {
                tracing::error!(error = %e, "availability check failed");
                self.set(AvailabilityNotice::Warning(
                    "Erreur lors de la vérification".to_string(),
                ));
            }
        }
    }

    fn set(&self, next: AvailabilityNotice) {
        if let Ok(mut notice) = self.notice.lock() {
            *notice = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    use crate::config::ClientConfig;

    fn complete_form() -> AvailabilityQuery {
        AvailabilityQuery {
            medecin: "3".into(),
            date: "2025-03-12".into(),
            heure: "14:30".into(),
            duree: "30".into(),
            rdv_id: Some("17".into()),
        }
    }

    async fn spawn_clinic(
        router: Router,
    ) -> (Arc<ClinicClient>, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        let client = Arc::new(ClinicClient::new(&ClientConfig::new(&format!(
            "http://{addr}"
        ))));
        (client, handle)
    }

    fn verdict_router(disponible: bool, message: &'static str) -> Router {
        Router::new().route(
            "/rendezvous/check-disponibilite/",
            get(move || async move {
                Json(serde_json::json!({
                    "disponible": disponible,
                    "message": message
                }))
            }),
        )
    }

    #[tokio::test]
    async fn incomplete_form_clears_the_verdict_without_querying() {
        let (client, server) = spawn_clinic(verdict_router(true, "ok")).await;
        let notice = Arc::new(Mutex::new(AvailabilityNotice::Available("ok".into())));
        let controller = AvailabilityController::new(client, notice.clone());

        let mut form = complete_form();
        form.duree.clear();
        controller.fields_changed(&form).await;

        assert_eq!(*notice.lock().unwrap(), AvailabilityNotice::Empty);

        server.abort();
    }

    #[tokio::test]
    async fn positive_verdict_renders_success() {
        let (client, server) =
            spawn_clinic(verdict_router(true, "Plage horaire disponible")).await;
        let notice = Arc::new(Mutex::new(AvailabilityNotice::default()));
        let controller = AvailabilityController::new(client, notice.clone());

        controller.fields_changed(&complete_form()).await;

        let notice = notice.lock().unwrap();
        assert_eq!(
            *notice,
            AvailabilityNotice::Available("Plage horaire disponible".into())
        );
        assert_eq!(
            notice.display_text().unwrap(),
            "✓ Plage horaire disponible"
        );

        server.abort();
    }

    #[tokio::test]
    async fn negative_verdict_renders_danger_with_exact_text() {
        let (client, server) =
            spawn_clinic(verdict_router(false, "La date est dans le passé")).await;
        let notice = Arc::new(Mutex::new(AvailabilityNotice::default()));
        let controller = AvailabilityController::new(client, notice.clone());

        controller.fields_changed(&complete_form()).await;

        let notice = notice.lock().unwrap();
        assert_eq!(notice.display_text().unwrap(), "✗ La date est dans le passé");
        assert_eq!(notice.css_class(), Some("alert-danger"));

        server.abort();
    }

    #[tokio::test]
    async fn server_guard_rejection_renders_as_negative_verdict() {
        // A JSON verdict on a 400 is still a verdict, not a warning.
        let router = Router::new().route(
            "/rendezvous/check-disponibilite/",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                        "disponible": false,
                        "message": "Format de date ou heure invalide"
                    })),
                )
            }),
        );
        let (client, server) = spawn_clinic(router).await;
        let notice = Arc::new(Mutex::new(AvailabilityNotice::default()));
        let controller = AvailabilityController::new(client, notice.clone());

        controller.fields_changed(&complete_form()).await;

        assert_eq!(
            notice.lock().unwrap().css_class(),
            Some("alert-danger")
        );

        server.abort();
    }

    #[tokio::test]
    async fn transport_failure_renders_warning_not_negative() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Arc::new(ClinicClient::new(&ClientConfig::new(&format!(
            "http://{addr}"
        ))));
        let notice = Arc::new(Mutex::new(AvailabilityNotice::default()));
        let controller = AvailabilityController::new(client, notice.clone());

        controller.fields_changed(&complete_form()).await;

        let notice = notice.lock().unwrap();
        assert_eq!(notice.css_class(), Some("alert-warning"));
        assert_eq!(
            notice.display_text().unwrap(),
            "Erreur lors de la vérification"
        );
    }
}
