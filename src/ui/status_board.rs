//! Status badges, action buttons and notices of an appointment page.

use std::collections::HashMap;

use crate::api::types::{AppointmentStatus, ReturnTo};
use crate::ui::alert::AlertSlot;

/// Handle the page assigns to a registered action button.
pub type ButtonId = usize;

/// The colored status pill next to one appointment row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    /// Bootstrap color class currently applied.
    pub css_class: &'static str,
    /// Visible badge text.
    pub label: String,
}

/// One quick-action button, as declared by the page markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    pub rdv_id: i64,
    pub target: AppointmentStatus,
    /// The button's own visible label; copied onto the badge on success.
    pub label: String,
    pub return_to: ReturnTo,
    pub disabled: bool,
}

/// Lifecycle of a success notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Shown,
    Fading,
}

/// A dismissible success notice in the messages container.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub phase: NoticePhase,
}

/// Everything the status controller owns on an appointment page:
/// badges keyed by appointment id, the registered action buttons, the
/// notice stack, and the blocking-alert slot.
#[derive(Debug, Default)]
pub struct StatusBoard {
    badges: HashMap<i64, StatusBadge>,
    buttons: Vec<ActionButton>,
    notices: Vec<Notice>,
    pub alert: AlertSlot,
    next_notice_id: u64,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Page wiring ─────────────────────────────────────────

    /// Declare the badge of one appointment with its current status.
    pub fn register_badge(&mut self, rdv_id: i64, status: AppointmentStatus) {
        self.badges.insert(
            rdv_id,
            StatusBadge {
                css_class: status.badge_class(),
                label: status.label().to_string(),
            },
        );
    }

    /// Declare one action button; returns its click handle.
    pub fn register_button(&mut self, button: ActionButton) -> ButtonId {
        self.buttons.push(button);
        self.buttons.len() - 1
    }

    pub fn button(&self, id: ButtonId) -> Option<&ActionButton> {
        self.buttons.get(id)
    }

    pub fn badge(&self, rdv_id: i64) -> Option<&StatusBadge> {
        self.badges.get(&rdv_id)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    // ── Reconciliation (only after a successful server response) ──

    /// Repaint the badge: swap the color class, set the text.
    pub fn repaint_badge(&mut self, rdv_id: i64, status: AppointmentStatus, label: &str) {
        if let Some(badge) = self.badges.get_mut(&rdv_id) {
            badge.css_class = status.badge_class();
            badge.label = label.to_string();
        }
    }

    /// Disable every button bound to the given appointment.
    pub fn disable_all_for(&mut self, rdv_id: i64) {
        for button in self.buttons.iter_mut().filter(|b| b.rdv_id == rdv_id) {
            button.disabled = true;
        }
    }

    /// Append a success notice in its fully-visible phase.
    pub fn push_notice(&mut self, message: &str) -> u64 {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice {
            id,
            message: message.to_string(),
            phase: NoticePhase::Shown,
        });
        id
    }

    /// Start the fade-out of a notice. Unknown ids are ignored.
    pub fn begin_fade(&mut self, id: u64) {
        if let Some(notice) = self.notices.iter_mut().find(|n| n.id == id) {
            notice.phase = NoticePhase::Fading;
        }
    }

    /// Remove a faded notice. Unknown ids are ignored.
    pub fn remove_notice(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}
