//! Transient success and error messages layered over the pages

use tasklist_shared::const_config::client::NOTIFICATION_TTL;
use tasklist_time::Timestamp;
use tracing::debug;

use crate::ui_helpers::success_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug)]
struct Notification {
    message: String,
    kind: NotificationKind,
    expires_at: Timestamp,
}

/// Queue of messages that expire on their own, drawn as an overlay in the
/// bottom right corner
#[derive(Debug, Default)]
pub struct Notifications {
    queue: Vec<Notification>,
}

impl Notifications {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Success, Timestamp::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Error, Timestamp::now());
    }

    fn push(&mut self, message: String, kind: NotificationKind, now: Timestamp) {
        debug!(?kind, "notification queued: {message}");
        self.queue.push(Notification {
            message,
            kind,
            expires_at: now + NOTIFICATION_TTL,
        });
    }

    /// Drops entries whose time is up, keeps the rest in arrival order
    fn drop_expired(&mut self, now: Timestamp) {
        self.queue.retain(|notification| now < notification.expires_at);
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.drop_expired(Timestamp::now());
        if self.queue.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("notification overlay"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-8.0, -40.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let mut dismissed = None;
                for (i, notification) in self.queue.iter().enumerate() {
                    let color = match notification.kind {
                        NotificationKind::Success => success_color(ui.visuals()),
                        NotificationKind::Error => ui.visuals().error_fg_color,
                    };
                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.0, color))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                if ui.button("x").clicked() {
                                    dismissed = Some(i);
                                }
                                ui.colored_label(color, &notification.message);
                            });
                        });
                }
                if let Some(i) = dismissed {
                    self.queue.remove(i);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Timestamp {
        Timestamp::from(ms)
    }

    #[test]
    fn expired_entries_are_dropped_in_arrival_order() {
        // Arrange
        let mut notifications = Notifications::default();
        notifications.push("first".into(), NotificationKind::Success, at(0));
        notifications.push("second".into(), NotificationKind::Error, at(2_000));

        // Act - the first has expired, the second still has time left
        notifications.drop_expired(at(1_000) + NOTIFICATION_TTL);

        // Assert
        assert_eq!(notifications.queue.len(), 1);
        assert_eq!(notifications.queue[0].message, "second");
    }

    #[test]
    fn an_entry_lives_exactly_its_ttl() {
        // Arrange
        let mut notifications = Notifications::default();
        notifications.push("saved".into(), NotificationKind::Success, at(1_000));

        // Act / Assert
        notifications.drop_expired(at(999) + NOTIFICATION_TTL);
        assert_eq!(notifications.queue.len(), 1, "still within the ttl");
        notifications.drop_expired(at(1_000) + NOTIFICATION_TTL);
        assert!(notifications.queue.is_empty(), "ttl elapsed");
    }
}
