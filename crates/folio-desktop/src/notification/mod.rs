//! Transient notifications shown in the top-right stack

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Severity of a notification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Unique notification identifier
pub type NotificationId = u64;

/// A queued notification
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Creation time in milliseconds
    pub timestamp: f64,
    /// Lifetime in milliseconds; `None` stays until dismissed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Notification {
    /// Whether the notification's lifetime has passed at `now_ms`
    pub fn is_expired(&self, now_ms: f64) -> bool {
        match self.duration {
            Some(duration) => now_ms >= self.timestamp + duration,
            None => false,
        }
    }
}

/// Caller-supplied fields of a new notification
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub duration: Option<f64>,
}

/// Insertion-ordered notification queue
#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: NotificationId,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification stamped with `now_ms`
    pub fn add(&mut self, new: NewNotification, now_ms: f64) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        debug!(id, kind = ?new.kind, "notification added");
        self.items.push(Notification {
            id,
            title: new.title,
            message: new.message,
            kind: new.kind,
            timestamp: now_ms,
            duration: new.duration,
        });
        id
    }

    /// Remove one notification; returns whether it existed
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop every notification whose duration has elapsed
    ///
    /// Returns the ids removed.
    pub fn expire(&mut self, now_ms: f64) -> Vec<NotificationId> {
        let expired: Vec<NotificationId> = self
            .items
            .iter()
            .filter(|n| n.is_expired(now_ms))
            .map(|n| n.id)
            .collect();
        if !expired.is_empty() {
            self.items.retain(|n| !n.is_expired(now_ms));
        }
        expired
    }

    /// Notifications in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, duration: Option<f64>) -> NewNotification {
        NewNotification {
            title: title.to_string(),
            message: String::new(),
            kind: NotificationKind::Info,
            duration,
        }
    }

    #[test]
    fn test_insertion_order() {
        let mut queue = NotificationQueue::new();
        queue.add(note("a", None), 0.0);
        queue.add(note("b", None), 1.0);
        queue.add(note("c", None), 2.0);
        let titles: Vec<&str> = queue.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_expire_respects_duration() {
        let mut queue = NotificationQueue::new();
        let timed = queue.add(note("timed", Some(5000.0)), 1000.0);
        queue.add(note("sticky", None), 1000.0);

        assert!(queue.expire(5999.0).is_empty());
        assert_eq!(queue.expire(6000.0), vec![timed]);
        assert_eq!(queue.len(), 1);
        assert!(queue.expire(1.0e12).is_empty());
        assert_eq!(queue.iter().next().unwrap().title, "sticky");
    }

    #[test]
    fn test_dismiss_and_clear() {
        let mut queue = NotificationQueue::new();
        let a = queue.add(note("a", None), 0.0);
        queue.add(note("b", None), 0.0);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.len(), 1);
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_serializes_type_tag() {
        let mut queue = NotificationQueue::new();
        queue.add(
            NewNotification {
                kind: NotificationKind::Warning,
                ..note("w", None)
            },
            0.0,
        );
        let json = serde_json::to_value(queue.iter().next().unwrap()).unwrap();
        assert_eq!(json["type"], "warning");
        assert!(json.get("duration").is_none());
    }
}
