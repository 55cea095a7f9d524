use crossterm::{execute, style::Print};
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Transient messages, oldest first, dropped after a fixed delay.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts.retain(|toast| !toast.is_expired(ttl, now));
    }

    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// OS-level notifications through the terminal (OSC 9 followed by BEL).
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    permission: Permission,
}

impl DesktopNotifier {
    /// Decided once at startup: enabled in config and stdout is a terminal.
    pub fn request_permission(enabled: bool) -> Self {
        let permission = if enabled && io::stdout().is_terminal() {
            Permission::Granted
        } else {
            Permission::Denied
        };
        info!("Desktop notifications: {:?}", permission);
        Self { permission }
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    pub fn notify(&self, title: &str, body: &str) {
        if self.permission == Permission::Denied {
            return;
        }
        debug!("Desktop notification: {}: {}", title, body);
        if let Err(e) = execute!(io::stdout(), Print(osc_notification(title, body))) {
            warn!("Failed to emit desktop notification: {}", e);
        }
    }
}

fn osc_notification(title: &str, body: &str) -> String {
    let clean = |s: &str| s.chars().filter(|c| !c.is_control()).collect::<String>();
    format!("\x1b]9;{}: {}\x07", clean(title), clean(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        queue.push(Toast::info("hello"));
        let created = queue.active().next().unwrap().created_at;

        queue.prune(created + Duration::from_secs(2));
        assert_eq!(queue.len(), 1);

        queue.prune(created + Duration::from_secs(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_keeps_most_recent() {
        let mut queue = ToastQueue::new(Duration::from_secs(3));
        for i in 0..6 {
            queue.push(Toast::success(format!("toast {}", i)));
        }
        let messages: Vec<&str> = queue.active().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["toast 2", "toast 3", "toast 4", "toast 5"]);
    }

    #[test]
    fn denied_notifier_stays_silent() {
        let notifier = DesktopNotifier::request_permission(false);
        assert_eq!(notifier.permission(), Permission::Denied);
        notifier.notify("Price alert", "bitcoin rose");
    }

    #[test]
    fn osc_sequence_strips_control_characters() {
        assert_eq!(
            osc_notification("Price\x07 alert", "btc\nup"),
            "\x1b]9;Price alert: btcup\x07"
        );
    }
}
