use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long a toast stays visible
pub const DEFAULT_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient user-facing notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub raised_at: Instant,
}

/// Application-wide notification queue.
///
/// Created once by `App::init` and closed by `App::shutdown`; once closed,
/// new toasts are only logged.
pub struct Notifier {
    toasts: Mutex<Vec<Toast>>,
    ttl: Duration,
    open: AtomicBool,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
            ttl,
            open: AtomicBool::new(true),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.push(ToastLevel::Error, message);
    }

    fn push(&self, level: ToastLevel, message: String) {
        self.push_at(level, message, Instant::now());
    }

    /// Expired toasts are dropped on every push, so the queue stays bounded
    /// by what was raised within one display window
    fn push_at(&self, level: ToastLevel, message: String, now: Instant) {
        if !self.open.load(Ordering::Acquire) {
            return;
        }
        let mut toasts = self.lock();
        toasts.retain(|t| now.saturating_duration_since(t.raised_at) < self.ttl);
        toasts.push(Toast {
            level,
            message,
            raised_at: now,
        });
    }

    /// Toasts still within their display window, oldest first
    pub fn active(&self) -> Vec<Toast> {
        self.active_at(Instant::now())
    }

    fn active_at(&self, now: Instant) -> Vec<Toast> {
        let mut toasts = self.lock();
        toasts.retain(|t| now.saturating_duration_since(t.raised_at) < self.ttl);
        toasts.clone()
    }

    /// Take every queued toast; ones that expired since the last push may
    /// still be among them
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    /// Stop accepting toasts and hand back whatever is still queued
    pub fn shutdown(&self) -> Vec<Toast> {
        self.open.store(false, Ordering::Release);
        self.drain()
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
