use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NoticeVariant {
    #[default]
    Default,
    /// Something was declined or went wrong.
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NoticeVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Fire-and-forget receiver of notices.
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

impl NoticeSink for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Bounded queue of live notices. Each one expires `ttl` after it was posted.
pub struct Toasts {
    queue: VecDeque<(Notice, Instant)>,
    ttl: Duration,
    max: usize,
}

impl Toasts {
    pub fn new(ttl: Duration, max: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
            max: max.max(1),
        }
    }

    /// Post a notice with an explicit timestamp.
    pub fn push_at(&mut self, notice: Notice, now: Instant) {
        while self.len() >= self.max {
            self.queue.pop_front();
        }
        debug!(title = %notice.title, variant = ?notice.variant, queued = self.len() + 1, "notice");
        self.queue.push_back((notice, now));
    }

    /// Drop notices posted more than `ttl` before `now`.
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.queue
            .retain(|(_, posted)| now.saturating_duration_since(*posted) < ttl);
    }

    /// Live notices, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter().map(|(n, _)| n)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl NoticeSink for Toasts {
    fn notify(&mut self, notice: Notice) {
        self.push_at(notice, Instant::now());
    }
}
