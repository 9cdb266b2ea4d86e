use std::time::Duration;

pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStatus {
    Success,
    Warning,
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: Option<String>,
    pub status: NoticeStatus,
    pub duration: Duration,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            status: NoticeStatus::Success,
            duration: DEFAULT_NOTICE_DURATION,
        }
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            status: NoticeStatus::Warning,
            duration: DEFAULT_NOTICE_DURATION,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}
