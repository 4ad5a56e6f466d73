#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub subject: String,
    pub message: String,
}

impl Report {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ReportTracker {
    current: Report,
}

impl ReportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Report {
        &self.current
    }

    pub fn update(&mut self, next: Report) -> bool {
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }
}
