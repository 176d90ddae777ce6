use crate::view_model::AppViewModel;

/// Phase of the current submission cycle. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// Internal render model for a successfully shortened URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub full_url: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    status: SubmissionStatus,
    result: Option<ShortenedLink>,
    error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status: self.status,
            input: self.input.clone(),
            short_url: self.result.as_ref().map(|link| link.full_url.clone()),
            short_code: self.result.as_ref().and_then(|link| link.code.clone()),
            error: self.error.clone(),
            submit_enabled: self.status != SubmissionStatus::Loading,
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag. The shell uses this to coalesce
    /// rendering to one pass per batch of messages.
    pub fn consume_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn result(&self) -> Option<&ShortenedLink> {
        self.result.as_ref()
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    /// Enters Loading. The prior result and error are cleared before the new
    /// attempt begins, never after.
    pub(crate) fn begin_submission(&mut self) {
        self.result = None;
        self.error = None;
        self.status = SubmissionStatus::Loading;
        self.dirty = true;
    }

    pub(crate) fn apply_success(&mut self, link: ShortenedLink) {
        self.result = Some(link);
        self.error = None;
        self.status = SubmissionStatus::Success;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.result = None;
        self.error = Some(message);
        self.status = SubmissionStatus::Failure;
        self.dirty = true;
    }
}
