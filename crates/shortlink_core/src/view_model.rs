use crate::SubmissionStatus;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: SubmissionStatus,
    pub input: String,
    pub short_url: Option<String>,
    pub short_code: Option<String>,
    pub error: Option<String>,
    pub submit_enabled: bool,
    pub dirty: bool,
}
