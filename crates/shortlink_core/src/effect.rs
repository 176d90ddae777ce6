#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the one outbound shorten request for this submission cycle.
    SendRequest {
        url: String,
        expires_at: Option<String>,
    },
    /// Write the displayed short URL to the system clipboard.
    CopyToClipboard { url: String },
}
