#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current input for shortening.
    SubmitClicked,
    /// Engine settlement for the in-flight submission.
    SubmitCompleted {
        result: Result<crate::ShortenedLink, String>,
    },
    /// User asked for the displayed short URL to be copied.
    CopyClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
