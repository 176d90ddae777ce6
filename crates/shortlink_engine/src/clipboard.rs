use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

pub type ClipboardResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Abstraction over the system clipboard so the shell can be tested without
/// touching the real one. Writes are best-effort by contract: callers log a
/// failure and move on.
pub trait ClipboardService {
    fn put(&mut self, content: String) -> ClipboardResult<()>;
}

pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn put(&mut self, content: String) -> ClipboardResult<()> {
        let mut ctx = ClipboardContext::new()?;
        ctx.set_contents(content)?;
        Ok(())
    }
}

pub mod test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl ClipboardService for TestClipboard {
        fn put(&mut self, content: String) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }
    }
}
