use shortlink_core::{AppViewModel, SubmissionStatus};

/// Prints the current view. Called once per dirty state transition.
pub fn render(view: &AppViewModel) {
    match view.status {
        SubmissionStatus::Idle => {}
        SubmissionStatus::Loading => println!("Shortening..."),
        SubmissionStatus::Success => {
            println!("Success!");
            if let Some(url) = &view.short_url {
                println!("  {url}");
            }
            if let Some(code) = &view.short_code {
                println!("  code: {code}");
            }
            println!("  (type `copy` to copy the short URL)");
        }
        SubmissionStatus::Failure => {
            if let Some(error) = &view.error {
                println!("Error: {error}");
            }
        }
    }
}

pub fn print_banner() {
    println!("URL Shortener");
    println!("Paste a URL and press Enter. `copy` copies the last short URL, `quit` exits.");
}
