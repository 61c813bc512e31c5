use checkout_sdk::{NotificationSink, RedirectSink};
use tracing::info;

/// Prints the checkout URL on stdout for the user (or a script) to open.
pub struct ConsoleRedirect;

impl RedirectSink for ConsoleRedirect {
    fn redirect(&self, url: &str) {
        info!(url, "Open this URL to complete checkout");
        println!("{url}");
    }
}

/// Reports checkout failures on stderr.
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("An error occurred while opening checkout: {message}");
    }
}
