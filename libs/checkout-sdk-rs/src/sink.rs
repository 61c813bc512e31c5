/// Receives the checkout URL the user should be sent to.
pub trait RedirectSink: Send + Sync {
    fn redirect(&self, url: &str);
}

/// Receives a human-readable message when a checkout attempt fails.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}
