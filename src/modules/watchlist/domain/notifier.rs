/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// User-facing notification surface (toasts, sign-in prompts). Implemented
/// by the embedding UI layer.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);

    /// Asks the user to sign in again; shown when a remote call comes back
    /// unauthorized.
    fn prompt_sign_in(&self);
}
