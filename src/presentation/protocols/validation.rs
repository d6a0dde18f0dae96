pub trait Validation: Send + Sync {
    /// Returns the message of the first failing rule for `field`.
    fn validate(&self, field: &str, value: &str) -> Option<String>;
}
