/// Fire-and-forget sink for failures that must not propagate to the caller.
///
/// Implementations must not block and must not panic; the reporting call is
/// the end of the line for the error it receives.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, context: &str, error: &anyhow::Error);
}

/// Reporter that forwards to the tracing subscriber.
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, context: &str, error: &anyhow::Error) {
        tracing::error!(context, error = %error, "suppressed failure");
    }
}

/// Resolves a localized template for a (namespace, key) pair.
///
/// Templates carry a single `:model` substitution parameter. Returning
/// `None` signals the key is unknown; callers fall back to the raw key.
pub trait TemplateResolver: Send + Sync {
    fn resolve(&self, namespace: &str, key: &str) -> Option<String>;
}

/// Built-in English templates for activity descriptions.
pub struct EnglishTemplates;

impl EnglishTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnglishTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateResolver for EnglishTemplates {
    fn resolve(&self, namespace: &str, key: &str) -> Option<String> {
        if namespace != "activity" {
            return None;
        }
        let template = match key {
            "created" => ":model created",
            "updated" => ":model updated",
            "deleted" => ":model deleted",
            "soft_deleted" => ":model moved to trash",
            "hard_deleted" => ":model permanently deleted",
            "restored" => ":model restored",
            _ => return None,
        };
        Some(template.to_string())
    }
}
