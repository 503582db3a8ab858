use crate::config::NotifyConfig;
use crate::ui;
use std::collections::HashMap;
use std::process::Command;

/// Events reported to the notification channel over one promotion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionEvent {
    Started,
    Skipped,
    Succeeded,
    Failed,
}

impl PromotionEvent {
    /// Get the event name as a string
    pub fn name(&self) -> &'static str {
        match self {
            PromotionEvent::Started => "started",
            PromotionEvent::Skipped => "skipped",
            PromotionEvent::Succeeded => "succeeded",
            PromotionEvent::Failed => "failed",
        }
    }
}

/// Context information passed to the notification hook
#[derive(Debug, Clone)]
pub struct NotifyContext {
    /// Event being reported
    pub event: PromotionEvent,
    /// Human-readable identifier of the run (the source branch)
    pub run: String,
    /// Skip reason, tag name, or failed step, depending on the event
    pub detail: Option<String>,
}

impl NotifyContext {
    pub fn new(event: PromotionEvent, run: impl Into<String>, detail: Option<String>) -> Self {
        NotifyContext {
            event,
            run: run.into(),
            detail,
        }
    }

    /// Convert context to environment variables for the hook script
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();

        env.insert("GIT_PROMOTE_EVENT".to_string(), self.event.name().to_string());
        env.insert("GIT_PROMOTE_RUN".to_string(), self.run.clone());

        if let Some(ref detail) = self.detail {
            env.insert("GIT_PROMOTE_DETAIL".to_string(), detail.clone());
        }

        env
    }

    /// One-line message for console output
    fn message(&self) -> String {
        match &self.detail {
            Some(detail) => format!("Promotion of '{}' {}: {}", self.run, self.event.name(), detail),
            None => format!("Promotion of '{}' {}", self.run, self.event.name()),
        }
    }
}

/// Reports promotion events to the console and the configured hook script.
///
/// Fire-and-forget: a hook failure is printed as a warning and never
/// escalates into a pipeline failure, so notification problems can't mask
/// the promotion outcome.
pub struct Notifier {
    script: Option<String>,
}

impl Notifier {
    pub fn new(script: Option<String>) -> Self {
        Notifier { script }
    }

    pub fn from_config(config: &NotifyConfig) -> Self {
        Notifier::new(config.script.clone())
    }

    /// Report one event. Never fails.
    pub fn notify(&self, context: &NotifyContext) {
        match context.event {
            PromotionEvent::Started => ui::display_status(&context.message()),
            PromotionEvent::Skipped => ui::display_skip(&context.message()),
            PromotionEvent::Succeeded => ui::display_success(&context.message()),
            PromotionEvent::Failed => ui::display_error(&context.message()),
        }

        let Some(script) = &self.script else {
            return;
        };

        let mut cmd = Command::new(script);
        for (key, value) in context.to_env_vars() {
            cmd.env(key, value);
        }

        match cmd.output() {
            Ok(output) if output.status.success() => {}
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                ui::display_warning(&format!(
                    "Notification hook {} exited with code {}: {}",
                    script,
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ));
            }
            Err(e) => {
                ui::display_warning(&format!("Failed to run notification hook {}: {}", script, e));
            }
        }
    }
}
