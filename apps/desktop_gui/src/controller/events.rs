//! Backend-to-UI events and error modeling for the viewer.

pub enum UiEvent {
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("malformed")
            || message_lower.contains("rejected")
            || message_lower.contains("length")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("runtime")
            || message_lower.contains("disconnect")
            || message_lower.contains("full")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_worker_runtime_failure_as_transport() {
        let err = UiError::from_message(
            UiErrorContext::BackendStartup,
            "backend worker startup failure: failed to build runtime: out of threads",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::BackendStartup);
    }

    #[test]
    fn classifies_rejected_snapshot_as_validation() {
        let err = UiError::from_message(
            UiErrorContext::CommandQueue,
            "snapshot rejected: cabinLamps has length 3, expected 4",
        );
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(err_label(err.category()), "Validation");
    }

    #[test]
    fn unrecognised_messages_are_unknown() {
        let err = UiError::from_message(UiErrorContext::CommandQueue, "something odd");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.message(), "something odd");
    }
}
