use std::io::Write;
use std::sync::Mutex;

/// Output message captured by MockOutput for testing
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum OutputMessage {
    Success(String),
    Error(String),
    Warning(String),
    Info(String),
    KeyValue(String, String),
    Report(String),
}

/// Trait for terminal output operations to enable testing with mocks
pub trait Output: Send + Sync {
    /// Print a success message
    fn success(&self, message: &str);

    /// Print an error message
    fn error(&self, message: &str);

    /// Print a warning message
    fn warning(&self, message: &str);

    /// Print an info message
    fn info(&self, message: &str);

    /// Print a key-value pair
    fn key_value(&self, key: &str, value: &str);

    /// Emit the rendered report on stdout
    fn report(&self, markdown: &str) -> anyhow::Result<()>;
}

/// Real terminal output implementation using the output module
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn success(&self, message: &str) {
        crate::output::success(message);
    }

    fn error(&self, message: &str) {
        crate::output::error(message);
    }

    fn warning(&self, message: &str) {
        crate::output::warning(message);
    }

    fn info(&self, message: &str) {
        crate::output::info(message);
    }

    fn key_value(&self, key: &str, value: &str) {
        crate::output::key_value(key, value);
    }

    fn report(&self, markdown: &str) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(markdown.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Mock output implementation for testing (captures output)
#[allow(dead_code)]
pub struct MockOutput {
    messages: Mutex<Vec<OutputMessage>>,
}

#[allow(dead_code)]
impl MockOutput {
    /// Create new mock output
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Get all captured messages
    pub fn get_messages(&self) -> Vec<OutputMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Check if a specific message was output
    pub fn contains_message(&self, message: &OutputMessage) -> bool {
        self.messages.lock().unwrap().contains(message)
    }

    /// Check if any warning message was output
    pub fn has_warning(&self) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|m| matches!(m, OutputMessage::Warning(_)))
    }

    /// Get every report emitted, in order
    pub fn get_reports(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| {
                if let OutputMessage::Report(markdown) = m {
                    Some(markdown.clone())
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Default for MockOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for MockOutput {
    fn success(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Error(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Warning(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Info(message.to_string()));
    }

    fn key_value(&self, key: &str, value: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::KeyValue(key.to_string(), value.to_string()));
    }

    fn report(&self, markdown: &str) -> anyhow::Result<()> {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Report(markdown.to_string()));
        Ok(())
    }
}
