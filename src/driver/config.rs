use std::path::PathBuf;

/// Where commands are read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

/// What to do with a line that does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log a warning and continue with the next line
    #[default]
    Skip,
    /// Stop processing and report the error
    Abort,
}

/// Driver configuration
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Command source
    pub input: InputSource,

    /// Handling of malformed lines
    pub error_policy: ErrorPolicy,

    /// Echo each command to the output before its result
    pub echo: bool,
}

impl DriverConfig {
    /// Read from stdin, skip bad lines, no echo
    pub fn new() -> Self {
        Self::default()
    }

    /// Read commands from a file instead of stdin
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = InputSource::File(path.into());
        self
    }

    /// Set the malformed-line policy
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Abort on the first malformed line
    pub fn strict(self) -> Self {
        self.error_policy(ErrorPolicy::Abort)
    }

    /// Enable or disable command echo
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}
