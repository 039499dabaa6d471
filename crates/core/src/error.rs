//! Error types and diagnostic formatting for compilation and linking.

use crate::stage::StageKind;

/// Errors produced while turning shader source into a linked program.
///
/// Both variants are terminal at this layer: shader source is static input,
/// so retrying the same call without modifying it cannot succeed. Callers
/// are expected to log the diagnostic and abort the flow that needed the
/// program.
#[derive(Debug, Clone)]
pub enum ShaderError {
    /// A single stage failed to compile.
    Compile {
        /// The stage that failed.
        stage: StageKind,
        /// The driver's info log describing the failure.
        log: String,
        /// The original source text, kept for reproducibility.
        source: String,
    },
    /// The link step failed after both stages compiled.
    Link {
        /// The linker's info log.
        log: String,
    },
}

impl std::fmt::Display for ShaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderError::Compile { stage, log, .. } => {
                write!(f, "shader compile error ({stage}):\n{log}")
            }
            ShaderError::Link { log } => write!(f, "program link error:\n{log}"),
        }
    }
}

impl std::error::Error for ShaderError {}

impl ShaderError {
    /// Renders a verbose, human-readable diagnostic.
    ///
    /// For compile errors this pairs a numbered listing of the failing
    /// source with the driver log via [`format_diagnostic`]; link errors
    /// have no single source to list, so only the log is rendered.
    pub fn diagnostic(&self) -> String {
        match self {
            ShaderError::Compile { stage, log, source } => {
                format!(
                    "{stage} stage failed to compile:\n{}",
                    format_diagnostic(source, log)
                )
            }
            ShaderError::Link { log } => format!("program failed to link:\n{log}"),
        }
    }
}

/// Pairs a numbered source listing with a driver log.
///
/// Driver logs reference source lines by number (`ERROR: 0:17: ...`), so
/// each line of `source` is prefixed with its right-aligned 1-based line
/// number before the log is appended after a blank line. Either input may
/// be empty; whatever is present is rendered.
pub fn format_diagnostic(source: &str, log: &str) -> String {
    let width = source.lines().count().to_string().len();

    let mut out = String::new();
    for (i, line) in source.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{:>width$}: {line}", i + 1));
    }

    match (out.is_empty(), log.is_empty()) {
        (_, true) => out,
        (true, false) => log.to_string(),
        (false, false) => {
            out.push_str("\n\n");
            out.push_str(log);
            out
        }
    }
}
