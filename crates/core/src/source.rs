//! Caller-owned shader source text tagged with its stage kind.

use crate::error::ShaderError;
use crate::stage::StageKind;

/// A borrowed piece of shader source text tagged with the stage it is
/// written for.
///
/// Immutable once constructed; the text is owned by the caller and borrowed
/// for the duration of a builder call. Construction only checks that the
/// text is non-empty -- all syntactic and semantic validation is deferred
/// to the driver's compiler.
#[derive(Debug, Clone, Copy)]
pub struct ShaderSource<'a> {
    kind: StageKind,
    text: &'a str,
}

impl<'a> ShaderSource<'a> {
    /// Tags `text` as source for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `ShaderError::Compile` if `text` is empty or whitespace-only.
    /// The driver would reject it anyway; catching it here yields a clearer
    /// log than the driver's.
    pub fn new(kind: StageKind, text: &'a str) -> Result<Self, ShaderError> {
        if text.trim().is_empty() {
            return Err(ShaderError::Compile {
                stage: kind,
                log: "source text is empty".to_string(),
                source: text.to_string(),
            });
        }
        Ok(Self { kind, text })
    }

    /// The stage this source is written for.
    pub fn kind(&self) -> StageKind {
        self.kind
    }

    /// The source text.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_nonempty_text() {
        let src = ShaderSource::new(StageKind::Vertex, "void main() {}").unwrap();
        assert_eq!(src.kind(), StageKind::Vertex);
        assert_eq!(src.text(), "void main() {}");
    }

    #[test]
    fn new_rejects_empty_text() {
        let err = ShaderSource::new(StageKind::Fragment, "").unwrap_err();
        match err {
            ShaderError::Compile { stage, log, .. } => {
                assert_eq!(stage, StageKind::Fragment);
                assert!(log.contains("empty"), "expected 'empty' in log: {log}");
            }
            other => panic!("expected Compile error, got: {other:?}"),
        }
    }

    #[test]
    fn new_rejects_whitespace_only_text() {
        let err = ShaderSource::new(StageKind::Compute, " \n\t ").unwrap_err();
        match err {
            ShaderError::Compile { stage, source, .. } => {
                assert_eq!(stage, StageKind::Compute);
                assert_eq!(source, " \n\t ", "error should carry the original text");
            }
            other => panic!("expected Compile error, got: {other:?}"),
        }
    }

    #[test]
    fn source_is_borrowed_not_copied() {
        let text = String::from("#version 300 es\nvoid main() {}");
        let src = ShaderSource::new(StageKind::Vertex, &text).unwrap();
        assert!(std::ptr::eq(src.text(), text.as_str()));
    }
}
