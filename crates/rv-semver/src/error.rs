use miette::{Diagnostic, SourceSpan};

/// Ways a version string can fail to be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum VersionError {
    #[error("Malformed version number string {version:?}: {reason}")]
    #[diagnostic(
        code(semver::malformed),
        help("Versions look like MAJOR.MINOR.PATCH, optionally followed by -PRERELEASE and +BUILD")
    )]
    MalformedVersion {
        /// The rejected input.
        #[source_code]
        version: String,

        /// What was wrong at `span`.
        reason: &'static str,

        /// Where parsing stopped.
        #[label("{reason}")]
        span: SourceSpan,
    },
}

impl VersionError {
    pub(crate) fn malformed(version: &str, offset: usize, reason: &'static str) -> Self {
        // Highlight the offending byte, or an empty span at the end of input.
        let len = usize::from(offset < version.len());
        Self::MalformedVersion {
            version: version.to_owned(),
            reason,
            span: SourceSpan::new(offset.into(), len),
        }
    }

    /// The string that failed to parse.
    pub fn version(&self) -> &str {
        match self {
            Self::MalformedVersion { version, .. } => version,
        }
    }

    /// Byte offset into [`Self::version`] where parsing failed.
    pub fn offset(&self) -> usize {
        match self {
            Self::MalformedVersion { span, .. } => span.offset(),
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::MalformedVersion { reason, .. } => *reason,
        }
    }
}
