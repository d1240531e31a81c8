use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManifestError>;
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Errors raised while turning raw XML bytes into a `LogMetadata` record.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("XML is not well-formed at position {position}")]
    MalformedXml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("XML is not well-formed at position {position}: {message}")]
    IllFormed { position: u64, message: String },

    #[error("document type declarations are not allowed (position {position})")]
    DoctypeDisallowed { position: u64 },

    #[error("unresolvable entity reference at position {position}")]
    EntityReference {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("document has no root element")]
    MissingRoot,

    #[error("no <log> element found")]
    MissingLogElement,
}

/// Errors raised while assembling parsed logs into a manifest document.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("cannot build manifest without parsed logs")]
    NoEntries,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse WITSML file {input}")]
    Parse {
        input: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("failed to set up worker pool: {message}")]
    ThreadPool { message: String },
}

impl ManifestError {
    pub(crate) fn parse(input: impl Into<String>, source: ParseError) -> Self {
        ManifestError::Parse {
            input: input.into(),
            source,
        }
    }

    /// Label of the input that failed to parse, if this is a parse failure.
    pub fn input(&self) -> Option<&str> {
        match self {
            ManifestError::Parse { input, .. } => Some(input),
            _ => None,
        }
    }
}
