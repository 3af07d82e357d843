/// Errors that can occur while reading a track recording
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// Error parsing XML
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 encoding error in text content
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The file extension does not name a supported track format
    #[error("unsupported track format: {0} (expected .tcx or .gpx)")]
    UnsupportedExtension(String),

    /// A track point has no timestamp; bucketing is undefined without one
    #[error("track point {index} has no timestamp")]
    MissingTimestamp {
        /// 0-based position of the point in document order
        index: usize,
    },

    /// A track point timestamp could not be parsed as RFC 3339
    #[error("track point {index} has an invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        /// 0-based position of the point in document order
        index: usize,
        /// The offending text content
        value: String,
        /// Underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// A numeric field contained non-numeric text
    #[error("invalid {element} value {value:?} on track point {index}")]
    InvalidValue {
        /// Element (or attribute) the value came from
        element: &'static str,
        /// The offending text content
        value: String,
        /// 0-based position of the point in document order
        index: usize,
    },

    /// The document ended in the middle of a track point
    #[error("invalid track structure: {0}")]
    InvalidStructure(String),
}
