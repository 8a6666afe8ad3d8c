use core::fmt;

/// An error raised when decoding a [`Mapping`][crate::Mapping] from text.
///
/// This is produced by [`from_json_slice`][crate::from_json_slice],
/// [`from_yaml_slice`][crate::from_yaml_slice] and their `str` variants when
/// the input is not a valid document, or when its root is neither a mapping
/// nor null.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Construct a new error.
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Get the line in the input at which the error was raised, if known.
    ///
    /// # Examples
    ///
    /// ```
    /// let error = dig::from_json_str("{\n\"foo\": }").unwrap_err();
    /// assert_eq!(error.line(), Some(2));
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match &self.kind {
            #[cfg(feature = "json")]
            ErrorKind::Json(error) => Some(error.line()).filter(|line| *line > 0),
            #[cfg(feature = "yaml")]
            ErrorKind::Yaml(error) => error.location().map(|location| location.line()),
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            #[cfg(feature = "json")]
            ErrorKind::Json(error) => Some(error),
            #[cfg(feature = "yaml")]
            ErrorKind::Yaml(error) => Some(error),
        }
    }
}

/// The kind of a decode error.
#[derive(Debug)]
pub(crate) enum ErrorKind {
    /// The input could not be decoded as JSON.
    #[cfg(feature = "json")]
    Json(serde_json::Error),
    /// The input could not be decoded as YAML.
    #[cfg(feature = "yaml")]
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "json")]
            ErrorKind::Json(..) => write!(f, "malformed JSON input"),
            #[cfg(feature = "yaml")]
            ErrorKind::Yaml(..) => write!(f, "malformed YAML input"),
        }
    }
}
