/// Controls whether a [`MessageSink`](crate::MessageSink) terminates each
/// reported error with a newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered error.
    #[default]
    WithNewline,
    /// Emit the rendered error without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl From<bool> for LineMode {
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}
