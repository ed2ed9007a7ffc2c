/// Controls the behavior of the document parser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSettings {
    /// Skip lines that are empty after trimming instead of treating them
    /// as broken assignments
    pub skip_blank_lines: bool,
}

impl ParseSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }
}
