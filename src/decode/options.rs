/// Policy knobs for one decode call.
///
/// The defaults enforce strict one-to-one coverage: every bound field finds
/// its column, every result column is claimed, and names match exactly.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub allow_unbound_fields: bool,
    pub case_insensitive_columns: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        DecodeOptions::default()
    }

    /// Tolerates fields whose declared column is absent from the result
    /// set. Such fields keep their freshly allocated value; absent columns
    /// stop being an error, but unclaimed result columns remain one.
    pub fn allow_unbound_fields(mut self) -> Self {
        self.allow_unbound_fields = true;
        self
    }

    /// Matches declared columns to result columns ignoring ASCII case.
    pub fn case_insensitive_columns(mut self) -> Self {
        self.case_insensitive_columns = true;
        self
    }
}
