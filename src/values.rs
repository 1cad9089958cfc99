use value_format::{format_float, format_sequence};

/// The four values the target declares and prints.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleValues {
    pub text: String,
    pub integer: i64,
    pub float: f64,
    pub sequence: Vec<i64>,
}

impl Default for SampleValues {
    fn default() -> Self {
        Self {
            text: "Some string variable".to_string(),
            integer: 123,
            float: 3.0,
            sequence: vec![1, 2, 3],
        }
    }
}

impl SampleValues {
    /// Canonical renderings in print order: text, integer, float, sequence.
    pub fn lines(&self) -> [String; 4] {
        [
            self.text.clone(),
            self.integer.to_string(),
            format_float(self.float),
            format_sequence(&self.sequence),
        ]
    }
}
