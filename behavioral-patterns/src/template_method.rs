//! Template Method.
//!
//! `process` fixes the pipeline skeleton; concrete processors fill in
//! the steps and may override the compression hook. Validation failure
//! stops the pipeline early.

pub trait DataProcessor {
    fn name(&self) -> &str;

    fn read(&mut self, input: &str) -> String;
    fn parse(&mut self) -> String;
    fn validate(&self) -> bool;
    fn transform(&mut self) -> String;
    fn save(&self) -> String;

    /// Hook. Off unless a processor opts in.
    fn should_compress(&self) -> bool {
        false
    }

    /// The template method. The step order is fixed here and nowhere
    /// else.
    fn process(&mut self, input: &str) -> Vec<String> {
        let mut lines = vec![format!("Starting data processing with {}", self.name())];
        lines.push(self.read(input));
        lines.push(format!("[{}] Data reading completed", self.name()));
        lines.push(self.parse());
        lines.push(format!("[{}] Data parsing completed", self.name()));
        if !self.validate() {
            lines.push("Data validation failed. Stopping processing.".to_string());
            return lines;
        }
        lines.push(format!("[{}] Data validation completed", self.name()));
        lines.push(self.transform());
        if self.should_compress() {
            lines.push("Compressing data...".to_string());
        }
        lines.push(self.save());
        lines.push("Processing completed".to_string());
        lines
    }
}

#[derive(Default)]
pub struct CsvProcessor {
    raw: String,
    fields: Vec<String>,
}

impl CsvProcessor {
    pub fn new() -> Self {
        CsvProcessor::default()
    }
}

impl DataProcessor for CsvProcessor {
    fn name(&self) -> &str {
        "CSV Processor"
    }

    fn read(&mut self, input: &str) -> String {
        self.raw = input.to_string();
        format!("Reading CSV data from: {input}")
    }

    fn parse(&mut self) -> String {
        self.fields = self
            .raw
            .split(',')
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        format!("Parsed {} CSV fields", self.fields.len())
    }

    fn validate(&self) -> bool {
        !self.fields.is_empty()
    }

    fn transform(&mut self) -> String {
        for field in &mut self.fields {
            *field = field.to_uppercase();
        }
        "Transformed CSV fields to uppercase".to_string()
    }

    fn save(&self) -> String {
        format!("Saved {} CSV fields", self.fields.len())
    }
}

#[derive(Default)]
pub struct JsonProcessor {
    raw: String,
    valid: bool,
}

impl JsonProcessor {
    pub fn new() -> Self {
        JsonProcessor::default()
    }
}

impl DataProcessor for JsonProcessor {
    fn name(&self) -> &str {
        "JSON Processor"
    }

    fn read(&mut self, input: &str) -> String {
        self.raw = input.to_string();
        format!("Reading JSON data from: {input}")
    }

    fn parse(&mut self) -> String {
        self.valid = serde_json::from_str::<serde_json::Value>(&self.raw).is_ok();
        "Parsed JSON document".to_string()
    }

    fn validate(&self) -> bool {
        self.valid
    }

    fn transform(&mut self) -> String {
        "Normalized JSON keys".to_string()
    }

    fn save(&self) -> String {
        "Saved JSON document".to_string()
    }

    // large documents always go out compressed
    fn should_compress(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_pipeline_runs_every_step_in_order() {
        let mut processor = CsvProcessor::new();
        let lines = processor.process("name, city, country");
        assert_eq!(
            lines,
            vec![
                "Starting data processing with CSV Processor",
                "Reading CSV data from: name, city, country",
                "[CSV Processor] Data reading completed",
                "Parsed 3 CSV fields",
                "[CSV Processor] Data parsing completed",
                "[CSV Processor] Data validation completed",
                "Transformed CSV fields to uppercase",
                "Saved 3 CSV fields",
                "Processing completed",
            ]
        );
    }

    #[test]
    fn validation_failure_stops_the_pipeline() {
        let mut processor = CsvProcessor::new();
        let lines = processor.process("");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Data validation failed. Stopping processing.")
        );
        assert!(!lines.iter().any(|l| l.contains("Saved")));
    }

    #[test]
    fn compression_hook_fires_only_when_overridden() {
        let mut json = JsonProcessor::new();
        let lines = json.process(r#"{"name":"Ada"}"#);
        assert!(lines.iter().any(|l| l == "Compressing data..."));

        let mut csv = CsvProcessor::new();
        let lines = csv.process("a,b");
        assert!(!lines.iter().any(|l| l == "Compressing data..."));
    }

    #[test]
    fn malformed_json_fails_validation() {
        let mut json = JsonProcessor::new();
        let lines = json.process("{not json");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Data validation failed. Stopping processing.")
        );
    }
}
