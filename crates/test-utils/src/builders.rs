#![allow(dead_code)]

use std::fmt::Write;

/// Builder for HCL configuration documents to simplify test setup.
///
/// Produces document text, so tests exercise the decoder as well.
#[derive(Debug, Clone, Default)]
pub struct ConfigDocBuilder {
    attributes: Vec<(String, String)>,
    services: Vec<ServiceBlockBuilder>,
    handlers: Vec<String>,
}

impl ConfigDocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level string attribute.
    pub fn with_str(mut self, key: &str, value: &str) -> Self {
        self.attributes.push((key.to_string(), quote(value)));
        self
    }

    /// Add a top-level attribute with a raw HCL expression.
    pub fn with_raw(mut self, key: &str, expr: &str) -> Self {
        self.attributes.push((key.to_string(), expr.to_string()));
        self
    }

    pub fn with_change_threshold(self, threshold: u32) -> Self {
        self.with_raw("change_threshold", &threshold.to_string())
    }

    pub fn with_service(mut self, service: ServiceBlockBuilder) -> Self {
        self.services.push(service);
        self
    }

    /// `stdout { log_level = "<level>" }`, or an empty block for `None`.
    pub fn with_stdout(mut self, level: Option<&str>) -> Self {
        let body = level
            .map(|l| format!("log_level = {}", quote(l)))
            .unwrap_or_default();
        self.handlers.push(format!("stdout {{ {body} }}"));
        self
    }

    pub fn with_email(mut self, recipients: &[&str]) -> Self {
        self.handlers
            .push(format!("email {{ recipients = {} }}", list(recipients)));
        self
    }

    pub fn with_pagerduty(mut self, service_key: &str) -> Self {
        self.handlers
            .push(format!("pagerduty {{ service_key = {} }}", quote(service_key)));
        self
    }

    pub fn build(self) -> String {
        let mut doc = String::new();
        for (key, expr) in self.attributes.iter() {
            let _ = writeln!(doc, "{key} = {expr}");
        }
        for service in self.services.iter() {
            doc.push_str(&service.render());
        }
        if !self.handlers.is_empty() {
            doc.push_str("handlers {\n");
            for handler in self.handlers.iter() {
                let _ = writeln!(doc, "  {handler}");
            }
            doc.push_str("}\n");
        }
        doc
    }
}

/// Builder for a `service "<name>" { ... }` block.
#[derive(Debug, Clone)]
pub struct ServiceBlockBuilder {
    name: String,
    change_threshold: Option<u32>,
    distinct_tags: Option<bool>,
    ignored_tags: Vec<String>,
}

impl ServiceBlockBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            change_threshold: None,
            distinct_tags: None,
            ignored_tags: vec![],
        }
    }

    pub fn change_threshold(mut self, threshold: u32) -> Self {
        self.change_threshold = Some(threshold);
        self
    }

    pub fn distinct_tags(mut self, val: bool) -> Self {
        self.distinct_tags = Some(val);
        self
    }

    pub fn ignore_tag(mut self, tag: &str) -> Self {
        self.ignored_tags.push(tag.to_string());
        self
    }

    fn render(&self) -> String {
        let mut block = format!("service {} {{\n", quote(&self.name));
        if let Some(threshold) = self.change_threshold {
            let _ = writeln!(block, "  change_threshold = {threshold}");
        }
        if let Some(distinct) = self.distinct_tags {
            let _ = writeln!(block, "  distinct_tags = {distinct}");
        }
        if !self.ignored_tags.is_empty() {
            let tags: Vec<&str> = self.ignored_tags.iter().map(String::as_str).collect();
            let _ = writeln!(block, "  ignored_tags = {}", list(&tags));
        }
        block.push_str("}\n");
        block
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

fn list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", quoted.join(", "))
}
