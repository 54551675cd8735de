//! Plain-text reply cards.

use std::fmt::Display;

/// Titled block of `**Field:** value` lines, rendered as chat text.
#[derive(Debug, Clone, Default)]
pub struct Card {
    title: String,
    url: Option<String>,
    fields: Vec<(String, String)>,
    description: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.fields.push((name.into(), value.to_string()));
        self
    }

    /// Add a field only when `value` is present.
    pub fn field_opt<T: Display>(self, name: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    pub fn render(&self) -> String {
        let mut out = format!("**{}**", self.title);

        if let Some(url) = &self.url {
            out.push('\n');
            out.push_str(url);
        }

        for (name, value) in &self.fields {
            out.push_str(&format!("\n**{}:** {}", name, value));
        }

        if let Some(description) = &self.description {
            out.push_str("\n\n");
            out.push_str(description);
        }

        out
    }
}

/// `0.9444` style fraction as `94.44`.
pub fn percent(fraction: f64) -> String {
    format!("{:.2}", fraction * 100.0)
}
