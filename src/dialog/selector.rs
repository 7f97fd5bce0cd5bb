use std::fmt;

/// Deep link into the dialog: `"page"` or `"page/field"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    pub page: String,
    pub field: Option<String>,
}

impl Selector {
    /// Splits on the first `/`. A leading slash is part of the page name and
    /// an empty field part means no field.
    pub fn parse(s: &str) -> Self {
        match s.find('/') {
            Some(pos) if pos > 0 => {
                let field = &s[pos + 1..];
                Self {
                    page: s[..pos].to_string(),
                    field: (!field.is_empty()).then(|| field.to_string()),
                }
            }
            _ => Self {
                page: s.to_string(),
                field: None,
            },
        }
    }

    pub fn new(page: impl Into<String>, field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            page: page.into(),
            field: (!field.is_empty()).then_some(field),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_empty()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}/{}", self.page, field),
            None => f.write_str(&self.page),
        }
    }
}
