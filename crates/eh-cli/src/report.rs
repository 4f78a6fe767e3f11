use serde::Serialize;

use eh_core::{parse_filter, ElemHideFilter, FilterType};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    pub domain: String,
    pub included: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssReport {
    pub regexp_start: usize,
    pub regexp_end: usize,
    pub prefix: String,
    pub regexp_source: String,
    pub regexp_pattern: String,
    pub suffix: String,
}

/// Everything the CLI prints about one filter line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    pub input: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<DomainReport>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub selector_domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<CssReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FilterReport {
    pub fn build(input: &str, host: Option<&str>) -> Self {
        match parse_filter(input) {
            Ok(filter) => Self::from_filter(input, &filter, host),
            Err(e) => Self {
                input: input.to_string(),
                kind: FilterType::Unknown.as_str(),
                text: None,
                selector: None,
                domains: Vec::new(),
                selector_domain: String::new(),
                css: None,
                active: None,
                error: Some(e.to_string()),
            },
        }
    }

    fn from_filter(input: &str, filter: &ElemHideFilter, host: Option<&str>) -> Self {
        let domains = filter
            .domains()
            .map(|map| {
                map.iter()
                    .filter(|e| !e.domain.is_empty())
                    .map(|e| DomainReport {
                        domain: e.domain.clone(),
                        included: e.included,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let css = filter.css_property().map(|css| CssReport {
            regexp_start: css.offsets().regexp_start,
            regexp_end: css.offsets().regexp_end,
            prefix: css.selector_prefix().to_string(),
            regexp_source: css.regexp_source().to_string(),
            regexp_pattern: css.regexp_pattern(),
            suffix: css.selector_suffix().to_string(),
        });

        Self {
            input: input.to_string(),
            kind: filter.kind().as_str(),
            text: Some(filter.text().to_string()),
            selector: Some(filter.selector().to_string()),
            domains,
            selector_domain: filter.selector_domain(),
            css,
            active: host.map(|h| filter.is_active_on_domain(h)),
            error: None,
        }
    }

    pub fn print_text(&self) {
        println!("{}", self.input);
        println!("  Kind:        {}", self.kind);
        if let Some(error) = &self.error {
            println!("  Error:       {}", error);
            return;
        }
        if let Some(text) = &self.text {
            println!("  Normalized:  {}", text);
        }
        if let Some(selector) = &self.selector {
            println!("  Selector:    {}", selector);
        }
        if !self.domains.is_empty() {
            let listed: Vec<String> = self
                .domains
                .iter()
                .map(|d| if d.included { d.domain.clone() } else { format!("~{}", d.domain) })
                .collect();
            println!("  Domains:     {}", listed.join(", "));
            println!("  Sel. domain: {}", self.selector_domain);
        }
        if let Some(css) = &self.css {
            println!("  Prefix:      {}", css.prefix);
            println!("  Pattern:     {} ({}..{})", css.regexp_source, css.regexp_start, css.regexp_end);
            println!("  Regexp:      {}", css.regexp_pattern);
            println!("  Suffix:      {}", css.suffix);
        }
        if let Some(active) = self.active {
            println!("  Active:      {}", active);
        }
    }
}
