use std::fs;
use std::io::Read;

use serde::Serialize;

use eh_core::{parse, FilterType};

/// Per-kind counts over one or more filter lists.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStats {
    pub lines: usize,
    pub skipped: usize,
    pub elemhide: usize,
    pub elemhide_exception: usize,
    pub css_property: usize,
    pub unknown: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedLine {
    pub source: String,
    pub line: usize,
    pub text: String,
}

impl CheckStats {
    /// Classify every line of `content`. Rejected lines are only kept when
    /// `keep_rejected` is set.
    pub fn add_text(&mut self, source: &str, content: &str, keep_rejected: bool) {
        for (idx, raw_line) in content.lines().enumerate() {
            self.lines += 1;

            let line = raw_line.trim();
            if line.is_empty() || is_comment_line(line) {
                self.skipped += 1;
                continue;
            }

            let mut text = line.to_string();
            match parse(&mut text).kind {
                FilterType::ElemHide => self.elemhide += 1,
                FilterType::ElemHideException => self.elemhide_exception += 1,
                FilterType::CssProperty => self.css_property += 1,
                FilterType::Unknown => {
                    self.unknown += 1;
                    if keep_rejected {
                        self.rejected.push(RejectedLine {
                            source: source.to_string(),
                            line: idx + 1,
                            text: line.to_string(),
                        });
                    }
                }
            }
        }
    }

    pub fn print_text(&self) {
        println!("  Lines:       {}", self.lines);
        println!("  Skipped:     {}", self.skipped);
        println!("  Elemhide:    {}", self.elemhide);
        println!("  Exceptions:  {}", self.elemhide_exception);
        println!("  CSS props:   {}", self.css_property);
        println!("  Other:       {}", self.unknown);
        if !self.rejected.is_empty() {
            println!();
            println!("Not element hiding:");
            for rejected in &self.rejected {
                println!("  {}:{}: {}", rejected.source, rejected.line, rejected.text);
            }
        }
    }
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with('!') || line.starts_with('[')
}

/// Read every input, or stdin when there is none.
pub fn run_check(inputs: &[String], keep_rejected: bool) -> Result<CheckStats, String> {
    let mut stats = CheckStats::default();

    if inputs.is_empty() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        stats.add_text("<stdin>", &content, keep_rejected);
        return Ok(stats);
    }

    for path in inputs {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path, e))?;
        log::debug!("checking '{}' ({} bytes)", path, content.len());
        stats.add_text(path, &content, keep_rejected);
    }

    Ok(stats)
}
