use serde::Serialize;

pub const NOT_FOUND: &str =
    "There is no word in the list that can be composed from the other words.";

/// Outcome of one run, printed as text or JSON.
#[derive(Debug, Serialize)]
pub struct Report {
    pub input: String,
    /// Longest compound word, `None` when nothing qualifies.
    pub word: Option<String>,
    /// Its parts; empty with the pattern strategy.
    pub parts: Vec<String>,
    pub strategy: &'static str,
    pub parallel: bool,
    pub words: usize,
    pub dictionary_size: usize,
    pub code_rev: String,
}

impl Report {
    pub fn new(
        input: String,
        strategy: &'static str,
        parallel: bool,
        words: usize,
        dictionary_size: usize,
    ) -> Self {
        Self {
            input,
            word: None,
            parts: Vec::new(),
            strategy,
            parallel,
            words,
            dictionary_size,
            code_rev: current_code_rev(),
        }
    }

    /// Text output, newline-terminated.
    pub fn render_text(&self) -> String {
        let Some(word) = &self.word else {
            return format!("{NOT_FOUND}\n");
        };
        let mut out = format!("The longest compound word is \"{word}\".\n");
        if !self.parts.is_empty() {
            let joined = self
                .parts
                .iter()
                .map(|p| format!("\"{p}\""))
                .collect::<Vec<_>>()
                .join(" + ");
            out.push_str(&format!("It can be composed as {joined}.\n"));
        }
        out
    }
}

/// Commit the binary was built from: `GIT_COMMIT` at build time, then at run
/// time, else "unknown".
fn current_code_rev() -> String {
    if let Some(from_build) = option_env!("GIT_COMMIT") {
        if !from_build.is_empty() {
            return from_build.to_string();
        }
    }
    match std::env::var("GIT_COMMIT") {
        Ok(rev) if !rev.is_empty() => rev,
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn report(word: Option<&str>, parts: &[&str]) -> Report {
        let mut r = Report::new("words.txt".into(), "backtrack", false, 4, 3);
        r.word = word.map(str::to_string);
        r.parts = parts.iter().map(|p| p.to_string()).collect();
        r
    }

    #[test]
    fn text_with_parts_has_two_lines() {
        let r = report(Some("catdog"), &["cat", "dog"]);
        assert_eq!(
            r.render_text(),
            "The longest compound word is \"catdog\".\nIt can be composed as \"cat\" + \"dog\".\n"
        );
    }

    #[test]
    fn text_without_parts_has_one_line() {
        let r = report(Some("catdog"), &[]);
        assert_eq!(r.render_text(), "The longest compound word is \"catdog\".\n");
    }

    #[test]
    fn text_when_nothing_found() {
        assert_eq!(report(None, &[]).render_text(), format!("{NOT_FOUND}\n"));
    }

    #[test]
    fn json_fields() {
        let r = report(Some("aaa"), &["a", "a", "a"]);
        let v: Value = serde_json::to_value(&r).unwrap();
        assert_eq!(v["word"], "aaa");
        assert_eq!(v["parts"].as_array().unwrap().len(), 3);
        assert_eq!(v["strategy"], "backtrack");
        assert_eq!(v["dictionary_size"], 3);
        assert!(v["code_rev"].is_string());

        let none: Value = serde_json::to_value(report(None, &[])).unwrap();
        assert!(none["word"].is_null());
    }
}
