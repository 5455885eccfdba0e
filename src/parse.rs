//! Labeled-section extraction and code-fence cleanup.
//!
//! The model is asked to reply with three labeled lines (`[Language]:`,
//! `[Chat]:`, `[Code]:`). This is an ad hoc free-text contract with no
//! schema enforcement: absent labels yield `None` rather than an error,
//! and `[Code]:` captures greedily to end of text, swallowing anything
//! the model appends after the code. The greedy capture is kept as-is
//! because the front-end depends on the current shape.

use once_cell::sync::Lazy;
use regex::Regex;

static LANG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[Language\]:\s*(.*)").expect("regex: language label"));
static CHAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[Chat\]:\s*(.*)").expect("regex: chat label"));
// [\s\S] spans lines: the code section is final and open-ended.
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[Code\]:\s*([\s\S]*)").expect("regex: code label"));
// Matches ```python-style opening fences and bare ``` alike.
static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[a-zA-Z]*\n?").expect("regex: code fence"));

/// Fields recovered from one model reply. Absent labels are `None`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedReply {
    pub language: Option<String>,
    pub chat: Option<String>,
    pub fixed_code: Option<String>,
}

/// Extract the first match of each labeled section, trimmed.
pub fn parse_reply(text: &str) -> ParsedReply {
    ParsedReply {
        language: capture(&LANG_RE, text),
        chat: capture(&CHAT_RE, text),
        fixed_code: capture(&CODE_RE, text),
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Remove code-fence markup and trim. Idempotent; a no-op (modulo trim)
/// on fence-free text.
pub fn strip_fences(text: &str) -> String {
    FENCE_RE.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_reply_parses_all_sections() {
        let reply = "[Language]: python\n[Chat]: Fixed the loop.\n[Code]: ```python\nprint(1)\n```";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.language.as_deref(), Some("python"));
        assert_eq!(parsed.chat.as_deref(), Some("Fixed the loop."));
        assert_eq!(
            strip_fences(parsed.fixed_code.as_deref().unwrap()),
            "print(1)"
        );
    }

    #[test]
    fn missing_chat_label_yields_none() {
        let reply = "[Language]: rust\n[Code]: fn main() {}";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.language.as_deref(), Some("rust"));
        assert_eq!(parsed.chat, None);
        assert_eq!(parsed.fixed_code.as_deref(), Some("fn main() {}"));
    }

    #[test]
    fn empty_reply_yields_all_none() {
        assert_eq!(parse_reply("no labels here"), ParsedReply::default());
    }

    #[test]
    fn code_capture_is_greedy_to_end_of_text() {
        // Trailing prose after the code section is swallowed into fixed_code.
        let reply = "[Code]: print(1)\n\nHope this helps!";
        let parsed = parse_reply(reply);
        assert_eq!(
            parsed.fixed_code.as_deref(),
            Some("print(1)\n\nHope this helps!")
        );
    }

    #[test]
    fn values_are_trimmed() {
        let parsed = parse_reply("[Language]:   python  \n[Chat]:  done ");
        assert_eq!(parsed.language.as_deref(), Some("python"));
        assert_eq!(parsed.chat.as_deref(), Some("done"));
    }

    #[test]
    fn strip_fences_removes_tagged_and_bare_fences() {
        assert_eq!(strip_fences("```python\nprint(1)\n```"), "print(1)");
        assert_eq!(strip_fences("```\nprint(1)\n```"), "print(1)");
        assert_eq!(strip_fences("a ``` b ``` c"), "a  b  c");
    }

    #[test]
    fn strip_fences_is_idempotent() {
        let once = strip_fences("```cpp\nint main() {}\n```");
        assert_eq!(strip_fences(&once), once);
    }

    #[test]
    fn strip_fences_noop_on_plain_text() {
        assert_eq!(strip_fences("  print(1)  "), "print(1)");
    }
}
