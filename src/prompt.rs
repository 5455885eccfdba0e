//! Prompt templates for the two relay operations.
//!
//! Request fields are interpolated verbatim, so user-controlled text becomes
//! part of the instructions sent to the model. The generateContent `contents`
//! shape carries no separate instruction/data roles, leaving that
//! prompt-injection exposure open; it is documented here rather than hidden.

/// Prompt for the interactive chat turn.
///
/// Instructs the model to detect the language from the user's free text
/// (falling back to `lang`), fix the code, explain the fix, and answer
/// strictly as three labeled lines: `[Language]:`, `[Chat]:`, `[Code]:`.
pub fn chat_prompt(user: &str, lang: &str, code: &str, error: Option<&str>) -> String {
    let error = error.unwrap_or("No error provided.");
    format!(
        "You are a helpful coding assistant.\n\
         \n\
         The user has asked a question related to some code. Please:\n\
         1. Detect the appropriate programming language from user input (ignore the \"Programming Language\" field if the user mentions a language).\n\
         2. Fix the code and return only the corrected version.\n\
         3. Provide a helpful assistant-style explanation (like \"Here's your fixed binary search implementation\").\n\
         4. Clearly identify what programming language you used.\n\
         \n\
         ### User Input:\n\
         {user}\n\
         \n\
         ### Programming Language (fallback if not in user input):\n\
         {lang}\n\
         \n\
         ### Code:\n\
         {code}\n\
         \n\
         ### Error (if any):\n\
         {error}\n\
         \n\
         Respond strictly in this format:\n\
         \n\
         [Language]: <detected_language_lowercase>\n\
         [Chat]: <assistant style message>\n\
         [Code]: <fixed code (no backticks, no markdown)>"
    )
}

/// Prompt for the regeneration-only fix: corrected code as plain text,
/// no fences, no markdown, no prose.
pub fn regen_prompt(language: &str, error: &str, code: &str) -> String {
    format!(
        "Fix the following code by resolving the error mentioned below.\n\
         Return only the fixed code as plain text. **Do not include code fences**, markdown formatting, or language tags.\n\
         Just plain, fixed code. No extra formatting.\n\
         \n\
         ### Programming Language:\n\
         {language}\n\
         \n\
         ### Error:\n\
         {error}\n\
         \n\
         ### Code:\n\
         {code}"
    )
}
