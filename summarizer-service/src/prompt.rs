//! Prompt templates for the two AI tasks, and keyword post-processing.

/// Render the summarization prompt for the given input text.
pub fn summary_prompt(text: &str) -> String {
    format!(
        "Summarize the following text concisely, focusing on the main points and key takeaways. \
         The summary should be easy to understand. Here is the text:\n\n\
         --- TEXT BEGINS ---\n\
         {text}\n\
         --- TEXT ENDS ---\n\n\
         Provide only the concise summary below:\n"
    )
}

/// Render the keyword-extraction prompt for the given input text.
pub fn keywords_prompt(text: &str) -> String {
    format!(
        "From the following text, extract the 5 to 7 most important and relevant keywords or \
         key phrases. Return these keywords strictly as a comma-separated list, with no other \
         introductory text or formatting. Here is the text:\n\n\
         --- TEXT BEGINS ---\n\
         {text}\n\
         --- TEXT ENDS ---\n\n\
         KEYWORDS (comma-separated list only):"
    )
}

/// Split a raw keyword reply on commas, trimming whitespace and dropping
/// empty segments.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
