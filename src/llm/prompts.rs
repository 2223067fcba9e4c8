/// Build a summarization prompt for one transcript segment.
pub fn build_chunk_prompt(segment: &str, min_length: usize, max_length: usize) -> String {
    format!(
        "You are an assistant that condenses video transcript excerpts.\n\
\n\
Summarize the excerpt below in roughly {min_length} to {max_length} words.\n\
\n\
Rules:\n\
- Use only information present in the excerpt.\n\
- Write plain prose, no headings or bullet points.\n\
- The excerpt may start or end mid-sentence; summarize what is there.\n\
\n\
Excerpt:\n\
{segment}"
    )
}
