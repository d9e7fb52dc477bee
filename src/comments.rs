//! Stripping of restricted HTML comment lines from authoring-format text

/// Comment marker recognized at the very start of a line
const COMMENT_MARKER: &str = "<!--";

/// Remove every line that starts with the HTML comment marker.
///
/// The publication target rejects raw HTML, so authoring documents may only
/// carry comments in this restricted whole-line form. Matching lines are
/// removed entirely; everything else passes through verbatim, in order, with
/// its original line terminator. A marker mid-line is not a comment.
pub fn strip_html_comments(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .collect()
}
