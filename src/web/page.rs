// HTML rendering for the comparison form.
//
// The page is small enough that a template engine would be more code than
// the template. All user text goes through `escape_html`.

use crate::output::format_score;

/// What the form shows: previous inputs plus either a score or an error.
#[derive(Debug, Default, Clone)]
pub struct PageState<'a> {
    pub doc1: Option<&'a str>,
    pub doc2: Option<&'a str>,
    pub score: Option<f64>,
    pub error: Option<String>,
}

/// Escape the five characters that matter in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full form page.
pub fn render(state: &PageState<'_>) -> String {
    let doc1 = escape_html(state.doc1.unwrap_or(""));
    let doc2 = escape_html(state.doc2.unwrap_or(""));

    let result = match (&state.score, &state.error) {
        (_, Some(error)) => format!(
            r#"<p class="error" id="error">{}</p>"#,
            escape_html(error)
        ),
        (Some(score), None) => format!(
            r#"<p class="score" id="similarity">Similarity score: {}</p>"#,
            format_score(*score)
        ),
        (None, None) => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Document Similarity</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}
textarea {{ width: 100%; height: 10rem; }}
.error {{ color: #b00020; }}
.score {{ font-weight: bold; }}
</style>
</head>
<body>
<h1>Document Similarity</h1>
<form method="post" action="/">
<label for="doc1">Document 1</label>
<textarea id="doc1" name="doc1">{doc1}</textarea>
<label for="doc2">Document 2</label>
<textarea id="doc2" name="doc2">{doc2}</textarea>
<button type="submit">Compare</button>
</form>
{result}
</body>
</html>
"#
    )
}
