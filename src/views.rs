// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML rendering for the transcript page.

/// State shown on the index page after a request.
#[derive(Debug, Default, Clone)]
pub struct IndexPage {
    /// What the user typed, echoed back into the form
    pub input: Option<String>,
    pub transcript: Option<String>,
    pub error: Option<String>,
    /// Name of the file the transcript was saved under
    pub filename: Option<String>,
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem;color:#222}\
form{display:flex;gap:.5rem;margin-bottom:1.5rem}\
input[type=text]{flex:1;padding:.5rem;font-size:1rem}\
button{padding:.5rem 1rem;font-size:1rem}\
.error{background:#fdecea;border:1px solid #f5c2c0;padding:.75rem;border-radius:4px}\
.saved{color:#2e7d32}\
.transcript{white-space:pre-wrap;background:#f6f8fa;border:1px solid #ddd;padding:1rem;border-radius:4px;line-height:1.5}";

impl IndexPage {
    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str("<title>YouTube Transcript Fetcher</title>\n");
        html.push_str(&format!("<style>{}</style>\n", STYLE));
        html.push_str("</head>\n<body>\n");
        html.push_str("<h1>YouTube Transcript Fetcher</h1>\n");

        html.push_str("<form method=\"post\" action=\"/\">\n");
        html.push_str(&format!(
            "<input type=\"text\" name=\"video_url\" placeholder=\"YouTube URL or video ID\" value=\"{}\" required>\n",
            html_escape(self.input.as_deref().unwrap_or_default())
        ));
        html.push_str("<button type=\"submit\">Get transcript</button>\n</form>\n");

        if let Some(error) = &self.error {
            html.push_str(&format!(
                "<div class=\"error\" role=\"alert\">{}</div>\n",
                html_escape(error)
            ));
        }

        if let Some(filename) = &self.filename {
            html.push_str(&format!(
                "<p class=\"saved\">Transcript saved on the server as <code>{}</code></p>\n",
                html_escape(filename)
            ));
        }

        if let Some(transcript) = &self.transcript {
            html.push_str("<h2>Transcript</h2>\n");
            html.push_str(&format!(
                "<div class=\"transcript\">{}</div>\n",
                html_escape(transcript)
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_form_only() {
        let html = IndexPage::default().render();
        assert!(html.contains("name=\"video_url\""));
        assert!(html.contains("value=\"\""));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("class=\"transcript\""));
    }

    #[test]
    fn test_dynamic_text_is_escaped() {
        let page = IndexPage {
            input: Some("\"><script>x</script>".to_string()),
            transcript: Some("Tom & Jerry <3".to_string()),
            error: Some("it's <bad>".to_string()),
            filename: Some("transcript_a.txt".to_string()),
        };
        let html = page.render();

        assert!(!html.contains("<script>x"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;x&lt;/script&gt;\""));
        assert!(html.contains("Tom &amp; Jerry &lt;3"));
        assert!(html.contains("it&#39;s &lt;bad&gt;"));
        assert!(html.contains("<code>transcript_a.txt</code>"));
    }
}
