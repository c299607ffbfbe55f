//! Shared HTML rendering
//!
//! Pages are assembled in Rust with `format!`; every interpolated value
//! that originates from the database or a request must pass through
//! [`escape`] on the way into markup.

/// Flash banner severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Info,
    Warning,
}

/// One-shot user-facing notice rendered at the top of a page
#[derive(Debug, Clone)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
}

impl Flash {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: FlashLevel::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: FlashLevel::Warning, text: text.into() }
    }
}

/// Escape text for interpolation into HTML
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a value for use inside a query string
pub fn query_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

fn flash_banner(flash: &Flash) -> String {
    let class = match flash.level {
        FlashLevel::Info => "flash flash-info",
        FlashLevel::Warning => "flash flash-warning",
    };
    format!(r#"<div class="{}">{}</div>"#, class, escape(&flash.text))
}

/// Wrap page body in the shared document shell with nav and flash banner
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let banner = flash.map(flash_banner).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Showbill</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 16px 20px;
        }}
        header a {{ color: #4a9eff; text-decoration: none; margin-right: 16px; }}
        header a:hover {{ text-decoration: underline; }}
        .container {{ padding: 20px; max-width: 960px; }}
        h1 {{ font-size: 26px; color: #4a9eff; margin-bottom: 12px; }}
        h2 {{ font-size: 20px; color: #9fcaff; margin: 18px 0 8px; }}
        ul {{ list-style: none; }}
        li {{ padding: 4px 0; }}
        a {{ color: #4a9eff; }}
        .flash {{ padding: 10px 20px; }}
        .flash-info {{ background-color: #1e3a2a; color: #9fe0b0; }}
        .flash-warning {{ background-color: #3a2a1e; color: #e0c09f; }}
        .muted {{ color: #888; font-size: 14px; }}
        form label {{ display: block; margin-top: 10px; color: #9fcaff; }}
        form input {{
            width: 320px; padding: 6px; background-color: #2a2a2a;
            border: 1px solid #3a3a3a; color: #e0e0e0;
        }}
        form button {{
            margin-top: 14px; padding: 8px 18px; background-color: #4a9eff;
            border: none; color: #101010; cursor: pointer;
        }}
        table {{ border-collapse: collapse; margin-top: 10px; }}
        th, td {{ border: 1px solid #3a3a3a; padding: 6px 12px; text-align: left; }}
        th {{ color: #9fcaff; }}
    </style>
</head>
<body>
    <header>
        <a href="/">Showbill</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <a href="/venues/create">List a venue</a>
        <a href="/artists/create">List an artist</a>
        <a href="/shows/create">List a show</a>
    </header>
    {banner}
    <div class="container">
{body}
    </div>
</body>
</html>
"#,
        title = escape(title),
        banner = banner,
        body = body,
    )
}

/// Dedicated 404 page
pub fn not_found_page(what: &str) -> String {
    let body = format!(
        "<h1>Not found</h1>\n<p>The requested resource ({}) does not exist.</p>\n\
         <p><a href=\"/\">Back to the landing page</a></p>",
        escape(what)
    );
    layout("Not found", None, &body)
}

/// Dedicated 500 page
pub fn server_error_page() -> String {
    let body = "<h1>Something went wrong</h1>\n\
                <p>An internal error occurred. Please try again.</p>\n\
                <p><a href=\"/\">Back to the landing page</a></p>";
    layout("Server error", None, body)
}
