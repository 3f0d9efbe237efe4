//! HTML view - renders the form page and the evaluation result.

use crate::sections::SPECIAL_CHARS;
use crate::types::StrengthReport;

/// Renders the full page; the result block is present only after a POST.
///
/// The password itself is never echoed back into the page.
pub fn render_page(report: Option<&StrengthReport>) -> String {
    let result_block = report.map(render_result).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Password Strength Meter</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 480px; margin: 2rem auto; padding: 1rem; }}
        h1 {{ color: #333; }}
        form {{ display: flex; gap: 0.5rem; }}
        input[type="password"] {{ flex: 1; padding: 0.5rem; }}
        button {{ padding: 0.5rem 1rem; }}
        .result {{ margin-top: 1rem; padding: 1rem; background: #f0f0f0; border-radius: 4px; }}
        .result ul {{ list-style: none; padding: 0; margin: 0.5rem 0 0 0; }}
        .met {{ color: #16a34a; }}
        .unmet {{ color: #9ca3af; }}
        .text-red-600 {{ color: #dc2626; font-weight: 600; }}
        .text-yellow-600 {{ color: #ca8a04; font-weight: 600; }}
        .text-green-600 {{ color: #16a34a; font-weight: 600; }}
    </style>
</head>
<body>
    <h1>Password Strength Meter</h1>
    <form method="post" action="/">
        <input type="password" name="password" placeholder="Enter a password" autofocus>
        <button type="submit">Check</button>
    </form>
{result_block}</body>
</html>"#
    )
}

fn render_result(report: &StrengthReport) -> String {
    let special_label = format!("Special character ({})", escape(SPECIAL_CHARS));
    let criteria = [
        ("At least 8 characters".to_string(), report.min_length),
        ("Uppercase letter".to_string(), report.has_upper),
        ("Lowercase letter".to_string(), report.has_lower),
        ("Digit".to_string(), report.has_digit),
        (special_label, report.has_special),
    ];

    let items: String = criteria
        .iter()
        .map(|(label, met)| {
            let (class, mark) = if *met {
                ("met", "&#10003;")
            } else {
                ("unmet", "&#10007;")
            };
            format!("            <li class=\"{class}\">{mark} {label}</li>\n")
        })
        .collect();

    format!(
        r#"    <div class="result">
        <p>Strength: <span class="{color}">{strength:?}</span></p>
        <ul>
{items}        </ul>
    </div>
"#,
        color = report.color_class.css_class(),
        strength = report.strength,
    )
}

/// Minimal HTML escaping for text rendered into the page.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
