//! Key-combination normalization.

/// Normalize a combo such as `"Ctrl+Super+A"` into backend key names.
///
/// Tokens are lower-cased and trimmed; `super` and `cmd` become `command`,
/// then common synonyms collapse to one spelling. Names not in the table are
/// passed through unchanged for the backend to accept or reject.
pub fn normalize_key_combo(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split('+')
        .map(str::trim)
        .map(|token| match token {
            "super" | "cmd" => "command",
            other => other,
        })
        .map(|token| canonical_key(token).unwrap_or(token).to_string())
        .collect()
}

fn canonical_key(token: &str) -> Option<&'static str> {
    let key = match token {
        "ctrl" | "control" => "ctrl",
        "alt" | "option" => "alt",
        "shift" => "shift",
        "command" => "command",
        "tab" => "tab",
        "enter" | "return" => "enter",
        "esc" | "escape" => "esc",
        "space" | "spacebar" => "space",
        "up" => "up",
        "down" => "down",
        "left" => "left",
        "right" => "right",
        _ => return None,
    };
    Some(key)
}
