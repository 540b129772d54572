//! Plain-text result card.

use soulname_core::GeneratedName;
use soulname_core::export::export_file_name;

const RULE_WIDTH: usize = 48;

/// Render one record as a card for the terminal.
pub fn render(name: &GeneratedName) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut lines = vec![
        format!("┌{rule}"),
        "│ Your Soul Name".to_string(),
        format!("├{rule}"),
        format!("│ {}", name.local_full_name),
        format!("│ {}", name.romanized_full_name),
        format!("│ {}", name.ancestry_markers),
        "│".to_string(),
        format!("│ Meaning: {} · {}", name.surname_meaning, name.given_name_meaning),
        "│".to_string(),
    ];
    lines.extend(
        wrap(&name.interpretation, RULE_WIDTH - 2)
            .into_iter()
            .map(|line| format!("│ {line}")),
    );
    lines.push(format!("├{rule}"));
    lines.push(format!(
        "│ {}  {}",
        name.created_at.format("%Y-%m-%d"),
        export_file_name(name)
    ));
    lines.push(format!("└{rule}"));
    lines.join("\n")
}

/// Greedy word wrap on whitespace.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
