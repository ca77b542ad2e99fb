//! Category display formatting

use crate::models::{Category, TransactionType};

/// Format categories grouped under an income and an expense heading
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();

    for &kind in TransactionType::all() {
        let in_kind: Vec<&Category> = categories.iter().filter(|c| c.kind == kind).collect();
        if in_kind.is_empty() {
            continue;
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", kind.as_str().to_uppercase()));

        for category in in_kind {
            let marker = if category.is_default { "" } else { " (custom)" };
            output.push_str(&format!(
                "  {:<8} {}{}\n",
                category.id.to_string(),
                category.name,
                marker
            ));
        }
    }

    output
}
