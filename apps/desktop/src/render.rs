use std::fmt::Write as _;

use client_core::ManagerSnapshot;
use shared::domain::DraftField;

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Phone"];

pub fn render(snapshot: &ManagerSnapshot) -> String {
    let mut out = String::new();
    render_form(snapshot, &mut out);
    out.push('\n');
    render_table(snapshot, &mut out);
    out
}

fn render_form(snapshot: &ManagerSnapshot, out: &mut String) {
    let _ = writeln!(out, "== {} ==", snapshot.heading());
    for field in DraftField::ALL {
        let value = snapshot.draft.get(field);
        let marker = if value.trim().is_empty() { " (required)" } else { "" };
        let _ = writeln!(out, "  {:<10} {value}{marker}", format!("{}:", field.label()));
    }

    let mut actions = if snapshot.submitting {
        format!("[{}] (waiting for server)", snapshot.submit_label())
    } else {
        format!("[{}]", snapshot.submit_label())
    };
    if snapshot.can_cancel() {
        actions.push_str(" [Cancel]");
    }
    let _ = writeln!(out, "  {actions}");

    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "  ! {error}");
    }
}

fn render_table(snapshot: &ManagerSnapshot, out: &mut String) {
    let _ = writeln!(out, "== Users ==");
    if snapshot.loading {
        let _ = writeln!(out, "Loading users...");
    }

    let rows: Vec<[String; 4]> = snapshot
        .users
        .iter()
        .map(|user| {
            [
                user.id.to_string(),
                user.name.clone(),
                user.email.clone(),
                user.phone_number.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        write_row(out, row, &widths);
    }
    if rows.is_empty() && !snapshot.loading {
        let _ = writeln!(out, "(no users)");
    }
}

fn write_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
