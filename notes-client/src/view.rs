use chrono::Local;

use std::fmt::Write;

use crate::state::NotesState;

pub const EMPTY_LIST: &str = "No notes yet. Add one above.";

pub fn render(state: &NotesState) -> String {
    let mut out = String::from("My Notes\n\n");

    let input = if state.content.is_empty() {
        "Write a note..."
    } else {
        state.content.as_str()
    };
    let button = if state.is_submitting { "Adding..." } else { "Add" };
    let _ = writeln!(out, "[ {input} ] ({button})");

    if let Some(error) = &state.error {
        let _ = writeln!(out, "! {error}");
    }
    if state.is_fetching {
        out.push_str("Loading...\n");
    }
    out.push('\n');

    if state.notes.is_empty() {
        let _ = writeln!(out, "  {EMPTY_LIST}");
    }
    for (idx, note) in state.notes.iter().enumerate() {
        let time_str = note
            .created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(out, "{:>3}. {}\n     {}", idx + 1, time_str, note.content);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ADD_FAILED, tests::note};

    #[test]
    fn empty_list_shows_placeholder() {
        let out = render(&NotesState::default());

        assert!(out.contains(EMPTY_LIST));
        assert!(out.contains("Write a note..."));
        assert!(out.contains("(Add)"));
    }

    #[test]
    fn notes_render_in_state_order() {
        let state = NotesState {
            notes: vec![note("b", 2), note("a", 1)],
            ..NotesState::default()
        };

        let out = render(&state);

        assert!(!out.contains(EMPTY_LIST));
        let b = out.find("note b").unwrap();
        let a = out.find("note a").unwrap();
        assert!(b < a);
        assert!(out.contains("  1. "));
    }

    #[test]
    fn busy_and_error_states_are_visible() {
        let state = NotesState {
            content: "draft".to_string(),
            is_submitting: true,
            is_fetching: true,
            error: Some(ADD_FAILED.to_string()),
            ..NotesState::default()
        };

        let out = render(&state);

        assert!(out.contains("[ draft ] (Adding...)"));
        assert!(out.contains(&format!("! {ADD_FAILED}")));
        assert!(out.contains("Loading..."));
    }
}
