//! 终端文本输出

use crate::draw::{Assignment, DrawMethodInfo};
use crate::reveal::RevealPhase;
use crate::session::SessionSnapshot;

pub fn participants(names: &[String]) -> String {
    let mut out = format!("Participants ({})\n", names.len());
    for name in names {
        out.push_str(&format!("  - {name}\n"));
    }
    out
}

pub fn methods(methods: &[DrawMethodInfo]) -> String {
    methods
        .iter()
        .map(|info| format!("  {:<10}{}\n", info.method.key(), info.description))
        .collect()
}

/// 单条配对，`latest` 为最近揭晓的一条
pub fn assignment(index: usize, assignment: &Assignment, latest: bool) -> String {
    let marker = if latest { " *" } else { "" };
    format!("  {:>2}. {}{marker}\n", index + 1, assignment)
}

pub fn phase_hint(phase: RevealPhase) -> &'static str {
    match phase {
        RevealPhase::Idle => "Add participants and start the draw.",
        RevealPhase::Revealing => "Type `reveal` to see the next pairing!",
        RevealPhase::Complete => "All pairings revealed!",
    }
}

pub fn status(snapshot: &SessionSnapshot) -> String {
    let mut out = participants(&snapshot.participants);

    let method = snapshot
        .selected_method
        .map(|m| m.key())
        .unwrap_or("(none)");
    out.push_str(&format!("Draw method: {method}\n"));
    out.push_str(&format!(
        "Draw: {}\n",
        if snapshot.can_draw { "ready" } else { "not ready" }
    ));

    if snapshot.phase != RevealPhase::Idle {
        out.push_str(&format!(
            "Revealed {}/{}\n",
            snapshot.revealed.len(),
            snapshot.total
        ));
        for (index, item) in snapshot.revealed.iter().enumerate() {
            out.push_str(&assignment(
                index,
                item,
                snapshot.latest_revealed == Some(index),
            ));
        }
    }
    out.push_str(phase_hint(snapshot.phase));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{list_methods, DrawMethod};

    #[test]
    fn test_participants_lists_count() {
        let out = participants(&["Ali".to_string(), "Zeynep".to_string()]);
        assert!(out.starts_with("Participants (2)"));
        assert!(out.contains("  - Zeynep"));
    }

    #[test]
    fn test_assignment_marks_latest() {
        let item = Assignment {
            giver: "A".into(),
            receiver: "B".into(),
        };
        assert_eq!(assignment(0, &item, false), "   1. A -> B\n");
        assert_eq!(assignment(0, &item, true), "   1. A -> B *\n");
    }

    #[test]
    fn test_methods_shows_key() {
        assert!(methods(&list_methods()).contains("classic"));
    }

    #[test]
    fn test_status_idle() {
        let snapshot = SessionSnapshot {
            participants: vec!["A".into()],
            selected_method: Some(DrawMethod::Classic),
            can_draw: false,
            phase: RevealPhase::Idle,
            draw_id: None,
            drawn_at: None,
            total: 0,
            revealed: Vec::new(),
            latest_revealed: None,
        };
        let out = status(&snapshot);
        assert!(out.contains("Draw method: classic"));
        assert!(out.contains("not ready"));
        assert!(!out.contains("Revealed"));
        assert!(out.ends_with("Add participants and start the draw.\n"));
    }
}
