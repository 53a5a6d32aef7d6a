//! End-to-end editing scenarios driven through the public dispatch surface.

use strand::{DispatchResult, EditorSession, Marker};

fn run(session: &mut EditorSession, tokens: &[&str]) {
    for token in tokens {
        session.dispatch(token);
    }
}

#[test]
fn cursor_stays_clamped_across_arbitrary_edit_sequences() {
    let mut session = EditorSession::new();
    let tokens = [
        "ihello world", "l", "l", "l", "$", "x", "^", "dw", "aagain", "b", "w", "x", "x", "x",
        "dw", "dw", "u", "u", "h",
    ];
    for token in tokens {
        session.dispatch(token);
        let len = session.content().chars().count();
        assert!(session.cursor() <= len, "cursor escaped range after {token:?}");
    }
}

#[test]
fn insert_into_empty_line_lands_on_the_last_character() {
    let mut session = EditorSession::new();
    session.dispatch("ihello");
    assert_eq!(session.content(), "hello");
    assert_eq!(session.cursor(), 4);

    // Moving right from the last character is absorbed by the end-of-line
    // clamp-back: position 5 would be end-of-line, so the cursor stays at 4.
    session.dispatch("l");
    assert_eq!(session.cursor(), 4);
    assert_eq!(session.content(), "hello");

    session.dispatch("^");
    assert_eq!(session.cursor(), 0);

    // Single-word line: no next word, `w` is idempotent at the line start.
    session.dispatch("w");
    assert_eq!(session.cursor(), 0);
    session.dispatch("w");
    assert_eq!(session.cursor(), 0);
}

#[test]
fn delete_word_at_line_start_strips_the_trailing_space() {
    let mut session = EditorSession::with_text("go to school");
    session.dispatch("dw");
    assert_eq!(session.content(), "to school");
    assert_eq!(session.cursor(), 0);
}

#[test]
fn delete_word_in_the_middle_lands_one_past_the_boundary() {
    let mut session = EditorSession::with_text("go to school");
    run(&mut session, &["w"]); // start of "to"
    assert_eq!(session.cursor(), 3);
    session.dispatch("dw");
    assert_eq!(session.content(), "go school");
    assert_eq!(session.cursor(), 3);
}

#[test]
fn deleting_every_character_then_deleting_again_reprompts() {
    let mut session = EditorSession::with_text("abc");
    assert_eq!(
        session.dispatch("x"),
        DispatchResult::Render("bc".to_string())
    );
    assert_eq!(
        session.dispatch("x"),
        DispatchResult::Render("c".to_string())
    );
    // The delete that empties the buffer has nothing to show.
    assert_eq!(session.dispatch("x"), DispatchResult::Reprompt);
    assert_eq!(session.content(), "");
    // Empty-buffer delete is the re-prompt path, not a crash.
    assert_eq!(session.dispatch("x"), DispatchResult::Reprompt);
}

#[test]
fn undo_with_only_the_sentinel_is_a_harmless_no_op() {
    let mut session = EditorSession::new();
    assert_eq!(session.dispatch("u"), DispatchResult::Reprompt);
    assert_eq!(session.content(), "");
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.history_len(), 1);
}

#[test]
fn undo_restores_the_exact_state_before_each_recorded_operation() {
    let mut session = EditorSession::new();
    let tokens = ["ione two", "w", "dw", "athree", "h", "x"];
    let mut snapshots = vec![(session.content().to_string(), session.cursor())];
    for token in tokens {
        session.dispatch(token);
        snapshots.push((session.content().to_string(), session.cursor()));
    }
    snapshots.pop();
    while let Some((content, cursor)) = snapshots.pop() {
        session.dispatch("u");
        assert_eq!(session.content(), content);
        assert_eq!(session.cursor(), cursor);
    }
}

#[test]
fn repeat_with_no_replayable_history_is_a_no_op() {
    let mut session = EditorSession::new();
    assert_eq!(session.dispatch("r"), DispatchResult::Reprompt);
    session.dispatch("?");
    session.dispatch("s");
    assert_eq!(session.dispatch("r"), DispatchResult::Reprompt);
    assert_eq!(session.content(), "");
}

#[test]
fn repeat_reinserts_the_last_inserted_text() {
    let mut session = EditorSession::new();
    session.dispatch("iab");
    session.dispatch("r");
    assert_eq!(session.content(), "aabb");
}

#[test]
fn repeat_replays_movement_commands() {
    let mut session = EditorSession::with_text("abcdef");
    session.dispatch("l");
    assert_eq!(session.cursor(), 1);
    session.dispatch("r");
    assert_eq!(session.cursor(), 2);
    session.dispatch("r");
    assert_eq!(session.cursor(), 3);
}

#[test]
fn overlay_round_trips_and_never_touches_content() {
    let marker = Marker::default();
    let content = "go to school";
    for pos in 0..=content.len() {
        assert_eq!(marker.unmark(&marker.mark_at(content, pos)), content);
    }

    let mut session = EditorSession::with_text(content).with_marker(Marker::new("[", "]"));
    session.dispatch(".");
    assert_eq!(session.current_display(), "[g]o to school");
    assert_eq!(session.content(), content);
    session.dispatch(".");
    assert_eq!(session.current_display(), content);
}

#[test]
fn word_motions_traverse_and_wrap() {
    let mut session = EditorSession::with_text("go to school");
    session.dispatch("w");
    assert_eq!(session.cursor(), 3);
    session.dispatch("w");
    assert_eq!(session.cursor(), 6);
    // Inside the final span `w` wraps back to the line start.
    session.dispatch("w");
    assert_eq!(session.cursor(), 0);

    session.dispatch("$");
    assert_eq!(session.cursor(), 11);
    session.dispatch("b");
    assert_eq!(session.cursor(), 6);
    session.dispatch("b");
    assert_eq!(session.cursor(), 3);
    session.dispatch("b");
    assert_eq!(session.cursor(), 0);
    // At the line start `b` is idempotent.
    session.dispatch("b");
    assert_eq!(session.cursor(), 0);
}

#[test]
fn append_lands_on_the_last_appended_character() {
    let mut session = EditorSession::new();
    session.dispatch("iab");
    assert_eq!(session.cursor(), 1);
    session.dispatch("a end");
    assert_eq!(session.content(), "ab end");
    assert_eq!(session.cursor(), 5);
}

#[test]
fn malformed_commands_never_disturb_the_session() {
    let mut session = EditorSession::with_text("steady");
    for token in ["", "z", "xy", "dwx", " h", "??", "q!"] {
        assert_eq!(session.dispatch(token), DispatchResult::Reprompt, "{token:?}");
        assert_eq!(session.content(), "steady");
        assert_eq!(session.cursor(), 0);
    }
}
