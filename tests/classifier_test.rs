// tests/classifier_test.rs
use proptest::prelude::*;
use ticket_classify::{classify, find_tickets, Classification, Strategy, TicketReference};

fn ticket(s: &str) -> TicketReference {
    s.parse().unwrap()
}

#[test]
fn test_structured_without_scope() {
    let result = classify("ABC-456/fix: Bug fix");
    assert_eq!(result.strategy(), Strategy::Structured);
    assert_eq!(result.ticket(), Some(&ticket("ABC-456")));

    let parts = result.conventional().unwrap();
    assert_eq!(parts.r#type, "fix");
    assert_eq!(parts.scope, None);
    assert_eq!(parts.subject, "Bug fix");
}

#[test]
fn test_structured_scope_keeps_parentheses() {
    let result = classify("JIRA-789/chore(workflow): Update CI config");
    let parts = result.conventional().unwrap();
    assert_eq!(parts.r#type, "chore");
    assert_eq!(parts.scope.as_deref(), Some("(workflow)"));
    assert_eq!(parts.subject, "Update CI config");
}

#[test]
fn test_plain_conventional_commit_has_no_ticket() {
    assert_eq!(
        classify("feat(deps): Update dependency"),
        Classification::NoMatch
    );
}

#[test]
fn test_ticket_in_middle_of_message() {
    let result = classify("Update COH-123 dependency version");
    assert_eq!(
        result,
        Classification::LooseScan {
            ticket: ticket("COH-123")
        }
    );
}

#[test]
fn test_ticket_at_end_of_message() {
    let result = classify("Update dependency version COH-123");
    assert_eq!(result.strategy(), Strategy::LooseScan);
    assert_eq!(result.ticket(), Some(&ticket("COH-123")));
}

#[test]
fn test_leftmost_ticket_wins() {
    let result = classify("Fix issue COH-123 and update for COH-456");
    assert_eq!(result.strategy(), Strategy::LooseScan);
    assert_eq!(result.ticket(), Some(&ticket("COH-123")));
}

#[test]
fn test_missing_hyphen_defeats_every_strategy() {
    assert_eq!(
        classify("COH123/feat(deps): Missing hyphen"),
        Classification::NoMatch
    );
}

#[test]
fn test_extra_slash_uses_fallback() {
    let result = classify("COH-123/feat/not-conventional: Missing structure");
    assert_eq!(
        result,
        Classification::TicketSlashFallback {
            ticket: ticket("COH-123")
        }
    );
    assert!(result.conventional().is_none());
}

#[test]
fn test_non_conventional_remainder_uses_fallback() {
    let result = classify("COH-123/This is not conventional format");
    assert_eq!(result.strategy(), Strategy::TicketSlashFallback);
}

#[test]
fn test_dash_separator_uses_loose_scan() {
    let result = classify("COH-123 - Some message without proper format");
    assert_eq!(result.strategy(), Strategy::LooseScan);
    assert_eq!(result.ticket(), Some(&ticket("COH-123")));
}

#[test]
fn test_fallback_ignores_plain_conventional_commits() {
    for message in [
        "feat(deps): Update dependency",
        "fix: Bug fix (#123)",
        "feat!: Breaking change with exclamation",
    ] {
        assert_eq!(
            classify(message).strategy(),
            Strategy::NoMatch,
            "'{}' should not be classified",
            message
        );
    }
}

#[test]
fn test_ticket_adjacent_to_non_ascii_letters() {
    assert_eq!(
        classify("修复COH-123问题"),
        Classification::LooseScan {
            ticket: ticket("COH-123")
        }
    );
    assert_eq!(classify("éCOH-1 fix").ticket(), Some(&ticket("COH-1")));
    assert_eq!(classify("Fix COH-1é").ticket(), Some(&ticket("COH-1")));
}

#[test]
fn test_carriage_return_is_a_line_terminator() {
    let result = classify("COH-1/feat: a\rb");
    assert_eq!(result.strategy(), Strategy::LooseScan);
    assert!(result.conventional().is_none());
}

#[test]
fn test_find_tickets_enumerates_all() {
    let tickets = find_tickets("Fix for COH-123 and update related to COH-456");
    assert_eq!(tickets, vec![ticket("COH-123"), ticket("COH-456")]);
}

#[test]
fn test_classify_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || classify(&format!("COH-{}/fix: thread {}", i, i))))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.strategy(), Strategy::Structured);
        assert_eq!(result.ticket(), Some(&ticket(&format!("COH-{}", i))));
    }
}

proptest! {
    #[test]
    fn prop_structured_without_scope(
        key in "[A-Z]{1,6}",
        number in "[0-9]{1,8}",
        kind in "[a-z]{1,10}",
        subject in "[A-Za-z0-9][A-Za-z0-9 :(),.!/-]{0,40}",
    ) {
        let message = format!("{}-{}/{}: {}", key, number, kind, subject);
        let result = classify(&message);

        prop_assert_eq!(result.strategy(), Strategy::Structured);
        prop_assert_eq!(result.ticket().unwrap().as_str(), format!("{}-{}", key, number));
        let parts = result.conventional().unwrap();
        prop_assert_eq!(&parts.r#type, &kind);
        prop_assert_eq!(parts.scope.as_deref(), None);
        prop_assert_eq!(&parts.subject, &subject);
    }

    #[test]
    fn prop_structured_with_scope(
        key in "[A-Z]{1,6}",
        number in "[0-9]{1,8}",
        kind in "[a-z]{1,10}",
        scope in "[a-z0-9 _-]{0,12}",
        subject in "[A-Za-z0-9][A-Za-z0-9 :(),.!/-]{0,40}",
    ) {
        let message = format!("{}-{}/{}({}): {}", key, number, kind, scope, subject);
        let result = classify(&message);

        prop_assert_eq!(result.strategy(), Strategy::Structured);
        let parts = result.conventional().unwrap();
        let expected_scope = format!("({})", scope);
        prop_assert_eq!(parts.scope.as_deref(), Some(expected_scope.as_str()));
        prop_assert_eq!(&parts.subject, &subject);
    }

    #[test]
    fn prop_loose_scan_finds_embedded_ticket(
        prefix in "[a-z ]{0,20}",
        key in "[A-Z]{1,6}",
        number in "[0-9]{1,8}",
        suffix in "[a-z ]{0,20}",
    ) {
        let message = format!("{} {}-{} {}", prefix, key, number, suffix);
        let result = classify(&message);

        prop_assert_eq!(result.strategy(), Strategy::LooseScan);
        prop_assert_eq!(result.ticket().unwrap().as_str(), format!("{}-{}", key, number));
    }

    #[test]
    fn prop_classify_is_idempotent(message in "\\PC{0,80}") {
        prop_assert_eq!(classify(&message), classify(&message));
    }

    #[test]
    fn prop_selected_ticket_is_first_found(message in "[A-Za-z0-9 /:()-]{0,60}") {
        let result = classify(&message);
        let tickets = find_tickets(&message);
        match result.strategy() {
            Strategy::LooseScan => {
                prop_assert_eq!(result.ticket(), tickets.first());
            }
            Strategy::NoMatch => {
                prop_assert!(tickets.is_empty());
            }
            _ => {}
        }
    }
}
