use iptwp_plot::SelectionSet;

#[test]
fn toggle_inserts_then_removes() {
    let mut selection = SelectionSet::new();
    assert!(!selection.contains("Pump1"));

    selection.toggle("Pump1");
    assert!(selection.contains("Pump1"));
    assert_eq!(selection.len(), 1);

    selection.toggle("Pump1");
    assert!(!selection.contains("Pump1"));
    assert!(selection.is_empty());
}

#[test]
fn double_toggle_restores_membership_for_any_prior_state() {
    let mut selection = SelectionSet::new();
    selection.toggle("kept");

    for name in ["kept", "other"] {
        let before = selection.contains(name);
        selection.toggle(name);
        selection.toggle(name);
        assert_eq!(selection.contains(name), before, "involution broken for '{name}'");
    }
}

#[test]
fn names_toggle_independently() {
    let mut selection = SelectionSet::new();
    selection.toggle("a");
    selection.toggle("b");
    selection.toggle("a");
    assert!(!selection.contains("a"));
    assert!(selection.contains("b"));
    assert_eq!(selection.len(), 1);
}
