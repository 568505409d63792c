use super::*;

fn order(ids: &[&str]) -> LayerOrder {
    ids.iter().copied().collect()
}

fn ids(order: &LayerOrder) -> Vec<&str> {
    order.iter().collect()
}

#[test]
fn test_move_up_swaps_with_predecessor() {
    let mut o = order(&["A", "B", "C"]);

    assert!(o.move_up("B"));

    assert_eq!(ids(&o), vec!["B", "A", "C"]);
}

#[test]
fn test_move_up_on_first_is_noop() {
    let mut o = order(&["A", "B", "C"]);

    assert!(!o.move_up("A"));

    assert_eq!(ids(&o), vec!["A", "B", "C"]);
}

#[test]
fn test_move_down_on_last_is_noop() {
    let mut o = order(&["A", "B", "C"]);

    assert!(!o.move_down("C"));

    assert_eq!(ids(&o), vec!["A", "B", "C"]);
}

#[test]
fn test_move_down_swaps_with_successor() {
    let mut o = order(&["A", "B", "C"]);

    assert!(o.move_down("A"));

    assert_eq!(ids(&o), vec!["B", "A", "C"]);
}

#[test]
fn test_move_unknown_id_is_noop() {
    let mut o = order(&["A", "B"]);

    assert!(!o.move_up("X"));
    assert!(!o.move_down("X"));

    assert_eq!(ids(&o), vec!["A", "B"]);
}

#[test]
fn test_drag_down_inserts_after_target() {
    // [B, A, C]: A über C → abwärts → nach C
    let mut o = order(&["B", "A", "C"]);

    assert_eq!(o.placement_for("A", "C"), Some(DropPlacement::After));
    assert!(o.drop_onto("A", "C"));

    assert_eq!(ids(&o), vec!["B", "C", "A"]);
}

#[test]
fn test_drag_up_inserts_before_target() {
    let mut o = order(&["A", "B", "C", "D"]);

    assert_eq!(o.placement_for("D", "B"), Some(DropPlacement::Before));
    assert!(o.drop_onto("D", "B"));

    assert_eq!(ids(&o), vec!["A", "D", "B", "C"]);
}

#[test]
fn test_drop_on_self_or_missing_target_is_noop() {
    let mut o = order(&["A", "B", "C"]);

    assert!(!o.drop_onto("B", "B"));
    assert!(!o.drop_onto("B", "missing"));
    assert!(!o.drop_onto("missing", "B"));

    assert_eq!(ids(&o), vec!["A", "B", "C"]);
}

#[test]
fn test_move_to_adjacent_position_reports_unchanged() {
    let mut o = order(&["A", "B", "C"]);

    // A steht bereits direkt vor B
    assert!(!o.move_to("A", "B", DropPlacement::Before));

    assert_eq!(ids(&o), vec!["A", "B", "C"]);
}

#[test]
fn test_bottom_to_top_is_reverse_of_ui_order() {
    let o = order(&["top", "middle", "bottom"]);

    assert_eq!(o.bottom_to_top(), vec!["bottom", "middle", "top"]);
}

#[test]
fn test_push_rejects_duplicates() {
    let mut o = order(&["A"]);

    assert!(!o.push("A"));
    assert!(o.push("B"));

    assert_eq!(ids(&o), vec!["A", "B"]);
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut o = order(&["A", "B", "C", "D"]);

    assert!(o.remove("B"));
    assert!(!o.remove("B"));

    assert_eq!(ids(&o), vec!["A", "C", "D"]);
}

#[test]
fn test_equality_depends_on_order() {
    assert_ne!(order(&["A", "B"]), order(&["B", "A"]));
    assert_eq!(order(&["A", "B"]), order(&["A", "B"]));
}

#[test]
fn test_random_move_sequence_keeps_id_set() {
    let mut o = order(&["A", "B", "C", "D", "E"]);
    let names = ["A", "B", "C", "D", "E"];

    // Deterministische Pseudo-Zufallsfolge (LCG)
    let mut seed: u32 = 17;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let id = names[(seed >> 16) as usize % names.len()];
        if seed & 1 == 0 {
            o.move_up(id);
        } else {
            o.move_down(id);
        }
    }

    assert_eq!(o.len(), names.len());
    let mut sorted = ids(&o);
    sorted.sort_unstable();
    assert_eq!(sorted, names.to_vec());
}
