use super::*;

#[test]
fn keywords_select_in_lexicon_order() {
    let motifs = motifs_for_text("RADAR over a Grid, then loops");
    assert_eq!(
        motifs,
        vec![MotifKind::Orbit, MotifKind::GridPulse, MotifKind::Radar]
    );
}

#[test]
fn each_motif_is_picked_once() {
    let motifs = motifs_for_text("code rain matrix code");
    assert_eq!(motifs, vec![MotifKind::CodeRain]);
}

#[test]
fn versioned_loop_keywords_also_match_orbit() {
    let motifs = motifs_for_text("loops_v2 and loops v3");
    assert_eq!(
        motifs,
        vec![MotifKind::Orbit, MotifKind::ScatterDrift, MotifKind::ChaseRing]
    );
}

#[test]
fn aliases_map_to_the_same_motif() {
    assert_eq!(motifs_for_text("stars"), vec![MotifKind::Constellation]);
    assert_eq!(motifs_for_text("numbered"), vec![MotifKind::NumberList]);
    assert_eq!(motifs_for_text("scanlines"), vec![MotifKind::Scanlines]);
    assert_eq!(motifs_for_text("drift"), vec![MotifKind::ScatterDrift]);
    assert!(motifs_for_text("nothing here").is_empty());
}

#[test]
fn caption_trigger_clears_motifs() {
    let sel = Selection::from_text("grid radar text hello");
    assert!(sel.motifs.is_empty());
    assert_eq!(sel.caption.as_deref(), Some("grid radar text hello"));
    assert!(!sel.cursor);
}

#[test]
fn caption_prefix_is_stripped() {
    assert_eq!(caption_text("text Hello World").as_deref(), Some("Hello World"));
    assert_eq!(caption_text("  TEXT  spaced").as_deref(), Some(" spaced"));
    assert_eq!(caption_text("text").as_deref(), Some(""));
    assert_eq!(caption_text("Text").as_deref(), Some(""));
    assert_eq!(caption_text("context").as_deref(), Some("context"));
    assert_eq!(caption_text("hello"), None);
}

#[test]
fn caption_prefix_handles_non_ascii() {
    assert_eq!(caption_text("text héllo").as_deref(), Some("héllo"));
    assert_eq!(caption_text("té"), None);
}

#[test]
fn explicit_list_dedups_and_keeps_order() {
    let sel = Selection::from_motifs(&[MotifKind::Radar, MotifKind::Orbit, MotifKind::Radar]);
    assert_eq!(sel.motifs, vec![MotifKind::Radar, MotifKind::Orbit]);
}

#[test]
fn cursor_selection_stands_alone() {
    let sel = Selection::cursor();
    assert!(sel.cursor);
    assert!(sel.motifs.is_empty());
    assert_eq!(sel.describe(), vec!["cursor"]);
    assert!(Selection::default().is_empty());
}

#[test]
fn describe_lists_draw_order() {
    let sel = Selection::from_text("text hi");
    assert_eq!(sel.describe(), vec!["text-particles"]);
    let sel = Selection::from_text("orbit loop grid");
    assert_eq!(sel.describe(), vec!["orbit", "grid-pulse"]);
}
