use super::*;

#[test]
fn null_notifier_swallows_signals() {
    NullNotifier.slide_changed("s1");
}

#[test]
fn recording_notifier_keeps_signal_order() {
    let notifier = RecordingNotifier::new();
    notifier.slide_changed("a");
    notifier.slide_changed("b");
    notifier.slide_changed("a");
    assert_eq!(notifier.events(), vec!["a", "b", "a"]);
}

#[test]
fn notifier_is_usable_behind_a_trait_object() {
    let notifier = RecordingNotifier::new();
    let dyn_ref: &dyn ChangeNotifier = &notifier;
    dyn_ref.slide_changed("s1");
    assert_eq!(notifier.events(), vec!["s1"]);
}
