use super::*;

#[derive(Debug, PartialEq)]
struct Dummy(u8);

#[test]
fn default_slot_is_pending() {
    let slot = ControllerSlot::<Dummy>::default();
    assert!(matches!(slot, ControllerSlot::Pending));
    assert!(!slot.is_ready());
}

#[test]
fn pending_slot_reports_not_initialized() {
    let mut slot = ControllerSlot::<Dummy>::Pending;
    assert_eq!(slot.get_mut().unwrap_err(), RouterError::NotInitialized);
    assert!(slot.get().is_none());
}

#[test]
fn failed_slot_reports_reason() {
    let mut slot = ControllerSlot::<Dummy>::Failed("no adapter".into());
    assert_eq!(slot.get_mut().unwrap_err(), RouterError::InitFailed("no adapter".into()));
    assert!(!slot.is_ready());
}

#[test]
fn ready_slot_lends_controller() {
    let mut slot = ControllerSlot::Ready(Dummy(1));
    assert!(slot.is_ready());
    slot.get_mut().unwrap().0 = 9;
    assert_eq!(slot.get(), Some(&Dummy(9)));
}

#[test]
fn not_initialized_message() {
    assert_eq!(RouterError::NotInitialized.to_string(), "controller not initialized");
}
