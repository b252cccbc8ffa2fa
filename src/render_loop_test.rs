use super::*;

#[test]
fn new_loop_is_idle_at_zero() {
    let lp = RenderLoop::new(3);
    assert!(lp.is_idle());
    assert_eq!(lp.frames(), 0);
    assert_eq!(lp.budget(), 3);
}

#[test]
fn zero_budget_clamped_to_one() {
    let mut lp = RenderLoop::new(0);
    assert_eq!(lp.budget(), 1);
    assert!(!lp.advance());
}

#[test]
fn advance_requests_until_budget_reached() {
    let mut lp = RenderLoop::new(3);
    assert!(lp.advance());
    assert!(lp.advance());
    assert!(!lp.advance());
    assert_eq!(lp.frames(), 3);
}

#[test]
fn advance_clears_handle() {
    let mut lp = RenderLoop::new(3);
    lp.scheduled(FrameHandle(7));
    assert!(!lp.is_idle());
    lp.advance();
    assert!(lp.is_idle());
}

#[test]
fn scheduled_records_handle() {
    let mut lp = RenderLoop::new(3);
    lp.scheduled(FrameHandle(42));
    assert_eq!(lp.handle(), Some(FrameHandle(42)));
}

#[test]
fn reset_grants_fresh_budget() {
    let mut lp = RenderLoop::new(3);
    lp.advance();
    lp.advance();
    lp.reset();
    assert_eq!(lp.frames(), 0);
    assert!(lp.advance());
    assert!(lp.advance());
    assert!(!lp.advance());
}

#[test]
fn abandon_marks_idle() {
    let mut lp = RenderLoop::new(3);
    lp.scheduled(FrameHandle(1));
    lp.abandon();
    assert!(lp.is_idle());
}

#[test]
fn frames_saturate_instead_of_overflowing() {
    let mut lp = RenderLoop::new(3);
    lp.frames = u32::MAX;
    assert!(!lp.advance());
    assert_eq!(lp.frames(), u32::MAX);
}
