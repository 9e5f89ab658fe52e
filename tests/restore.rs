use keypress::restore::{Keyboard, MoveDown, MoveLeft, MoveRight, MoveUp, PressKey};
use keypress::{Direction, Error, Signal};
use std::sync::mpsc::{self, Receiver, Sender};

const UP: Option<Direction> = Some(Direction::Up);
const DOWN: Option<Direction> = Some(Direction::Down);
const LEFT: Option<Direction> = Some(Direction::Left);
const RIGHT: Option<Direction> = Some(Direction::Right);

type Target = PressKey<Sender<Signal>>;

fn setup() -> (Target, Keyboard<Target, Sender<Signal>>, Receiver<Signal>) {
    let (sender, receiver) = mpsc::channel();
    let target = PressKey::with_slot(sender.clone());
    let keyboard = Keyboard::builder()
        .bind(UP, MoveUp::new())
        .bind(DOWN, MoveDown::new())
        .bind(LEFT, MoveLeft::new())
        .connect(sender)
        .build();
    (target, keyboard, receiver)
}

#[test]
fn dispatch_sets_current_direction() {
    let (mut target, mut keyboard, _receiver) = setup();
    keyboard.bind(RIGHT, MoveRight::new()).unwrap();
    for direction in Direction::ALL {
        keyboard.press(&mut target, Some(direction)).unwrap();
        assert_eq!(target.current(), Some(direction));
        assert_eq!(keyboard.last(), Some(Some(direction)));
    }
}

#[test]
fn undo_first_press_restores_nothing() {
    let (mut target, mut keyboard, receiver) = setup();
    keyboard.press(&mut target, UP).unwrap();
    assert_eq!(keyboard.undo(&mut target), Ok(None));
    assert_eq!(
        receiver.try_iter().collect::<Vec<_>>(),
        [Signal::Pressed(Direction::Up), Signal::Restore(None)]
    );
    // The sentinel is bound to NoCommand, so the direction stays put.
    assert_eq!(target.current(), UP);
    assert_eq!(keyboard.last(), Some(None));
}

#[test]
fn undo_restores_previous_then_toggles() {
    let (mut target, mut keyboard, receiver) = setup();
    keyboard.press(&mut target, UP).unwrap();
    keyboard.press(&mut target, LEFT).unwrap();
    assert_eq!(target.current(), LEFT);

    assert_eq!(keyboard.undo(&mut target), Ok(UP));
    assert_eq!(target.current(), UP);
    assert_eq!(keyboard.last(), Some(UP));

    // Only one direction is remembered, so a second undo goes back to left
    // instead of further into the past.
    assert_eq!(keyboard.undo(&mut target), Ok(LEFT));
    assert_eq!(target.current(), LEFT);
    assert_eq!(keyboard.undo(&mut target), Ok(UP));
    assert_eq!(target.current(), UP);

    assert_eq!(
        receiver.try_iter().collect::<Vec<_>>(),
        [
            Signal::Pressed(Direction::Up),
            Signal::Pressed(Direction::Left),
            Signal::Restore(UP),
            Signal::Pressed(Direction::Up),
            Signal::Restore(LEFT),
            Signal::Pressed(Direction::Left),
            Signal::Restore(UP),
            Signal::Pressed(Direction::Up),
        ]
    );
}

#[test]
fn unbound_key_is_inert() {
    let (mut target, mut keyboard, receiver) = setup();
    keyboard.press(&mut target, DOWN).unwrap();
    keyboard.press(&mut target, RIGHT).unwrap();
    assert_eq!(target.current(), DOWN);
    assert_eq!(
        receiver.try_iter().collect::<Vec<_>>(),
        [Signal::Pressed(Direction::Down)]
    );
    // NoCommand captured nothing.
    assert_eq!(keyboard.undo(&mut target), Ok(None));
    assert_eq!(target.current(), DOWN);
}

#[test]
fn undo_before_press() {
    let (mut target, mut keyboard, receiver) = setup();
    assert_eq!(keyboard.undo(&mut target), Err(Error::NothingToUndo));
    assert_eq!(receiver.try_iter().count(), 0);
    assert_eq!(target.current(), None);
}

#[test]
fn restore_to_unbound_direction() {
    let (mut target, mut keyboard, _receiver) = setup();
    keyboard.bind(RIGHT, MoveRight::new()).unwrap();
    keyboard.press(&mut target, RIGHT).unwrap();
    keyboard.press(&mut target, UP).unwrap();
    keyboard.unbind(RIGHT).unwrap();
    assert_eq!(keyboard.undo(&mut target), Ok(RIGHT));
    // Right is no longer bound, nothing is pressed.
    assert_eq!(target.current(), UP);
    assert_eq!(keyboard.last(), Some(RIGHT));
}

#[test]
fn undo_after_rebinding_the_last_key() {
    let (mut target, mut keyboard, receiver) = setup();
    keyboard.press(&mut target, UP).unwrap();
    keyboard.press(&mut target, LEFT).unwrap();
    keyboard.bind(LEFT, MoveRight::new()).unwrap();

    // The replaced command still knows that up was active before it.
    assert_eq!(keyboard.undo(&mut target), Ok(UP));
    assert_eq!(target.current(), UP);
    assert_eq!(keyboard.last(), Some(UP));
    assert_eq!(
        receiver.try_iter().collect::<Vec<_>>(),
        [
            Signal::Pressed(Direction::Up),
            Signal::Pressed(Direction::Left),
            Signal::Restore(UP),
            Signal::Pressed(Direction::Up),
        ]
    );

    keyboard.press(&mut target, LEFT).unwrap();
    assert_eq!(target.current(), RIGHT);
}

#[test]
fn undo_after_unbinding_the_last_key() {
    let (mut target, mut keyboard, _receiver) = setup();
    keyboard.press(&mut target, UP).unwrap();
    keyboard.press(&mut target, LEFT).unwrap();
    keyboard.unbind(LEFT).unwrap();

    assert_eq!(keyboard.undo(&mut target), Ok(UP));
    assert_eq!(target.current(), UP);
    assert_eq!(keyboard.last(), Some(UP));

    // Left is unbound now, so restoring it presses nothing.
    assert_eq!(keyboard.undo(&mut target), Ok(LEFT));
    assert_eq!(target.current(), UP);
}
