use keypress::{inverse, restore, Direction};

fn plain<K: keypress::Key, C: std::fmt::Display>(mut display: keypress::Display<'_, K, C>) -> String {
    #[cfg(feature = "colored")]
    display.colored(false);
    display.detailed(false).to_string()
}

#[test]
fn lists_every_key_once() {
    let mut keyboard = inverse::Keyboard::<inverse::PressKey>::new();
    keyboard.bind(Direction::Up, inverse::MoveUp).unwrap();
    keyboard.bind(Direction::Up, inverse::MoveUp).unwrap();
    keyboard.bind(Direction::Up, inverse::MoveDown).unwrap();
    keyboard.bind(Direction::Left, inverse::MoveLeft).unwrap();
    assert_eq!(keyboard.registry().len(), 4);
    assert_eq!(
        plain(keyboard.describe()),
        "---Commands---\nUP: KEY DOWN\nDOWN: No Command\nLEFT: KEY LEFT\nRIGHT: No Command\n"
    );
}

#[test]
fn marks_last_dispatched_key() {
    let mut target = inverse::PressKey::new();
    let mut keyboard = inverse::Keyboard::new();
    keyboard.bind(Direction::Left, inverse::MoveLeft).unwrap();
    keyboard.press(&mut target, Direction::Left).unwrap();
    let listing = plain(keyboard.describe());
    assert!(listing.contains("LEFT: KEY LEFT [LAST]"));
    assert_eq!(listing.matches("[LAST]").count(), 1);

    let mut describe = keyboard.describe();
    #[cfg(feature = "colored")]
    describe.colored(false);
    assert!(!describe.last(false).to_string().contains("[LAST]"));
}

#[test]
fn restore_lists_the_sentinel() {
    let mut target = restore::PressKey::new();
    let mut keyboard = restore::Keyboard::new();
    keyboard
        .bind(Some(Direction::Right), restore::MoveRight::new())
        .unwrap();
    keyboard.press(&mut target, Some(Direction::Right)).unwrap();
    keyboard.undo(&mut target).unwrap();

    let keys = keyboard
        .registry()
        .iter()
        .map(|(key, _)| key)
        .collect::<Vec<_>>();
    assert_eq!(keys, <Option<Direction> as keypress::Key>::ALL);
    assert_eq!(
        plain(keyboard.describe()),
        "---Commands---\nNONE: No Command [LAST]\nUP: No Command\nDOWN: No Command\nLEFT: No Command\nRIGHT: KEY RIGHT\n"
    );
}

#[cfg(feature = "chrono")]
#[test]
fn detailed_shows_timestamp() {
    let mut target = inverse::PressKey::new();
    let mut keyboard = inverse::Keyboard::new();
    keyboard.press(&mut target, Direction::Down).unwrap();
    let timestamp = keyboard.last_entry().unwrap().timestamp();
    let rfc2822 = timestamp.with_timezone(&chrono::Local).to_rfc2822();
    let mut describe = keyboard.describe();
    #[cfg(feature = "colored")]
    describe.colored(false);
    assert!(describe.to_string().contains(&rfc2822));
}
