use keypress::inverse::{Keyboard, MoveDown, MoveLeft, MoveUp, PressKey};
use keypress::{Direction, Signal};
use tracing_subscriber::EnvFilter;

fn main() -> keypress::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut target = PressKey::with_slot(|signal: Signal| {
        if let Signal::Pressed(direction) = signal {
            println!("Key {direction} Pressed");
        }
    });
    let mut keyboard = Keyboard::builder()
        .bind(Direction::Up, MoveUp)
        .bind(Direction::Down, MoveDown)
        .bind(Direction::Left, MoveLeft)
        .connect(|signal: Signal| {
            if let Signal::Undo(command) = signal {
                println!("Undoing {command}");
            }
        })
        .build();

    print!("{}", keyboard.describe());

    keyboard.press(&mut target, Direction::Up)?;
    keyboard.undo(&mut target)?;
    keyboard.press(&mut target, Direction::Left)?;
    keyboard.undo(&mut target)?;

    print!("{}", keyboard.describe());
    Ok(())
}
