use keypress::restore::{Keyboard, MoveDown, MoveLeft, MoveUp, PressKey};
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
        .bind(Some(Direction::Up), MoveUp::new())
        .bind(Some(Direction::Down), MoveDown::new())
        .bind(Some(Direction::Left), MoveLeft::new())
        .connect(|signal: Signal| {
            if let Signal::Restore(direction) = signal {
                let name = direction.map_or("NONE", Direction::as_str);
                println!("Undoing to {name}");
            }
        })
        .build();

    print!("{}", keyboard.describe());

    keyboard.press(&mut target, Some(Direction::Up))?;
    keyboard.press(&mut target, Some(Direction::Left))?;
    keyboard.undo(&mut target)?;
    keyboard.undo(&mut target)?;
    println!("Current direction: {:?}", target.current());

    print!("{}", keyboard.describe());
    Ok(())
}
