pub mod clock;
pub mod countdown;
pub mod updater;
pub mod window;
