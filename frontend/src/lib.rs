pub use beeper::Beeper;
pub use screen::Screen;

mod beeper;
mod screen;
