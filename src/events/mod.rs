pub mod cursor;
pub mod drag;
pub mod pointer;
pub mod sound;
