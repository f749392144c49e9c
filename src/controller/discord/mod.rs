pub mod command;
pub mod emojify;
pub mod interaction;
pub mod roll;
