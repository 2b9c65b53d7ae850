mod console;
mod hooks;
mod input;
mod output;

pub use console::Console;
pub use input::Input;
pub use output::Entry;
