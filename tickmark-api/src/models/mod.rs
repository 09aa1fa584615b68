mod alarm;
mod history;
mod item;

pub use alarm::*;
pub use history::*;
pub use item::*;
