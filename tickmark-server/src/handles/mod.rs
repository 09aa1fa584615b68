mod alarm_handle;
mod clock_handle;
mod history_handle;
mod item_handle;

pub use alarm_handle::*;
pub use clock_handle::*;
pub use history_handle::*;
pub use item_handle::*;
