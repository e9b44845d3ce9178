pub mod session_state;
pub mod ui_state;

pub use session_state::*;
pub use ui_state::*;
