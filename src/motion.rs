//! Host-independent animation state.
//!
//! Everything here is plain data and pure transitions so it can be driven by
//! browser timers and observers in `app::motion`, and by unit tests natively.

mod float;
mod reveal;
mod scroll;
mod typing;

pub use float::{stagger, Entrance, FloatMotion, FloatPhase, MotionStyle, Timing};
pub use reveal::RevealState;
pub use scroll::{NavbarState, ScrollHub, ScrollSwitch, Subscription};
pub use typing::{CursorBlink, TypingSequence, TypingState, TYPING_DELAY};
