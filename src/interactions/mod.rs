//! The view-state layer shared across sections.
//!
//! Three small state machines drive every animation on the page:
//!
//! - [`reveal`] - one-shot "has entered viewport" tracking behind an
//!   IntersectionObserver, fail-open when the API is unavailable
//! - [`counter`] - the count-up sequence used by the stats band
//! - [`accordion`] - single-open-index selection used by the FAQ
//!
//! Each machine is plain data with no DOM dependency, so the timing and
//! transition contracts are unit-tested on the host; the Leptos hooks and
//! components wrap them with scheduled callbacks that are cancelled on
//! unmount. No state is shared between component instances.

pub mod accordion;
pub mod counter;
pub mod reveal;

pub use accordion::AccordionState;
pub use counter::{format_grouped, AnimatedCounter, Countup, FRAME_INTERVAL_MS};
pub use reveal::{use_scroll_reveal, RevealOptions, RevealState};
