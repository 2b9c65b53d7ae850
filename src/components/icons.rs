//! Centralized icon definitions.
//!
//! Maps semantic icon names to Lucide icons so views never name a glyph
//! directly.

use icondata::Icon;

pub const TERMINAL: Icon = icondata::LuTerminal;
pub const CHECK: Icon = icondata::LuCheck;
pub const PHILOSOPHY: Icon = icondata::LuBookOpen;
pub const PREVIOUS: Icon = icondata::LuChevronLeft;
pub const NEXT: Icon = icondata::LuChevronRight;
pub const RESTART: Icon = icondata::LuRotateCcw;
