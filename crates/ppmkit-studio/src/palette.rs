//! Named colors used by the demo scenes.

use ppmkit_engine::Color;

pub const WHITE: Color = Color::from_argb(0xFF_FFFFFF);
pub const RED: Color = Color::from_argb(0xFF_FF0000);
pub const ORANGE: Color = Color::from_argb(0xFF_FF8800);
pub const YELLOW: Color = Color::from_argb(0xFF_FFFF00);
pub const GREEN: Color = Color::from_argb(0xFF_008800);
pub const BLUE: Color = Color::from_argb(0xFF_0000FF);
pub const PURPLE: Color = Color::from_argb(0xFF_AA00FF);
pub const BLACK: Color = Color::from_argb(0xFF_000000);
