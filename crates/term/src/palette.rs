//! Tile colors.
//!
//! The classic 2048 palette: light tiles use dark text, everything from 8 up uses
//! light text. Values above 2048 reuse the 2048 colors.

use crate::fb::{CellStyle, Rgb};
use crate::types::Tile;

pub const BORDER: Rgb = Rgb::new(188, 172, 158);
pub const DARK_TEXT: Rgb = Rgb::new(124, 116, 107);
pub const LIGHT_TEXT: Rgb = Rgb::new(251, 247, 241);
pub const EMPTY: Rgb = Rgb::new(204, 193, 178);

/// Background color for a tile value.
pub fn tile_background(value: Tile) -> Rgb {
    match value {
        0 => EMPTY,
        2 => Rgb::new(236, 225, 215),
        4 => Rgb::new(237, 223, 199),
        8 => Rgb::new(242, 177, 120),
        16 => Rgb::new(245, 149, 98),
        32 => Rgb::new(246, 124, 94),
        64 => Rgb::new(246, 94, 60),
        128 => Rgb::new(238, 208, 114),
        256 => Rgb::new(238, 204, 95),
        512 => Rgb::new(236, 200, 79),
        1024 => Rgb::new(238, 196, 64),
        _ => Rgb::new(226, 191, 73),
    }
}

/// Text color for a tile value.
pub fn tile_text(value: Tile) -> Rgb {
    match value {
        0 => EMPTY,
        2 | 4 => DARK_TEXT,
        _ => LIGHT_TEXT,
    }
}

pub fn tile_style(value: Tile) -> CellStyle {
    CellStyle::new(tile_text(value), tile_background(value)).bold()
}
