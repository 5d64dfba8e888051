//! Named palette tokens.
//!
//! Tokens are `family.shade` (`gray.100`, `orange.500`) or a bare name
//! (`white`, `black`, `transparent`). Alpha families (`blackAlpha`,
//! `whiteAlpha`) share one RGB value and vary opacity by shade.

use crate::types::Rgba;

const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

const GRAY: [u32; 10] = [
    0xF7FAFC, 0xEDF2F7, 0xE2E8F0, 0xCBD5E0, 0xA0AEC0, 0x718096, 0x4A5568, 0x2D3748, 0x1A202C,
    0x171923,
];

const ORANGE: [u32; 10] = [
    0xFFFAF0, 0xFEEBC8, 0xFBD38D, 0xF6AD55, 0xED8936, 0xDD6B20, 0xC05621, 0x9C4221, 0x7B341E,
    0x652B19,
];

const YELLOW: [u32; 10] = [
    0xFFFFF0, 0xFEFCBF, 0xFAF089, 0xF6E05E, 0xECC94B, 0xD69E2E, 0xB7791F, 0x975A16, 0x744210,
    0x5F370E,
];

/// Opacity (0-255) of each alpha shade.
const ALPHA: [u8; 10] = [10, 15, 20, 41, 61, 92, 122, 163, 204, 235];

/// Look up a palette token. `None` for anything unknown.
pub fn lookup(token: &str) -> Option<Rgba> {
    let token = token.trim();
    match token {
        "white" => return Some(Rgba::WHITE),
        "black" => return Some(Rgba::BLACK),
        "transparent" => return Some(Rgba::TRANSPARENT),
        _ => {}
    }

    let (family, shade) = token.split_once('.')?;
    let shade: u16 = shade.parse().ok()?;
    let slot = SHADES.iter().position(|&s| s == shade)?;

    match family {
        "gray" => Some(Rgba::from_rgb_int(GRAY[slot])),
        "orange" => Some(Rgba::from_rgb_int(ORANGE[slot])),
        "yellow" => Some(Rgba::from_rgb_int(YELLOW[slot])),
        "blackAlpha" => Some(Rgba::new(0, 0, 0, ALPHA[slot])),
        "whiteAlpha" => Some(Rgba::new(255, 255, 255, ALPHA[slot])),
        _ => None,
    }
}
