//! hand drawn character bitmaps

#[rustfmt::skip]
pub static LETTER_H: [u8; 16] = [
    0x00, // ........
    0x00, // ........
    0xc6, // ##...##.
    0xc6, // ##...##.
    0xc6, // ##...##.
    0xc6, // ##...##.
    0xfe, // #######.
    0xc6, // ##...##.
    0xc6, // ##...##.
    0xc6, // ##...##.
    0xc6, // ##...##.
    0xc6, // ##...##.
    0x00, // ........
    0x00, // ........
    0x00, // ........
    0x00, // ........
];

/// A single scanline with the bit pattern `#.##....`.
#[rustfmt::skip]
pub static SINGLE_ROW: [u8; 16] = [
    0xb0, // #.##....
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Every other pixel set, alternating per scanline.
#[rustfmt::skip]
pub static CHECKER: [u8; 16] = [
    0xaa, 0x55, 0xaa, 0x55, 0xaa, 0x55, 0xaa, 0x55,
    0xaa, 0x55, 0xaa, 0x55, 0xaa, 0x55, 0xaa, 0x55,
];
