
// Built-in 5x7 bitmap glyphs for the printable ASCII range, drawn at a
// fixed integer pixel scale. Only used when no scalable font can be found.

use image::{Rgb, RgbImage};


const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

// one blank column between glyphs
const TRACKING: u32 = 1;

// fixed on-screen scale: each glyph bit covers a PX x PX block
const PX: u32 = 2;


pub fn measure(text: &str) -> (u32, u32) {
	let n = text.chars().count() as u32;
	if n == 0 {
		return (0, 0);
	}
	(n*(GLYPH_WIDTH + TRACKING)*PX - TRACKING*PX, GLYPH_HEIGHT*PX)
}


pub fn draw(img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>, text: &str) {
	let mut cursor_x = x;
	for c in text.chars() {
		draw_glyph(img, cursor_x, y, color, c);
		cursor_x += (GLYPH_WIDTH + TRACKING)*PX;
	}
}


fn draw_glyph(img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>, c: char) {
	let rows = rows_for(c);
	for (gy, row) in rows.iter().enumerate() {
		for gx in 0 .. GLYPH_WIDTH {
			// bit 4 is the leftmost pixel of the row
			if row & (0x10 >> gx) != 0 {
				blit(img, x + gx*PX, y + (gy as u32)*PX, color);
			}
		}
	}
}


fn blit(img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>) {
	for dy in 0 .. PX {
		for dx in 0 .. PX {
			let px = x + dx;
			let py = y + dy;
			if px < img.width() && py < img.height() {
				img.put_pixel(px, py, color);
			}
		}
	}
}


fn rows_for(c: char) -> &'static [u8; 7] {
	let i = (c as usize).wrapping_sub(' ' as usize);
	match GLYPHS.get(i) {
		Some(rows) => rows,
		// anything outside the table renders as '?'
		None => &GLYPHS[('?' as usize) - (' ' as usize)]
	}
}


const GLYPHS: [[u8; 7]; 95] = [
	[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // space
	[0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04], // !
	[0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00], // "
	[0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A], // #
	[0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04], // $
	[0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03], // %
	[0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D], // &
	[0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00], // '
	[0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02], // (
	[0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08], // )
	[0x00, 0x04, 0x15, 0x0E, 0x15, 0x04, 0x00], // *
	[0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // +
	[0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08], // ,
	[0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // -
	[0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C], // .
	[0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00], // /
	[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
	[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
	[0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
	[0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
	[0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
	[0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
	[0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
	[0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
	[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
	[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
	[0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00], // :
	[0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x08], // ;
	[0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // <
	[0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // =
	[0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // >
	[0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // ?
	[0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E], // @
	[0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11], // A
	[0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
	[0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
	[0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
	[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
	[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
	[0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
	[0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
	[0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
	[0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
	[0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
	[0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
	[0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
	[0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
	[0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
	[0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
	[0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
	[0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
	[0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
	[0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
	[0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
	[0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
	[0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
	[0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
	[0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
	[0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
	[0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // [
	[0x00, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00], // backslash
	[0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ]
	[0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // ^
	[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // _
	[0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00], // `
	[0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F], // a
	[0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E], // b
	[0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E], // c
	[0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F], // d
	[0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E], // e
	[0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08], // f
	[0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E], // g
	[0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11], // h
	[0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E], // i
	[0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C], // j
	[0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12], // k
	[0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // l
	[0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11], // m
	[0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11], // n
	[0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E], // o
	[0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10], // p
	[0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01], // q
	[0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10], // r
	[0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E], // s
	[0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06], // t
	[0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D], // u
	[0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04], // v
	[0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A], // w
	[0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11], // x
	[0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E], // y
	[0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F], // z
	[0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02], // {
	[0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // |
	[0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08], // }
	[0x00, 0x00, 0x08, 0x15, 0x02, 0x00, 0x00], // ~
];
