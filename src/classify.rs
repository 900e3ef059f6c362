//! Code point classification used by the deletion resolver.
//!
//! Pure predicates over raw `u32` code points. Raw values rather than
//! `char` so that unpaired surrogates read out of a UTF-16 buffer can be
//! classified too (they match nothing here).

pub const LINE_FEED: u32 = 0x0A;
pub const CARRIAGE_RETURN: u32 = 0x0D;
pub const COMBINING_ENCLOSING_KEYCAP: u32 = 0x20E3;
pub const ZERO_WIDTH_JOINER: u32 = 0x200D;

/// Variation selectors, including the Mongolian free variation selectors
/// and the supplementary block.
pub fn is_variation_selector(cp: u32) -> bool {
    matches!(cp, 0x180B..=0x180D | 0xFE00..=0xFE0F | 0xE0100..=0xE01EF)
}

/// Regional indicator symbols; two of them form a flag.
pub fn is_regional_indicator(cp: u32) -> bool {
    matches!(cp, 0x1F1E6..=0x1F1FF)
}

/// Skin tone modifiers.
pub fn is_emoji_modifier(cp: u32) -> bool {
    matches!(cp, 0x1F3FB..=0x1F3FF)
}

/// Characters that form a keycap when followed by U+20E3.
pub fn is_keycap_base(cp: u32) -> bool {
    matches!(cp, 0x30..=0x39 | 0x23 | 0x2A)
}

/// Characters carrying the Emoji property.
///
/// The pictographic planes are covered as whole blocks; the unassigned
/// holes inside them only ever sit next to other pictographs, where joining
/// one code point too many is harmless for deletion purposes. The BMP
/// entries are enumerated individually because their blocks mix emoji with
/// ordinary symbols.
pub fn is_emoji(cp: u32) -> bool {
    matches!(cp,
        0x23 | 0x2A | 0x30..=0x39
        | 0xA9 | 0xAE
        | 0x203C | 0x2049
        | 0x2122 | 0x2139
        | 0x2194..=0x2199 | 0x21A9..=0x21AA
        | 0x231A..=0x231B | 0x2328 | 0x23CF | 0x23E9..=0x23F3 | 0x23F8..=0x23FA
        | 0x24C2
        | 0x25AA..=0x25AB | 0x25B6 | 0x25C0 | 0x25FB..=0x25FE
        | 0x2600..=0x2604 | 0x260E | 0x2611 | 0x2614..=0x2615 | 0x2618 | 0x261D
        | 0x2620 | 0x2622..=0x2623 | 0x2626 | 0x262A | 0x262E..=0x262F
        | 0x2638..=0x263A | 0x2640 | 0x2642 | 0x2648..=0x2653 | 0x265F..=0x2660
        | 0x2663 | 0x2665..=0x2666 | 0x2668 | 0x267B | 0x267E..=0x267F
        | 0x2692..=0x2697 | 0x2699 | 0x269B..=0x269C | 0x26A0..=0x26A1 | 0x26A7
        | 0x26AA..=0x26AB | 0x26B0..=0x26B1 | 0x26BD..=0x26BE | 0x26C4..=0x26C5
        | 0x26C8 | 0x26CE..=0x26CF | 0x26D1 | 0x26D3..=0x26D4 | 0x26E9..=0x26EA
        | 0x26F0..=0x26F5 | 0x26F7..=0x26FA | 0x26FD
        | 0x2702 | 0x2705 | 0x2708..=0x270D | 0x270F | 0x2712 | 0x2714 | 0x2716
        | 0x271D | 0x2721 | 0x2728 | 0x2733..=0x2734 | 0x2744 | 0x2747 | 0x274C
        | 0x274E | 0x2753..=0x2755 | 0x2757 | 0x2763..=0x2764 | 0x2795..=0x2797
        | 0x27A1 | 0x27B0 | 0x27BF
        | 0x2934..=0x2935
        | 0x2B05..=0x2B07 | 0x2B1B..=0x2B1C | 0x2B50 | 0x2B55
        | 0x3030 | 0x303D | 0x3297 | 0x3299
        | 0x1F004 | 0x1F0CF
        | 0x1F170..=0x1F171 | 0x1F17E..=0x1F17F | 0x1F18E | 0x1F191..=0x1F19A
        | 0x1F1E6..=0x1F1FF
        | 0x1F201..=0x1F202 | 0x1F21A | 0x1F22F | 0x1F232..=0x1F23A
        | 0x1F250..=0x1F251
        | 0x1F300..=0x1F5FF
        | 0x1F600..=0x1F64F
        | 0x1F680..=0x1F6FF
        | 0x1F7E0..=0x1F7EB | 0x1F7F0
        | 0x1F90C..=0x1F9FF
        | 0x1FA70..=0x1FAFF)
}

/// Characters that accept a skin tone modifier (Emoji_Modifier_Base).
pub fn is_emoji_modifier_base(cp: u32) -> bool {
    matches!(cp,
        0x261D | 0x26F9
        | 0x270A..=0x270D
        | 0x1F385 | 0x1F3C2..=0x1F3C4 | 0x1F3C7 | 0x1F3CA..=0x1F3CC
        | 0x1F442..=0x1F443 | 0x1F446..=0x1F450
        | 0x1F466..=0x1F478 | 0x1F47C | 0x1F481..=0x1F483 | 0x1F485..=0x1F487
        | 0x1F48F | 0x1F491 | 0x1F4AA
        | 0x1F574..=0x1F575 | 0x1F57A | 0x1F590 | 0x1F595..=0x1F596
        | 0x1F645..=0x1F647 | 0x1F64B..=0x1F64F
        | 0x1F6A3 | 0x1F6B4..=0x1F6B6 | 0x1F6C0 | 0x1F6CC
        | 0x1F90C | 0x1F90F | 0x1F918..=0x1F91F | 0x1F926 | 0x1F930..=0x1F939
        | 0x1F93C..=0x1F93E | 0x1F977
        | 0x1F9B5..=0x1F9B6 | 0x1F9B8..=0x1F9B9 | 0x1F9BB
        | 0x1F9CD..=0x1F9DD)
}

/// Whether the code point has a nonzero canonical combining class, i.e.
/// reorders under normalization and visually attaches to its base.
///
/// Covers the combining blocks of the major scripts plus the generic
/// combining-diacritics blocks; code points outside these ranges report
/// class zero.
pub fn has_nonzero_combining_class(cp: u32) -> bool {
    matches!(cp,
        0x0300..=0x036F
        | 0x0483..=0x0489
        | 0x0591..=0x05BD | 0x05BF | 0x05C1..=0x05C2 | 0x05C4..=0x05C5 | 0x05C7
        | 0x0610..=0x061A | 0x064B..=0x065F | 0x0670
        | 0x06D6..=0x06DC | 0x06DF..=0x06E4 | 0x06E7..=0x06E8 | 0x06EA..=0x06ED
        | 0x0711 | 0x0730..=0x074A
        | 0x07EB..=0x07F3
        | 0x0816..=0x0819 | 0x081B..=0x0823 | 0x0825..=0x0827 | 0x0829..=0x082D
        | 0x0859..=0x085B
        | 0x08E3..=0x08FF
        | 0x093C | 0x094D | 0x09BC | 0x09CD | 0x0A3C | 0x0A4D | 0x0ABC | 0x0ACD
        | 0x0B3C | 0x0B4D | 0x0BCD | 0x0C4D | 0x0C55..=0x0C56 | 0x0CBC | 0x0CCD
        | 0x0D4D | 0x0DCA
        | 0x0E38..=0x0E3A | 0x0E48..=0x0E4B
        | 0x0EB8..=0x0EB9 | 0x0EC8..=0x0ECB
        | 0x0F18..=0x0F19 | 0x0F35 | 0x0F37 | 0x0F39 | 0x0F71..=0x0F7D
        | 0x0F80..=0x0F84 | 0x0FC6
        | 0x1037 | 0x1039..=0x103A
        | 0x1A17..=0x1A18 | 0x1A60 | 0x1A75..=0x1A7C | 0x1A7F
        | 0x1AB0..=0x1ABD
        | 0x1B34 | 0x1B44 | 0x1B6B..=0x1B73
        | 0x1C37
        | 0x1CD0..=0x1CD2 | 0x1CD4..=0x1CE0 | 0x1CE2..=0x1CE8 | 0x1CED | 0x1CF4
        | 0x1DC0..=0x1DFF
        | 0x20D0..=0x20DC | 0x20E1 | 0x20E5..=0x20F0
        | 0x2CEF..=0x2CF1
        | 0x2D7F
        | 0x2DE0..=0x2DFF
        | 0x302A..=0x302F
        | 0x3099..=0x309A
        | 0xA66F | 0xA674..=0xA67D | 0xA69E..=0xA69F | 0xA6F0..=0xA6F1
        | 0xA8E0..=0xA8F1
        | 0xFB1E
        | 0xFE20..=0xFE2F
        | 0x101FD | 0x102E0 | 0x10376..=0x1037A
        | 0x10A0D | 0x10A0F | 0x10A38..=0x10A3A | 0x10A3F
        | 0x11046 | 0x1107F | 0x110B9..=0x110BA
        | 0x11100..=0x11102 | 0x11133..=0x11134 | 0x11173
        | 0x111C0 | 0x111CA
        | 0x11235..=0x11236
        | 0x1133C | 0x1134D | 0x11366..=0x1136C | 0x11370..=0x11374
        | 0x114C2..=0x114C3 | 0x115BF..=0x115C0 | 0x1163F | 0x116B6..=0x116B7
        | 0x1172B
        | 0x16AF0..=0x16AF4 | 0x16B30..=0x16B36
        | 0x1BC9E
        | 0x1D165..=0x1D169 | 0x1D16D..=0x1D172 | 0x1D17B..=0x1D182
        | 0x1D185..=0x1D18B | 0x1D1AA..=0x1D1AD | 0x1D242..=0x1D244
        | 0x1E000..=0x1E006 | 0x1E008..=0x1E018 | 0x1E01B..=0x1E021
        | 0x1E023..=0x1E024 | 0x1E026..=0x1E02A
        | 0x1E8D0..=0x1E8D6 | 0x1E944..=0x1E94A)
}
