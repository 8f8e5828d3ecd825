//! Literal emitter: serializes an encoded image into a C source unit.
//!
//! The output shape is a compatibility contract with the consuming graphics
//! library: the preamble, the `<var>_map` array and the `lv_img_dsc_t`
//! initializer (field order included) must come out byte-for-byte stable.
//! Generation is a pure function of the encoded image, so regenerating from
//! unchanged input is byte-identical.

use std::fmt::Write as _;
use std::path::Path;

use crate::encode::EncodedImage;
use crate::{Error, Result};

/// Hex tokens emitted per line of array data.
const TOKENS_PER_LINE: usize = 16;

/// Include-selection and alignment-macro preamble expected at the top of
/// every generated unit. `LV_LVGL_H_INCLUDE_SIMPLE` is only defined when the
/// surrounding build has not defined it already; same for the alignment
/// attribute macro.
const PREAMBLE: &str = r##"#ifdef __has_include
    #if __has_include("lvgl.h")
        #ifndef LV_LVGL_H_INCLUDE_SIMPLE
            #define LV_LVGL_H_INCLUDE_SIMPLE
        #endif
    #endif
#endif

#if defined(LV_LVGL_H_INCLUDE_SIMPLE)
    #include "lvgl.h"
#else
    #include "lvgl/lvgl.h"
#endif

#ifndef LV_ATTRIBUTE_MEM_ALIGN
#define LV_ATTRIBUTE_MEM_ALIGN
#endif

"##;

/// Render the complete C source unit for an encoded image.
pub fn generate_c_source(image: &EncodedImage) -> String {
    let mut out = String::from(PREAMBLE);
    match &image.alpha {
        Some(alpha) => emit_byte_array(&mut out, image, alpha),
        None => emit_word_array(&mut out, image),
    }
    emit_descriptor(&mut out, image);
    out
}

/// Write a fully-buffered source unit to `path`.
///
/// The text is written in one call so a failure never leaves a
/// partially-formatted artifact for a downstream build to pick up.
pub fn write_c_source(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .map_err(|e| Error::WriteError(format!("{}: {}", path.display(), e)))
}

/// True when `name` is usable as a C identifier for the emitted symbols.
pub fn is_valid_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

// uint16_t array, one token per packed word.
fn emit_word_array(out: &mut String, image: &EncodedImage) {
    let _ = writeln!(
        out,
        "const LV_ATTRIBUTE_MEM_ALIGN LV_ATTRIBUTE_LARGE_CONST uint16_t {}[] = {{",
        image.descriptor.map_symbol()
    );
    for (i, word) in image.color.iter().enumerate() {
        if i % TOKENS_PER_LINE == 0 {
            out.push_str("    ");
        }
        let _ = write!(out, "0x{:04x}, ", word);
        if (i + 1) % TOKENS_PER_LINE == 0 {
            out.push('\n');
        }
    }
    if image.color.len() % TOKENS_PER_LINE != 0 {
        out.push('\n');
    }
    out.push_str("};\n\n");
}

// uint8_t array: color words split low-byte-first, then the alpha plane,
// emitted as one concatenated stream with a single running wrap counter.
fn emit_byte_array(out: &mut String, image: &EncodedImage, alpha: &[u8]) {
    let _ = writeln!(
        out,
        "const LV_ATTRIBUTE_MEM_ALIGN LV_ATTRIBUTE_LARGE_CONST uint8_t {}[] = {{",
        image.descriptor.map_symbol()
    );

    let mut bytes = Vec::with_capacity(image.descriptor.data_size);
    for word in &image.color {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    bytes.extend_from_slice(alpha);

    for (i, b) in bytes.iter().enumerate() {
        if i % TOKENS_PER_LINE == 0 {
            out.push_str("    ");
        }
        let _ = write!(out, "0x{:02x}, ", b);
        if (i + 1) % TOKENS_PER_LINE == 0 {
            out.push('\n');
        }
    }
    if bytes.len() % TOKENS_PER_LINE != 0 {
        out.push('\n');
    }
    out.push_str("};\n\n");
}

fn emit_descriptor(out: &mut String, image: &EncodedImage) {
    let desc = &image.descriptor;
    let _ = writeln!(out, "const lv_img_dsc_t {} = {{", desc.var_name);
    let _ = writeln!(out, "    .header.cf = {},", desc.color_format.c_name());
    let _ = writeln!(out, "    .header.always_zero = 0,");
    let _ = writeln!(out, "    .header.reserved = 0,");
    let _ = writeln!(out, "    .header.w = {},", desc.width);
    let _ = writeln!(out, "    .header.h = {},", desc.height);
    let _ = writeln!(out, "    .data_size = {},", desc.data_size);
    let _ = writeln!(out, "    .data = (uint8_t *)({}),", desc.map_symbol());
    out.push_str("};\n");
}
