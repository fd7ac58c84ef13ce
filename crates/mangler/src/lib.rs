// crates/mangler/src/lib.rs

//! Maps arbitrary Unicode names onto valid C identifiers.
//!
//! Every mangled name starts with [`MANGLE_PREFIX`]. Characters that are not
//! legal in a C identifier are written as `__u<decimal code point>`, and the
//! three reserved sequences `__u`, `__i` and `__s` are escaped with a trailing
//! `E` so that they can never collide with generated escapes.

use std::fmt::Write;

/// Prefix carried by every mangled name.
pub const MANGLE_PREFIX: &str = "__s";

/// Sequences that would be ambiguous with generated output if copied through.
const RESERVED_SEQUENCES: [&str; 3] = ["__u", "__i", "__s"];

/// Mangles `name` into a C identifier.
///
/// The first character must be a letter or `_`; later characters may also be
/// ASCII digits. Anything else is escaped.
///
/// ```
/// assert_eq!(mangler::mangle("dup"), "__sdup");
/// assert_eq!(mangler::mangle("⇈"), "__s__u8648");
/// ```
pub fn mangle(name: &str) -> String {
    let mut mangled = String::from(MANGLE_PREFIX);
    let mut rest = name;
    let mut at_start = true;

    while !rest.is_empty() {
        if let Some(reserved) = RESERVED_SEQUENCES.iter().find(|seq| rest.starts_with(**seq)) {
            mangled.push_str(reserved);
            mangled.push('E');
            rest = &rest[reserved.len()..];
            at_start = false;
            continue;
        }

        let mut chars = rest.chars();
        let Some(c) = chars.next() else { break };
        if is_permitted(c, at_start) {
            mangled.push(c);
        } else {
            // Writing into a String cannot fail.
            let _ = write!(mangled, "__u{}", c as u32);
        }
        rest = chars.as_str();
        at_start = false;
    }

    mangled
}

fn is_permitted(c: char, at_start: bool) -> bool {
    c.is_ascii_alphabetic() || c == '_' || (!at_start && c.is_ascii_digit())
}
