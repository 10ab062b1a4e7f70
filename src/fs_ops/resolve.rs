//! Collision-free destination naming.
//!
//! Pure functions: given a candidate filename and the set of names already
//! taken in the target directory, produce a name guaranteed to be unused.
//! No filesystem access here; the caller owns the taken-names set and keeps
//! it current as moves are decided.

use std::collections::HashSet;

/// First unused name for `original`: the name itself if free, otherwise
/// `name-1`, `name-2`, ... with the counter injected before the extension.
pub fn find_available_name(original: &str, taken: &HashSet<String>) -> String {
    // assume a free candidate turns up before i overflows
    let mut i: u64 = 1;
    let mut candidate = original.to_string();
    while taken.contains(&candidate) {
        candidate = inject_int(original, i);
        i += 1;
    }
    candidate
}

/// Insert `-<i>` between the base name and its extension.
///
/// A run of leading dots (hidden files) is not part of the base name; the
/// extension is the suffix starting at the last dot of what remains, or empty
/// when no dot remains.
///
/// `inject_int("foo.jpeg", 10)` is `"foo-10.jpeg"`;
/// `inject_int(".config.js", 32)` is `".config-32.js"`.
///
/// # Panics
///
/// Panics if `name` is empty or consists only of dots. Such names are outside
/// the supported domain and reaching here with one is a caller bug.
pub fn inject_int(name: &str, i: u64) -> String {
    let main = name.trim_start_matches('.');
    if main.is_empty() {
        panic!("unsupported file name '{name}'");
    }
    let dots = &name[..name.len() - main.len()];
    let (stem, ext) = match main.rfind('.') {
        Some(pos) => main.split_at(pos),
        None => (main, ""),
    };
    format!("{dots}{stem}-{i}{ext}")
}
