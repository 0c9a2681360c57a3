//! Letter sounds spoken when a tile is placed

use crate::core::Letter;

const LETTER_SOUNDS: [&str; 26] = [
    "ah", "buh", "kuh", "duh", "eh", "fff", "guh", "huh", "ih", "juh", "kuh", "lll", "mmm", "nnn",
    "oh", "puh", "kwuh", "rrr", "sss", "tuh", "uh", "vvv", "wuh", "ks", "yuh", "zzz",
];

/// The phonics sound for a letter, e.g. `c` -> "kuh"
#[must_use]
pub fn letter_sound(letter: Letter) -> &'static str {
    LETTER_SOUNDS[letter.index()]
}
