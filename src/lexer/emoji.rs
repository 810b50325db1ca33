//! Emoji detection over extended grapheme clusters (`spec.md` §4.2).
//!
//! No crate in the retrieved corpus exposes Unicode emoji/general-category
//! properties, so the three disjunctive rules from the spec are each
//! implemented as a small codepoint-range check (see DESIGN.md).

/// `true` if `c`'s sole scalar has the "emoji presentation" property, i.e.
/// it renders as a pictograph by default rather than as a text-style glyph.
fn has_emoji_presentation(c: char) -> bool {
  matches!(c as u32,
    0x231A..=0x231B
    | 0x23E9..=0x23EC
    | 0x23F0
    | 0x23F3
    | 0x25FD..=0x25FE
    | 0x2614..=0x2615
    | 0x2648..=0x2653
    | 0x267F
    | 0x2693
    | 0x26A1
    | 0x26AA..=0x26AB
    | 0x26BD..=0x26BE
    | 0x26C4..=0x26C5
    | 0x26CE
    | 0x26D4
    | 0x26EA
    | 0x26F2..=0x26F3
    | 0x26F5
    | 0x26FA
    | 0x26FD
    | 0x2705
    | 0x270A..=0x270B
    | 0x2728
    | 0x274C
    | 0x274E
    | 0x2753..=0x2755
    | 0x2757
    | 0x2795..=0x2797
    | 0x27B0
    | 0x27BF
    | 0x2B1B..=0x2B1C
    | 0x2B50
    | 0x2B55
    | 0x1F000..=0x1FFFF
  )
}

/// `true` if `c` falls in one of the symbol-shaped blocks that correspond to
/// the Unicode `Other_Symbol` (`So`) general category.
fn is_other_symbol(c: char) -> bool {
  matches!(c as u32,
    0x00A9
    | 0x00AE
    | 0x2122
    | 0x2139
    | 0x2194..=0x21AA
    | 0x2300..=0x23FF
    | 0x25A0..=0x25FF
    | 0x2600..=0x27BF
    | 0x2900..=0x297F
    | 0x2B00..=0x2BFF
  )
}

/// Codepoints that, when present anywhere in a multi-scalar grapheme
/// cluster, mark it as an emoji sequence: the zero-width joiner used to
/// stitch multiple emoji into one glyph, and the text/emoji variation
/// selectors.
fn is_join_control_or_variation_selector(c: char) -> bool {
  matches!(c as u32, 0x200D | 0xFE0E..=0xFE0F)
}

/// `true` if `grapheme` (one extended grapheme cluster) should be treated as
/// an emoji for lexing purposes (`spec.md` §4.2):
///
/// - its sole scalar has emoji presentation, or is `Other_Symbol`; or
/// - it is made of multiple scalars and contains a join control or
///   variation selector; or
/// - it is made of multiple scalars and *all* of them have emoji
///   presentation.
pub fn is_emoji(grapheme: &str) -> bool {
  let mut chars = grapheme.chars();
  let first = match chars.next() {
    Some(c) => c,
    None => return false,
  };

  if chars.next().is_none() {
    return has_emoji_presentation(first) || is_other_symbol(first);
  }

  let scalars: Vec<char> = grapheme.chars().collect();
  if scalars.iter().copied().any(is_join_control_or_variation_selector) {
    return true;
  }
  scalars.iter().copied().all(has_emoji_presentation)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn single_scalar_emoji() {
    assert!(is_emoji("🌀"));
    assert!(is_emoji("🍪"));
    assert!(is_emoji("✨"));
  }

  #[test]
  fn plain_letters_are_not_emoji() {
    assert!(!is_emoji("a"));
    assert!(!is_emoji("Z"));
    assert!(!is_emoji("_"));
    assert!(!is_emoji("9"));
  }

  #[test]
  fn zwj_sequence_is_emoji() {
    // family: man + zwj + woman + zwj + girl
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    assert!(is_emoji(family));
  }

  #[test]
  fn variation_selector_sequence_is_emoji() {
    let heart_emoji_style = "\u{2764}\u{FE0F}";
    assert!(is_emoji(heart_emoji_style));
  }
}
