//! Stable keys let the window track the identity of a row across two frames:
//! a row with the same key and parent as a row of the last frame is the same
//! row, whatever its position.

use ahash::AHashMap;

/// Abstract all builtin key types into a same type.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Key {
  Kusize(usize),
  Ku8(u64),
  Ki8(i64),
  Kbool(bool),
  Kchar(char),
  Kstring(String),
}

macro_rules! from_key_impl {
  ($($ty:ty : $var:ident),+) => {
    $(
      impl From<$ty> for Key {
        #[inline]
        fn from(v: $ty) -> Self { Key::$var(v.into()) }
      }
    )+
  };
}

from_key_impl!(
  usize: Kusize,
  u64: Ku8,
  i64: Ki8,
  bool: Kbool,
  char: Kchar,
  String: Kstring,
  &str: Kstring
);

/// How the keyed rows of a new frame relate to the keyed rows of the frame
/// before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyDiff {
  /// keys present now but not in the last frame.
  pub entered: usize,
  /// keys present in both frames.
  pub reused: usize,
  /// keys of the last frame that are gone.
  pub left: usize,
}

// Multiset diff: duplicate keys are tolerated in a frame, every occurrence
// counts once.
pub(crate) fn diff_keys(prev: &[Key], next: &[Key]) -> KeyDiff {
  let mut remaining: AHashMap<&Key, usize> = AHashMap::new();
  for k in prev {
    *remaining.entry(k).or_default() += 1;
  }

  let mut diff = KeyDiff::default();
  for k in next {
    match remaining.get_mut(k) {
      Some(n) if *n > 0 => {
        *n -= 1;
        diff.reused += 1;
      }
      _ => diff.entered += 1,
    }
  }
  diff.left = remaining.values().sum();
  diff
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn key_from() {
    assert_eq!(Key::from(1usize), Key::Kusize(1));
    assert_eq!(Key::from("cabbage"), Key::Kstring("cabbage".into()));
    assert_ne!(Key::from(1usize), Key::from(1u64));
  }

  #[test]
  fn diff() {
    let prev = [Key::from(1usize), Key::from(2usize), Key::from(3usize)];
    let next = [Key::from(2usize), Key::from(3usize), Key::from(4usize)];
    assert_eq!(diff_keys(&prev, &next), KeyDiff { entered: 1, reused: 2, left: 1 });
    assert_eq!(diff_keys(&[], &prev), KeyDiff { entered: 3, reused: 0, left: 0 });
  }

  #[test]
  fn diff_counts_duplicate_keys() {
    let prev = [Key::from(1usize), Key::from(1usize), Key::from(2usize)];
    let next = [Key::from(1usize), Key::from(2usize), Key::from(2usize)];
    assert_eq!(diff_keys(&prev, &next), KeyDiff { entered: 1, reused: 2, left: 1 });
  }
}
