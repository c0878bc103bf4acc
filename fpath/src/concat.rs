//! Path concatenation
//! 路径拼接

/// Path segment: a single string or a list of strings
/// 路径片段：单个字符串或字符串列表
#[derive(Debug, Clone, Copy)]
pub enum Seg<'a> {
  /// Single fragment / 单个片段
  Str(&'a str),
  /// Fragment list, expanded one level, items never flattened further
  /// 片段列表，展开一层，元素不再继续展开
  List(&'a [&'a str]),
}

impl<'a> From<&'a str> for Seg<'a> {
  #[inline]
  fn from(s: &'a str) -> Self {
    Self::Str(s)
  }
}

impl<'a> From<&'a String> for Seg<'a> {
  #[inline]
  fn from(s: &'a String) -> Self {
    Self::Str(s.as_str())
  }
}

impl<'a> From<&'a [&'a str]> for Seg<'a> {
  #[inline]
  fn from(li: &'a [&'a str]) -> Self {
    Self::List(li)
  }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Seg<'a> {
  #[inline]
  fn from(li: &'a [&'a str; N]) -> Self {
    Self::List(li)
  }
}

/// Join fragments with `/`, collapse repeated separators, trim the trailing one
/// 用 `/` 拼接片段，折叠重复分隔符，去除末尾分隔符
///
/// The trailing separator survives only for the root `/`.
/// 末尾分隔符仅在根路径 `/` 时保留。
///
/// # Examples
/// ```
/// use fpath::{Seg, concat_paths};
///
/// assert_eq!(concat_paths(["dir1", "/dir2", "test.txt"]), "dir1/dir2/test.txt");
/// assert_eq!(concat_paths(["a///b", "//c/"]), "a/b/c");
/// assert_eq!(
///   concat_paths([Seg::from("a"), Seg::from(&["b", "c"])]),
///   "a/b/c"
/// );
/// ```
pub fn concat_paths<'a, I, S>(segs: I) -> String
where
  I: IntoIterator<Item = S>,
  S: Into<Seg<'a>>,
{
  let mut raw = String::new();
  let mut first = true;
  for seg in segs {
    match seg.into() {
      Seg::Str(s) => join_push(&mut raw, &mut first, s),
      Seg::List(li) => {
        for s in li {
          join_push(&mut raw, &mut first, s);
        }
      }
    }
  }
  collapse(&raw)
}

#[inline]
fn join_push(raw: &mut String, first: &mut bool, s: &str) {
  if *first {
    *first = false;
  } else {
    raw.push('/');
  }
  raw.push_str(s);
}

/// Collapse `/` runs, drop the trailing `/` unless the result is the root
/// 折叠 `/` 连续段，除根路径外去除末尾 `/`
fn collapse(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len());
  let mut prev_slash = false;
  for c in raw.chars() {
    if c == '/' {
      if prev_slash {
        continue;
      }
      prev_slash = true;
    } else {
      prev_slash = false;
    }
    out.push(c);
  }
  if out.len() > 1 && out.ends_with('/') {
    out.pop();
  }
  out
}
