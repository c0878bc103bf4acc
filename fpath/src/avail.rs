//! Collision-free file naming
//! 无冲突文件命名

use std::path::Path;

use crate::{Error, Result, concat_paths, info::split_ext};

/// Stem used when the reference name is blank
/// 引用名为空时使用的主干名
const DEFAULT_STEM: &str = "file";

/// Probe attempts before handing back the last candidate
/// 返回最后一个候选前的探测次数
const MAX_PROBE: usize = 100;

/// Find a name under `dir` that no existing regular file occupies
/// 在 `dir` 下查找未被现有普通文件占用的名字
///
/// Stem and extension derive from `ref_name` (split on its last dot); a
/// non-blank `ref_ext` overrides the extracted extension, leading dots are
/// dropped either way. A blank `ref_name` falls back to the stem `file`.
/// 主干名和扩展名取自 `ref_name`（按最后一个点拆分）；非空 `ref_ext` 覆盖
/// 提取的扩展名，两者都去除前导点。`ref_name` 为空时主干名回退为 `file`。
///
/// Probes `stem.ext`, then `stem_1.ext` .. `stem_99.ext` and returns the
/// first candidate that is not a regular file (a same-named directory does
/// not block). When every probe collides, the last candidate comes back
/// as-is. Concurrent callers may receive the same name, nothing is reserved.
/// 依次探测 `stem.ext`、`stem_1.ext` .. `stem_99.ext`，返回第一个不是普通
/// 文件的候选（同名目录不阻塞）。全部冲突时原样返回最后一个候选。并发调用
/// 可能得到相同的名字，不做预留。
///
/// # Errors
/// [`Error::DirNotFound`] when `dir` is not an existing directory.
/// `dir` 不是已存在目录时返回 [`Error::DirNotFound`]。
pub fn avail_name(dir: &str, ref_name: &str, ref_ext: &str) -> Result<String> {
  if !Path::new(dir).is_dir() {
    return Err(Error::DirNotFound(dir.into()));
  }

  let name = ref_name.trim();
  let (stem, mut ext) = if name.is_empty() {
    (DEFAULT_STEM, "")
  } else {
    split_ext(name)
  };

  let ref_ext = ref_ext.trim();
  if !ref_ext.is_empty() {
    ext = ref_ext;
  }
  let ext = ext.trim_start_matches('.');

  let mut candidate = String::new();
  for i in 0..MAX_PROBE {
    let base = match (i, ext.is_empty()) {
      (0, true) => stem.to_string(),
      (0, false) => format!("{stem}.{ext}"),
      (_, true) => format!("{stem}_{i}"),
      (_, false) => format!("{stem}_{i}.{ext}"),
    };
    candidate = concat_paths([dir, base.as_str()]);
    if !Path::new(&candidate).is_file() {
      return Ok(candidate);
    }
  }
  log::warn!("name probes exhausted, reusing {candidate}");
  Ok(candidate)
}
