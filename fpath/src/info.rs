//! Path decomposition
//! 路径分解

/// Path components, borrowed from the input
/// 路径组件，借用自输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathInfo<'a> {
  /// Directory part, `""` when absent, `"/"` for the root
  /// 目录部分，缺失时为 `""`，根目录为 `"/"`
  pub dir: &'a str,
  /// Last path segment, extension included
  /// 最后一个路径段，含扩展名
  pub basename: &'a str,
  /// Extension without the leading dot, `""` when absent
  /// 不含点的扩展名，缺失时为 `""`
  pub ext: &'a str,
  /// Basename without extension and trailing dot
  /// 去除扩展名和末尾点的文件名
  pub stem: &'a str,
}

/// Split `path` into directory, basename, extension and stem
/// 将 `path` 拆分为目录、文件名、扩展名和主干名
///
/// Missing components degrade to `""`, never to an error.
/// 缺失的组件退化为 `""`，而非错误。
///
/// # Examples
/// ```
/// use fpath::path_info;
///
/// let pi = path_info("/a/b/c.tar.gz");
/// assert_eq!(pi.dir, "/a/b");
/// assert_eq!(pi.basename, "c.tar.gz");
/// assert_eq!(pi.ext, "gz");
/// assert_eq!(pi.stem, "c.tar");
/// ```
pub fn path_info(path: &str) -> PathInfo<'_> {
  let (dir, basename) = match memchr::memrchr(b'/', path.as_bytes()) {
    // A lone leading slash stays the root directory
    // 仅有的前导斜杠保留为根目录
    Some(0) => ("/", &path[1..]),
    Some(pos) => (&path[..pos], &path[pos + 1..]),
    None => ("", path),
  };
  let (stem, ext) = split_ext(basename);
  PathInfo {
    dir,
    basename,
    ext,
    stem,
  }
}

/// Extension of `path`, without the leading dot
/// `path` 的扩展名，不含点
#[inline]
pub fn ext(path: &str) -> &str {
  path_info(path).ext
}

/// Split a basename on its last dot
/// 按最后一个点拆分文件名
#[inline]
pub(crate) fn split_ext(basename: &str) -> (&str, &str) {
  match memchr::memrchr(b'.', basename.as_bytes()) {
    Some(pos) => (&basename[..pos], &basename[pos + 1..]),
    None => (basename, ""),
  }
}
