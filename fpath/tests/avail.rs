//! Tests for avail module
//! avail 模块测试

use std::fs;

use aok::{OK, Void};
use fpath::{Error, avail_name};
use tempfile::tempdir;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_default_stem() -> Void {
  let dir = tempdir()?;
  let dir_s = dir.path().to_str().unwrap();

  let got = avail_name(dir_s, "", "")?;
  assert!(got.ends_with("/file"), "{got}");
  assert!(got.starts_with(dir_s));
  OK
}

#[test]
fn test_first_free() -> Void {
  let dir = tempdir()?;

  let got = avail_name(dir.path().to_str().unwrap(), "test.txt", "")?;
  assert!(got.ends_with("/test.txt"), "{got}");
  OK
}

#[test]
fn test_collision_increments() -> Void {
  let dir = tempdir()?;
  fs::write(dir.path().join("test.txt"), b"x")?;

  let got = avail_name(dir.path().to_str().unwrap(), "test.txt", "")?;
  assert!(got.ends_with("/test_1.txt"), "{got}");
  OK
}

#[test]
fn test_dir_not_found() {
  let err = avail_name("/no/such/dir", "a.txt", "").unwrap_err();
  assert!(matches!(err, Error::DirNotFound(_)));
}

#[test]
fn test_ext_override() -> Void {
  let dir = tempdir()?;

  // Leading dots of the override are dropped
  // 覆盖扩展名的前导点被去除
  let got = avail_name(dir.path().to_str().unwrap(), "photo.png", ".jpg")?;
  assert!(got.ends_with("/photo.jpg"), "{got}");
  OK
}

#[test]
fn test_blank_name_with_ext() -> Void {
  let dir = tempdir()?;

  let got = avail_name(dir.path().to_str().unwrap(), "  ", "txt")?;
  assert!(got.ends_with("/file.txt"), "{got}");
  OK
}

#[test]
fn test_same_name_dir_no_block() -> Void {
  let dir = tempdir()?;
  fs::create_dir(dir.path().join("file"))?;

  // A same-named directory is not a regular file, so it does not block
  // 同名目录不是普通文件，不阻塞选择
  let got = avail_name(dir.path().to_str().unwrap(), "", "")?;
  assert!(got.ends_with("/file"), "{got}");
  OK
}

#[test]
fn test_probe_exhausted() -> Void {
  let dir = tempdir()?;
  fs::write(dir.path().join("t"), b"x")?;
  for i in 1..100 {
    fs::write(dir.path().join(format!("t_{i}")), b"x")?;
  }

  // All 100 probes collide, the last candidate comes back as-is
  // 100 次探测全部冲突，原样返回最后一个候选
  let got = avail_name(dir.path().to_str().unwrap(), "t", "")?;
  assert!(got.ends_with("/t_99"), "{got}");
  OK
}

#[test]
fn test_multi_dot_name() -> Void {
  let dir = tempdir()?;
  fs::write(dir.path().join("a.tar.gz"), b"x")?;

  // Split on the last dot only
  // 仅按最后一个点拆分
  let got = avail_name(dir.path().to_str().unwrap(), "a.tar.gz", "")?;
  assert!(got.ends_with("/a.tar_1.gz"), "{got}");
  OK
}
