use std::fs;
use std::io;
use std::path::Path;

use filetime::{set_file_times, FileTime};

use crate::error::InstallError;

/// ENOSPC on Unix
#[cfg(unix)]
const ENOSPC: i32 = 28;

#[cfg(unix)]
fn is_disk_full(e: &io::Error) -> bool {
    e.raw_os_error() == Some(ENOSPC)
}

#[cfg(not(unix))]
fn is_disk_full(_e: &io::Error) -> bool {
    false
}

/// Copy `src` to `dst`, overwriting `dst` and carrying over permissions
/// and access/modification times. Returns the number of bytes written.
///
/// `name` is the manifest entry used in error reports. Copying a file onto
/// itself is refused before `dst` is opened, since opening truncates it.
pub fn copy_file(name: &str, src: &Path, dst: &Path) -> Result<u64, InstallError> {
    let classify = |e: io::Error| {
        if is_disk_full(&e) {
            return InstallError::DiskFull {
                name: name.to_string(),
                path: dst.to_path_buf(),
                source: e,
            };
        }
        InstallError::CopyFailed {
            name: name.to_string(),
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source: e,
        }
    };

    if same_file(src, dst).map_err(classify)? {
        return Err(classify(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "'{}' and '{}' are the same file",
                src.display(),
                dst.display()
            ),
        )));
    }

    // fs::copy carries permission bits over already
    let bytes = fs::copy(src, dst).map_err(classify)?;
    copy_times(src, dst).map_err(classify)?;

    Ok(bytes)
}

/// True when `dst` exists and resolves to the same file as `src`
fn same_file(src: &Path, dst: &Path) -> io::Result<bool> {
    if !dst.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(src)? == fs::canonicalize(dst)?)
}

fn copy_times(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    set_file_times(dst, atime, mtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_file_content_matches() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.css");
        let dst = temp.path().join("out.css");
        fs::write(&src, b"body { color: red; }").unwrap();

        let bytes = copy_file("a.css", &src, &dst).unwrap();

        assert_eq!(bytes, 20);
        assert_eq!(fs::read(&dst).unwrap(), fs::read(&src).unwrap());
    }

    #[test]
    fn test_copy_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.css");
        let dst = temp.path().join("out.css");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "old content that is longer").unwrap();

        copy_file("a.css", &src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn test_copy_file_preserves_mtime() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.js");
        let dst = temp.path().join("b.js");
        fs::write(&src, "x").unwrap();

        let mtime = FileTime::from_unix_time(1_700_000_020, 0);
        set_file_times(&src, FileTime::from_unix_time(1_700_000_010, 0), mtime).unwrap();

        copy_file("a.js", &src, &dst).unwrap();

        let meta = fs::metadata(&dst).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&meta), mtime);
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_file_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.js");
        let dst = temp.path().join("b.js");
        fs::write(&src, "x").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o640)).unwrap();

        copy_file("a.js", &src, &dst).unwrap();

        let mode = fs::metadata(&dst).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_copy_file_missing_source() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("gone.css");
        let dst = temp.path().join("out.css");

        let err = copy_file("gone.css", &src, &dst).unwrap_err();

        match err {
            InstallError::CopyFailed { name, .. } => assert_eq!(name, "gone.css"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!dst.exists());
    }

    #[test]
    fn test_copy_file_onto_itself_is_refused() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.css");
        fs::write(&src, "body {}").unwrap();

        let err = copy_file("a.css", &src, &src).unwrap_err();

        match err {
            InstallError::CopyFailed { ref name, ref source, .. } => {
                assert_eq!(name, "a.css");
                assert!(source.to_string().contains("are the same file"));
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_to_string(&src).unwrap(), "body {}");
    }

    #[test]
    fn test_copy_file_onto_itself_through_dot_path() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.css");
        fs::write(&src, "body {}").unwrap();
        let dst = temp.path().join(".").join("a.css");

        assert!(copy_file("a.css", &src, &dst).is_err());
        assert_eq!(fs::read_to_string(&src).unwrap(), "body {}");
    }

    #[cfg(unix)]
    #[test]
    fn test_disk_full_detection() {
        assert!(is_disk_full(&io::Error::from_raw_os_error(ENOSPC)));
        assert!(!is_disk_full(&io::Error::from(io::ErrorKind::PermissionDenied)));
    }

    #[test]
    fn test_copy_file_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.css");
        fs::write(&src, "x").unwrap();
        let dst = temp.path().join("no-such-dir").join("a.css");

        assert!(copy_file("a.css", &src, &dst).is_err());
        assert!(!temp.path().join("no-such-dir").exists());
    }
}
