use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader};
use std::os::unix::io::AsRawFd;
use std::path::Path;

/// Reads the first line of `path` with the trailing newline stripped.
pub fn read_one_line<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let file = File::open(path)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Writes `value` to an existing attribute file.
///
/// The kernel expects the whole value in a single write(2), so this goes
/// through the raw fd instead of a buffered writer. The file is opened
/// write-only without create or truncate: a missing node is the driver's
/// business, not ours.
pub fn write_line<P: AsRef<Path>>(path: P, value: &str) -> io::Result<()> {
    let file = OpenOptions::new().write(true).open(path)?;
    let fd = file.as_raw_fd();
    let bytes = value.as_bytes();
    let written = unsafe { libc::write(fd, bytes.as_ptr() as *const _, bytes.len()) };
    if written < 0 {
        return Err(io::Error::last_os_error());
    }
    if written as usize != bytes.len() {
        return Err(io::Error::new(io::ErrorKind::WriteZero, "short write"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_first_line_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attr");
        fs::write(&path, "2\nleftover\n").unwrap();
        assert_eq!(read_one_line(&path).unwrap(), "2");
    }

    #[test]
    fn read_fails_on_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_one_line(dir.path().join("absent")).is_err());
    }

    #[test]
    fn write_refuses_to_create_the_node() {
        let dir = tempdir().unwrap();
        assert!(write_line(dir.path().join("absent"), "2").is_err());
    }

    #[test]
    fn writes_value_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attr");
        fs::write(&path, "0").unwrap();
        write_line(&path, "2").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "2");
    }
}
