//! Filesystem helpers: whole-file writes, line I/O, log appends and downloads.

use crate::config::LogFileConfig;
use crate::error::UtilsResult;
use chrono::Local;
use reqwest::blocking::{Client, Response};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Timestamp prefix of every appended log line
const LOG_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Create (or truncate) `destination` and write `content` to it.
pub fn write_to_file(content: &str, destination: impl AsRef<Path>) -> UtilsResult<()> {
    let mut file = File::create(destination)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Append a timestamped line to `<log dir>/<name>.log`.
///
/// The log directory is created when missing. Lines end with `\r\n`.
pub fn append_to_file(config: &LogFileConfig, name: &str, content: &str) -> UtilsResult<()> {
    create_dir_if_not_exist(config.dir())?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path(name))?;
    let stamp = Local::now().format(LOG_TIMESTAMP_FORMAT);
    write!(file, "{stamp} {content}\r\n")?;
    Ok(())
}

/// Whether `path` exists. Errors other than "not found" (e.g. permission denied)
/// count as existing.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}

/// Download `url` into `destination`, returning the number of bytes written.
///
/// Blocking; must not be called from inside an async runtime. Non-success
/// status codes are errors and leave `destination` untouched. A body that fails
/// midway removes the partially written file.
pub fn download_from_url(url: &str, destination: impl AsRef<Path>) -> UtilsResult<u64> {
    download_with_client(&Client::new(), url, destination)
}

/// [`download_from_url`] through a caller-configured client (proxy, timeouts).
pub fn download_with_client(
    client: &Client,
    url: &str,
    destination: impl AsRef<Path>,
) -> UtilsResult<u64> {
    let destination = destination.as_ref();
    let mut response = client.get(url).send()?.error_for_status()?;

    let mut file = BufWriter::new(File::create(destination)?);
    let written = match write_body(&mut response, &mut file) {
        Ok(written) => written,
        Err(e) => {
            drop(file);
            if let Err(remove_err) = fs::remove_file(destination) {
                tracing::warn!(path = %destination.display(), error = %remove_err, "failed to remove partial download");
            }
            return Err(e);
        }
    };

    tracing::info!(url, path = %destination.display(), bytes = written, "downloaded file");
    Ok(written)
}

fn write_body(response: &mut Response, file: &mut BufWriter<File>) -> UtilsResult<u64> {
    let written = response.copy_to(file)?;
    file.flush()?;
    Ok(written)
}

/// Recursively create `dir` unless it already exists.
pub fn create_dir_if_not_exist(dir: impl AsRef<Path>) -> UtilsResult<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        tracing::debug!(path = %dir.display(), "created directory");
    }
    Ok(())
}

/// Read a whole file into memory as lines, without line terminators.
pub fn read_lines(path: impl AsRef<Path>) -> UtilsResult<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    Ok(lines)
}

/// Write `lines` to `path`, each followed by `\n`, replacing any previous content.
pub fn write_lines<S: AsRef<str>>(lines: &[S], path: impl AsRef<Path>) -> UtilsResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}
