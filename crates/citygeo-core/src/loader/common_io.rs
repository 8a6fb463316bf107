// crates/citygeo-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Whether a path names a gzip file (`*.gz`).
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Opens a file for reading, transparently un-gzipping `*.gz` paths.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(
                "Gzip input but 'compact' disabled".into(),
            ));
        }
    }

    Ok(Box::new(reader))
}

/// Output file, optionally gzip-compressed.
///
/// Call [`OutputStream::finish`] when done. Dropping a gzip stream writes
/// its trailer but swallows any error doing so.
pub enum OutputStream {
    Plain(BufWriter<File>),
    #[cfg(feature = "compact")]
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputStream {
    /// Complete the gzip member (if any) and flush everything to the file.
    pub fn finish(self) -> Result<()> {
        let mut inner = match self {
            OutputStream::Plain(w) => w,
            #[cfg(feature = "compact")]
            OutputStream::Gzip(gz) => gz.finish()?,
        };
        inner.flush()?;
        Ok(())
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputStream::Plain(w) => w.write(buf),
            #[cfg(feature = "compact")]
            OutputStream::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputStream::Plain(w) => w.flush(),
            #[cfg(feature = "compact")]
            OutputStream::Gzip(w) => w.flush(),
        }
    }
}

/// Creates a file for writing, gzip-compressing `*.gz` paths.
pub fn create_stream(path: &Path) -> Result<OutputStream> {
    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            let writer = BufWriter::new(File::create(path)?);
            return Ok(OutputStream::Gzip(GzEncoder::new(
                writer,
                Compression::default(),
            )));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(
                "Gzip requested but 'compact' disabled".into(),
            ));
        }
    }

    Ok(OutputStream::Plain(BufWriter::new(File::create(path)?)))
}

/// `cities.json` -> `cities.json.<suffix>`
pub fn get_cache_path(json_path: &Path, suffix: &str) -> PathBuf {
    let filename = json_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{filename}.{suffix}"))
}
