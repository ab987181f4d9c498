//! Where candidate words come from.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::info;

use crate::config::{FetchOptions, WordListLocation};
use crate::error::{Result, TableError};

/// Supplies the raw newline-delimited word list.
pub trait WordSource {
    fn fetch(&self) -> Result<String>;

    /// Human readable origin, for logs.
    fn describe(&self) -> String;
}

/// Plain HTTP GET of a static text file. Anything but 200 aborts.
pub struct HttpSource {
    pub url: String,
    pub timeout: Option<Duration>,
    /// Honor `HTTP_PROXY` and friends.
    pub use_system_proxy: bool,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
            use_system_proxy: true,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Connect directly, ignoring proxy environment variables.
    pub fn direct(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }
}

impl WordSource for HttpSource {
    fn fetch(&self) -> Result<String> {
        info!("downloading word list from {}", self.url);
        let mut builder = reqwest::blocking::Client::builder().timeout(self.timeout);
        if !self.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        let response = client.get(&self.url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(TableError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Word list already on disk.
pub struct FileSource {
    pub path: PathBuf,
}

impl WordSource for FileSource {
    fn fetch(&self) -> Result<String> {
        info!("reading word list from {}", self.path.display());
        Ok(fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory word list.
pub struct TextSource(pub String);

impl WordSource for TextSource {
    fn fetch(&self) -> Result<String> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "<inline>".to_string()
    }
}

/// Build the source a config points at.
pub fn source_for(location: &WordListLocation, fetch: &FetchOptions) -> Box<dyn WordSource> {
    match location {
        WordListLocation::Url(url) => {
            let source = HttpSource::new(url.clone()).with_timeout(fetch.timeout);
            if fetch.use_system_proxy {
                Box::new(source)
            } else {
                Box::new(source.direct())
            }
        }
        WordListLocation::File(path) => Box::new(FileSource { path: path.clone() }),
    }
}
