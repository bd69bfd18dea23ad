//! Signed link purposes and lifetimes
//! 签名链接用途与有效期

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// Why a signed URL is being issued. Each purpose has its own lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPurpose {
    Preview,
    Download,
    Share,
}

impl LinkPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkPurpose::Preview => "preview",
            LinkPurpose::Download => "download",
            LinkPurpose::Share => "share",
        }
    }
}

impl Display for LinkPurpose {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preview" => Ok(LinkPurpose::Preview),
            "download" => Ok(LinkPurpose::Download),
            "share" => Ok(LinkPurpose::Share),
            other => Err(format!("unknown link purpose: {other}")),
        }
    }
}

/// Lifetimes of signed URLs, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPolicy {
    pub preview_ttl_secs: u64,
    pub download_ttl_secs: u64,
    pub share_ttl_secs: u64,
}

impl LinkPolicy {
    /// v1 defaults: one hour for preview and share, one minute for download.
    pub fn defaults() -> Self {
        Self {
            preview_ttl_secs: 3_600,
            download_ttl_secs: 60,
            share_ttl_secs: 3_600,
        }
    }

    pub fn ttl_for(&self, purpose: LinkPurpose) -> Duration {
        let secs = match purpose {
            LinkPurpose::Preview => self.preview_ttl_secs,
            LinkPurpose::Download => self.download_ttl_secs,
            LinkPurpose::Share => self.share_ttl_secs,
        };
        Duration::from_secs(secs)
    }
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self::defaults()
    }
}

/// A time-limited retrieval URL issued by object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedUrl {
    pub url: String,
    pub expires_at_ms: i64,
}

impl Display for SignedUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}
