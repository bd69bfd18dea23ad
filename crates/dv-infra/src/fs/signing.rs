//! Signed object URLs
//! 对象签名链接
//!
//! A signed URL has the shape
//! `{base}/object/sign/{bucket}/{namespace}/{key}?expires={ms}&token={hex}`
//! where `token` is HMAC-SHA256 over `{bucket}/{namespace}/{key}:{ms}`.

use anyhow::{bail, Context, Result};
use dv_core::ids::{Namespace, ObjectPath, StorageKey, UserId};
use dv_core::links::SignedUrl;
use dv_core::ports::StorageError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

type HmacSha256 = Hmac<Sha256>;

const OBJECT_SEGMENT: &str = "object";
const SIGN_SEGMENT: &str = "sign";
const PUBLIC_SEGMENT: &str = "public";

/// Object addressed by a verified signed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedObject {
    pub bucket: String,
    pub path: ObjectPath,
}

pub struct UrlSigner {
    base_url: Url,
    secret: Vec<u8>,
}

impl UrlSigner {
    pub fn new(base_url: &str, secret: impl Into<Vec<u8>>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid base url: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("base url cannot carry a path: {base_url}");
        }
        Ok(Self {
            base_url,
            secret: secret.into(),
        })
    }

    pub fn sign(
        &self,
        bucket: &str,
        path: &ObjectPath,
        expires_at_ms: i64,
    ) -> Result<SignedUrl, StorageError> {
        let token = self.token(bucket, path.namespace.as_str(), path.key.as_str(), expires_at_ms)?;
        let mut url = self.object_url(SIGN_SEGMENT, bucket, path);
        url.query_pairs_mut()
            .append_pair("expires", &expires_at_ms.to_string())
            .append_pair("token", &token);
        Ok(SignedUrl {
            url: url.into(),
            expires_at_ms,
        })
    }

    /// Non-expiring URL for objects in a public bucket.
    pub fn public_url(&self, bucket: &str, path: &ObjectPath) -> String {
        self.object_url(PUBLIC_SEGMENT, bucket, path).into()
    }

    /// Checks the token and expiry of a signed URL issued by [`sign`](Self::sign).
    ///
    /// Any mismatch, including an expired link, is reported as
    /// [`StorageError::InvalidSignature`].
    pub fn verify(&self, signed: &str, now_ms: i64) -> Result<VerifiedObject, StorageError> {
        let url = Url::parse(signed).map_err(|_| StorageError::InvalidSignature)?;

        let segments = url
            .path_segments()
            .ok_or(StorageError::InvalidSignature)?
            .map(|s| urlencoding::decode(s).map(|decoded| decoded.into_owned()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| StorageError::InvalidSignature)?;
        let tail = segments
            .len()
            .checked_sub(5)
            .map(|start| &segments[start..])
            .ok_or(StorageError::InvalidSignature)?;
        let [object, kind, bucket, namespace, key] = tail else {
            return Err(StorageError::InvalidSignature);
        };
        if object != OBJECT_SEGMENT || kind != SIGN_SEGMENT {
            return Err(StorageError::InvalidSignature);
        }

        let mut expires = None;
        let mut token = None;
        for (name, value) in url.query_pairs() {
            match &*name {
                "expires" => expires = value.parse::<i64>().ok(),
                "token" => token = hex::decode(value.as_bytes()).ok(),
                _ => {}
            }
        }
        let (Some(expires), Some(token)) = (expires, token) else {
            return Err(StorageError::InvalidSignature);
        };

        self.mac(bucket, namespace, key, expires)?
            .verify_slice(&token)
            .map_err(|_| StorageError::InvalidSignature)?;
        if now_ms > expires {
            return Err(StorageError::InvalidSignature);
        }

        let namespace = Namespace::for_user(&UserId::from(namespace.as_str()));
        Ok(VerifiedObject {
            bucket: bucket.clone(),
            path: namespace.path(&StorageKey::from(key.as_str())),
        })
    }

    fn object_url(&self, kind: &str, bucket: &str, path: &ObjectPath) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base can carry a path.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                OBJECT_SEGMENT,
                kind,
                bucket,
                path.namespace.as_str(),
                path.key.as_str(),
            ]);
        }
        url
    }

    fn mac(
        &self,
        bucket: &str,
        namespace: &str,
        key: &str,
        expires_at_ms: i64,
    ) -> Result<HmacSha256, StorageError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        mac.update(format!("{bucket}/{namespace}/{key}:{expires_at_ms}").as_bytes());
        Ok(mac)
    }

    fn token(
        &self,
        bucket: &str,
        namespace: &str,
        key: &str,
        expires_at_ms: i64,
    ) -> Result<String, StorageError> {
        let mac = self.mac(bucket, namespace, key, expires_at_ms)?;
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
