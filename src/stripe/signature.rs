//! Stripe webhook signature verification.
//!
//! The `stripe-signature` header looks like `t=1492774577,v1=5257a8...,v1=...`.
//! Each `v1` entry is a hex HMAC-SHA256 of `"{t}.{raw body}"` keyed with the
//! endpoint's signing secret. More than one `v1` is sent while a secret is
//! being rolled, so any match is accepted.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::{config::SIGNATURE_SCHEME, errors::SignatureError};

type HmacSha256 = Hmac<Sha256>;

struct SignatureHeader<'a> {
    timestamp: &'a str,
    signatures: Vec<&'a str>,
}

fn parse_header(header: &str) -> Result<SignatureHeader<'_>, SignatureError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        let Some((key, value)) = part.trim().split_once('=') else {
            continue;
        };

        match key {
            "t" => timestamp = Some(value),
            k if k == SIGNATURE_SCHEME => signatures.push(value),
            _ => {}
        }
    }

    let Some(timestamp) = timestamp else {
        return Err(SignatureError::MalformedHeader);
    };

    if timestamp.parse::<u64>().is_err() {
        return Err(SignatureError::MalformedHeader);
    }

    if signatures.is_empty() {
        return Err(SignatureError::NoSignatures);
    }

    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

fn signed_payload_mac(payload: &[u8], timestamp: &str, secret: &str) -> HmacSha256 {
    // HMAC accepts keys of any length.
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => unreachable!("hmac key length is unrestricted"),
    };
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(payload);
    mac
}

/// Checks `header` against `payload` and returns the signed timestamp.
///
/// A `tolerance` of zero disables the replay window check.
pub fn verify(
    payload: &[u8],
    header: &str,
    secret: &str,
    tolerance: u64,
    now: u64,
) -> Result<u64, SignatureError> {
    let header = parse_header(header)?;
    let mac = signed_payload_mac(payload, header.timestamp, secret);

    let matched = header.signatures.iter().any(|signature| match hex::decode(signature) {
        Ok(bytes) => mac.clone().verify_slice(&bytes).is_ok(),
        Err(_) => false,
    });

    if !matched {
        return Err(SignatureError::Mismatch);
    }

    let timestamp = header
        .timestamp
        .parse::<u64>()
        .map_err(|_| SignatureError::MalformedHeader)?;

    if tolerance > 0 && timestamp.saturating_add(tolerance) < now {
        return Err(SignatureError::TimestampOutsideTolerance);
    }

    Ok(timestamp)
}

/// Builds a header value the way Stripe does when it sends an event.
pub fn sign(payload: &[u8], secret: &str, timestamp: u64) -> String {
    let timestamp = timestamp.to_string();
    let mac = signed_payload_mac(payload, &timestamp, secret);
    let signature = hex::encode(mac.finalize().into_bytes());

    format!("t={},{}={}", timestamp, SIGNATURE_SCHEME, signature)
}
