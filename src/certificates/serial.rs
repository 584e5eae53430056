// Serial Number Prober - Serial of the certificate actually served at a URL
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;
use crate::error::AuditError;
use async_trait::async_trait;
use reqwest::tls::TlsInfo;
use tracing::debug;
use x509_parser::prelude::*;

/// Fetches the serial number of the leaf certificate served at a URL
#[async_trait]
pub trait SerialProber: Send + Sync {
    /// Return the peer certificate serial as lowercase colon-separated hex
    ///
    /// # Errors
    /// - `AuditError::Transport` on connection failure or timeout
    /// - `AuditError::NoTlsState` if the response was not carried over TLS
    /// - `AuditError::NoCertificate` if the peer presented no certificate
    async fn probe_serial(&self, url: &str) -> Result<String>;
}

/// Prober that performs a plain HTTPS GET and reads the TLS session.
///
/// The client must be built with `tls_info(true)` and a redirect policy
/// that never follows, see `utils::http_client::build_probe_client`.
#[derive(Debug, Clone)]
pub struct HttpsSerialProber {
    client: reqwest::Client,
}

impl HttpsSerialProber {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SerialProber for HttpsSerialProber {
    async fn probe_serial(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AuditError::transport(url, e))?;

        let tls_info = response.extensions().get::<TlsInfo>().cloned();

        // Drain the body so the connection is released cleanly
        if let Err(e) = response.bytes().await {
            debug!("Failed to drain response body from {}: {}", url, e);
        }

        let tls_info = tls_info.ok_or_else(|| AuditError::NoTlsState {
            url: url.to_string(),
        })?;

        let der = tls_info
            .peer_certificate()
            .ok_or_else(|| AuditError::NoCertificate {
                url: url.to_string(),
            })?;

        serial_from_der(der)
    }
}

/// Serial number of a DER-encoded certificate, as colon-separated hex
pub fn serial_from_der(der: &[u8]) -> Result<String> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| AuditError::CertificateParse {
        details: format!("{:?}", e),
    })?;

    Ok(format_serial(cert.raw_serial()))
}

/// Render serial bytes as `30:83:02:84`.
///
/// Leading zero bytes (DER sign padding) are dropped so the output matches
/// the big-endian magnitude recorded by issuers.
pub fn format_serial(raw: &[u8]) -> String {
    let start = raw.iter().position(|b| *b != 0).unwrap_or(raw.len());

    raw[start..]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use openssl::asn1::Asn1Time;
    use openssl::bn::BigNum;
    use openssl::hash::MessageDigest;
    use openssl::pkey::PKey;
    use openssl::rsa::Rsa;
    use openssl::x509::{X509Builder, X509NameBuilder};

    /// Self-signed certificate with a fixed serial
    fn certificate_with_serial(serial_hex: &str) -> Vec<u8> {
        let rsa = Rsa::generate(2048).unwrap();
        let pkey = PKey::from_rsa(rsa).unwrap();

        let mut builder = X509Builder::new().unwrap();
        builder.set_version(2).unwrap();

        let serial = BigNum::from_hex_str(serial_hex).unwrap();
        let serial = serial.to_asn1_integer().unwrap();
        builder.set_serial_number(&serial).unwrap();

        let mut name_builder = X509NameBuilder::new().unwrap();
        name_builder.append_entry_by_text("CN", "serial.example.com").unwrap();
        let name = name_builder.build();
        builder.set_subject_name(&name).unwrap();
        builder.set_issuer_name(&name).unwrap();

        builder.set_not_before(&Asn1Time::days_from_now(0).unwrap()).unwrap();
        builder.set_not_after(&Asn1Time::days_from_now(30).unwrap()).unwrap();
        builder.set_pubkey(&pkey).unwrap();
        builder.sign(&pkey, MessageDigest::sha256()).unwrap();

        builder.build().to_der().unwrap()
    }

    #[test]
    fn test_serial_from_fixed_certificate() {
        let der = certificate_with_serial("308302840A0B0C0D");
        let serial = serial_from_der(&der).unwrap();

        assert!(serial.eq_ignore_ascii_case("30:83:02:84:0A:0B:0C:0D"));
        assert_eq!(serial, "30:83:02:84:0a:0b:0c:0d");
    }

    #[test]
    fn test_serial_with_high_bit_drops_sign_padding() {
        // DER encodes this as 00 ff 01
        let der = certificate_with_serial("FF01");
        assert_eq!(serial_from_der(&der).unwrap(), "ff:01");
    }

    #[test]
    fn test_format_serial() {
        assert_eq!(format_serial(&[0x30, 0x83, 0x02]), "30:83:02");
        assert_eq!(format_serial(&[0x00, 0x00, 0x0a]), "0a");
        assert_eq!(format_serial(&[0x00]), "");
        assert_eq!(format_serial(&[]), "");
    }

    #[test]
    fn test_garbage_der_is_parse_error() {
        let result = serial_from_der(&[0x30, 0x03, 0x01, 0x02]);
        assert!(matches!(result, Err(AuditError::CertificateParse { .. })));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_probe_serial_live() {
        let client = crate::utils::http_client::build_probe_client(
            std::time::Duration::from_secs(30),
            "dvaudit-test",
            &[],
        )
        .unwrap();
        let prober = HttpsSerialProber::new(client);

        let serial = prober.probe_serial("https://example.com/").await.unwrap();
        assert!(serial.split(':').all(|b| b.len() == 2));
    }
}
