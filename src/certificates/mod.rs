// Certificates module - Issuer-recorded metadata and served-serial probing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

pub mod record;
pub mod serial;

pub use record::{
    CertificateRecord, CertificateSummary, ResourceRecord, ValidationMethod, ValidationOption,
};
pub use serial::{HttpsSerialProber, SerialProber};
