// Domain Variants - Hostnames a validator is expected to reach for a domain pattern
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

const WWW_PREFIX: &str = "www.";
const WILDCARD_PREFIX: &str = "*.";

/// Expand a domain name pattern into the concrete hostnames to probe.
///
/// - `www.example.com` -> `www.example.com`, `example.com`
/// - `*.example.com`   -> `example.com`, `www.example.com`
/// - `example.com`     -> `example.com`, `www.example.com`
///
/// The result always holds two entries. Callers must treat it as a set; the
/// order only decides which variant is probed first.
pub fn expand(domain: &str) -> Vec<String> {
    if let Some(bare) = domain.strip_prefix(WWW_PREFIX) {
        return vec![domain.to_string(), bare.to_string()];
    }

    if let Some(base) = domain.strip_prefix(WILDCARD_PREFIX) {
        return vec![base.to_string(), format!("{}{}", WWW_PREFIX, base)];
    }

    vec![domain.to_string(), format!("{}{}", WWW_PREFIX, domain)]
}

/// URL probed for a single variant
pub fn probe_url(variant: &str) -> String {
    format!("https://{}/", variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    fn set(items: &[&str]) -> Vec<String> {
        sorted(items.iter().map(|s| s.to_string()).collect())
    }

    // Cases mirror the hostnames ACM checks during email validation.
    #[test]
    fn test_expand_known_cases() {
        let cases = [
            ("example.com", set(&["example.com", "www.example.com"])),
            ("www.example.com", set(&["www.example.com", "example.com"])),
            ("*.example.com", set(&["example.com", "www.example.com"])),
            (
                "subdomain.example.com",
                set(&["subdomain.example.com", "www.subdomain.example.com"]),
            ),
            (
                "www.subdomain.example.com",
                set(&["www.subdomain.example.com", "subdomain.example.com"]),
            ),
            (
                "*.subdomain.example.com",
                set(&["subdomain.example.com", "www.subdomain.example.com"]),
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(sorted(expand(input)), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_expand_always_two_variants() {
        for domain in ["a", "www.", "*.", "www.www.x", "*.www.x", ""] {
            assert_eq!(expand(domain).len(), 2, "domain: {:?}", domain);
        }
    }

    #[test]
    fn test_expand_stable_on_canonical_root() {
        for root in ["example.com", "api.example.org", "co.uk"] {
            let direct = sorted(expand(root));
            let via_www = sorted(expand(&format!("www.{}", root)));
            let via_wildcard = sorted(expand(&format!("*.{}", root)));

            assert_eq!(direct, via_www);
            assert_eq!(direct, via_wildcard);
        }
    }

    #[test]
    fn test_expand_probe_order() {
        assert_eq!(expand("*.example.com")[0], "example.com");
        assert_eq!(expand("www.example.com")[0], "www.example.com");
    }

    #[test]
    fn test_probe_url() {
        assert_eq!(probe_url("example.com"), "https://example.com/");
    }
}
