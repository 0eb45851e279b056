//! IPv4/IPv6 validation without regex backtracking risk.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct IpReport {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
    pub issues: Vec<&'static str>,
}

pub fn is_ip_safe(input: &str) -> IpReport {
    let raw = input.trim();
    if raw.is_empty() {
        return IpReport {
            ok: false,
            version: None,
            issues: vec!["empty"],
        };
    }

    if raw.contains(':') {
        return validate_ipv6(raw);
    }
    if raw.contains('.') {
        return validate_ipv4(raw);
    }
    IpReport {
        ok: false,
        version: None,
        issues: vec!["unknown_format"],
    }
}

fn validate_ipv4(ip: &str) -> IpReport {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return IpReport {
            ok: false,
            version: Some(4),
            issues: vec!["bad_segment_count"],
        };
    }

    let mut issues = Vec::new();
    for part in parts {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            issues.push("non_numeric");
        } else {
            match part.parse::<u32>() {
                Ok(n) if n <= 255 => {}
                _ => issues.push("out_of_range"),
            }
            if part.len() > 1 && part.starts_with('0') {
                issues.push("leading_zero");
            }
        }
    }
    issues.dedup();
    IpReport {
        ok: issues.is_empty(),
        version: Some(4),
        issues,
    }
}

fn validate_ipv6(ip: &str) -> IpReport {
    let parts: Vec<&str> = ip.split(':').collect();
    if parts.len() < 3 || parts.len() > 8 {
        return IpReport {
            ok: false,
            version: Some(6),
            issues: vec!["bad_segment_count"],
        };
    }

    let mut issues = Vec::new();
    for part in parts {
        if part.is_empty() {
            // compressed ::
            continue;
        }
        if part.len() > 4 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
            issues.push("invalid_hex_group");
        }
    }
    issues.dedup();
    IpReport {
        ok: issues.is_empty(),
        version: Some(6),
        issues,
    }
}

pub fn is_ipv4(raw: &str) -> bool {
    let report = is_ip_safe(raw);
    report.version == Some(4) && report.ok
}

pub fn is_ipv6(raw: &str) -> bool {
    let report = is_ip_safe(raw);
    report.version == Some(6) && report.ok
}
