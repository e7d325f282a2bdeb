// src/core/sanitize.rs
use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::config::consts::NOT_AVAILABLE;

/// Render rule: absent or empty → "N/A". No trimming.
pub fn or_na(v: Option<&str>) -> &str {
    match v {
        Some(s) if !s.is_empty() => s,
        _ => NOT_AVAILABLE,
    }
}

/// Dropdown rule: trimmed, absent or blank → "N/A".
pub fn trimmed_or_na(v: Option<&str>) -> &str {
    match v.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => NOT_AVAILABLE,
    }
}

pub fn eq_ci(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// `needle` must already be lowercased.
pub fn contains_ci(haystack: &str, needle_lc: &str) -> bool {
    haystack.to_lowercase().contains(needle_lc)
}

/// Collation for dropdown lists, close to a root-locale Unicode collator:
/// base letters first (accents and case ignored, punctuation before digits
/// before letters), then accents, then case with lowercase first.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| a.chars().map(swap_case).cmp(b.chars().map(swap_case)))
        .then_with(|| a.cmp(b))
}

// (class, base char) per character; marks stripped, case folded.
fn primary_key(s: &str) -> Vec<(u8, char)> {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .map(|c| {
            let class = if c.is_alphabetic() { 2 } else if c.is_numeric() { 1 } else { 0 };
            (class, c)
        })
        .collect()
}

// Case folded, marks kept: "e" < "é".
fn accent_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn swap_case(c: char) -> char {
    if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else {
        c
    }
}

/// "TANK_INSTALL_DATE" → "TANK INSTALL DATE"
pub fn key_to_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Filesystem-friendly stem from free text ("Boone County" → "Boone_County").
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
