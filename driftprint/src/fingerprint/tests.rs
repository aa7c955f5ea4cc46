// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Tests: [`crate::fingerprint`].

#![cfg(test)]

use alloc::format;
use alloc::string::{String, ToString};

use itertools::Itertools;

use super::Fingerprint;
use crate::fingerprint::block::{block_size, signature, BlockSizeRelation};
use crate::fingerprint::parser::{ParseError, ParseErrorKind, ParseErrorOrigin};
use crate::test_utils::test_recommended_default;

#[test]
fn basic_impls() {
    test_recommended_default!(Fingerprint);
}

#[test]
fn empty_fingerprint() {
    let fp = Fingerprint::new();
    assert_eq!(fp.block_size(), block_size::MIN);
    assert_eq!(fp.log_block_size(), Some(0));
    assert!(fp.signature_1().is_empty());
    assert!(fp.signature_2().is_empty());
    assert_eq!(fp.to_string(), "3::");
    assert_eq!(fp.len_in_str(), 3);
    assert_eq!("3::".parse::<Fingerprint>(), Ok(fp));
}

#[test]
fn parse_and_format_roundtrip() {
    const CASES: &[&str] = &[
        "3::",
        "3:OOVUd:Ov",
        "192:oFFFFFFFFFFFFF6:oFFFFFF6",
        "6:1kSI0DhPQrLlDwFkxaMjbdgtnO3NXVJ/cjsky8c:1jI/3wFsbdQnOqjBc",
        "3221225472:+/:",
        "24::AAAA",
    ];
    for &text in CASES {
        let fp: Fingerprint = text.parse().unwrap();
        assert_eq!(fp.to_string(), text);
        assert_eq!(fp.len_in_str(), text.len(), "failed on {:?}", text);
        assert_eq!(Fingerprint::from_bytes(text.as_bytes()), Ok(fp));
    }
}

#[test]
fn roundtrip_from_parts() {
    let sig_samples = ["", "A", "+/09az", "oFFFFFFFFFFFFF6"];
    let full: String = core::iter::repeat('Z').take(signature::MAX_LEN).collect();
    for log_block_size in block_size::RANGE_LOG_VALID {
        let bs = block_size::from_log(log_block_size).unwrap();
        for (sig1, sig2) in sig_samples.iter().copied().chain([full.as_str()]).tuple_combinations() {
            let fp = Fingerprint::from_parts(bs, sig1, sig2).unwrap();
            assert_eq!(fp.block_size(), bs);
            assert_eq!(fp.log_block_size(), Some(log_block_size));
            assert_eq!(fp.signature_1().len(), sig1.len());
            assert_eq!(fp.signature_2().len(), sig2.len());
            let text = fp.to_string();
            assert_eq!(text, format!("{}:{}:{}", bs, sig1, sig2));
            assert_eq!(text.parse::<Fingerprint>(), Ok(fp));
        }
    }
}

#[test]
fn from_parts_errors() {
    assert_eq!(
        Fingerprint::from_parts(0, "A", "B"),
        Err(ParseError::new(ParseErrorKind::BlockSizeIsInvalid, ParseErrorOrigin::BlockSize, 0))
    );
    assert_eq!(
        Fingerprint::from_parts(3, "A:B", ""),
        Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, ParseErrorOrigin::Signature1, 1))
    );
    assert_eq!(
        Fingerprint::from_parts(3, "", "A B"),
        Err(ParseError::new(ParseErrorKind::UnexpectedCharacter, ParseErrorOrigin::Signature2, 1))
    );
}

#[rustfmt::skip]
#[test]
fn parse_errors() {
    let too_long = format!("3:{}:", "A".repeat(signature::MAX_LEN + 1));
    let cases: &[(&str, ParseErrorKind, ParseErrorOrigin, usize)] = &[
        ("",           ParseErrorKind::UnexpectedEndOfString, ParseErrorOrigin::BlockSize,  0),
        ("3",          ParseErrorKind::UnexpectedEndOfString, ParseErrorOrigin::BlockSize,  1),
        ("3:abc",      ParseErrorKind::UnexpectedEndOfString, ParseErrorOrigin::Signature1, 5),
        ("abc:def:g",  ParseErrorKind::UnexpectedCharacter,   ParseErrorOrigin::BlockSize,  0),
        ("0:abc:def",  ParseErrorKind::BlockSizeStartsWithZero, ParseErrorOrigin::BlockSize, 0),
        ("3:ab-c:d",   ParseErrorKind::UnexpectedCharacter,   ParseErrorOrigin::Signature1, 4),
        ("3:abc:d:e",  ParseErrorKind::UnexpectedCharacter,   ParseErrorOrigin::Signature2, 7),
        ("3:abc:d,f",  ParseErrorKind::UnexpectedCharacter,   ParseErrorOrigin::Signature2, 7),
        ("3:a:b\n",    ParseErrorKind::UnexpectedCharacter,   ParseErrorOrigin::Signature2, 5),
        (&too_long,    ParseErrorKind::SignatureIsTooLong,    ParseErrorOrigin::Signature1, 2 + signature::MAX_LEN),
    ];
    for &(text, kind, origin, offset) in cases {
        assert_eq!(
            text.parse::<Fingerprint>(),
            Err(ParseError::new(kind, origin, offset)),
            "failed on {:?}", text
        );
    }
}

#[test]
fn relation() {
    let fp3: Fingerprint = "3:A:B".parse().unwrap();
    let fp6: Fingerprint = "6:A:B".parse().unwrap();
    let fp12: Fingerprint = "12:A:B".parse().unwrap();
    assert_eq!(fp3.block_size_relation(&fp3), BlockSizeRelation::NearEq);
    assert_eq!(fp3.block_size_relation(&fp6), BlockSizeRelation::NearLt);
    assert_eq!(fp6.block_size_relation(&fp3), BlockSizeRelation::NearGt);
    assert_eq!(fp3.block_size_relation(&fp12), BlockSizeRelation::Far);
}

#[test]
fn any_positive_block_size() {
    for text in ["1:A:B", "5::", "8:AB:CD", "10:abc:def", "4294967295:+:/"] {
        let fp: Fingerprint = text.parse().unwrap();
        assert_eq!(fp.log_block_size(), None, "failed on {:?}", text);
        assert_eq!(fp.to_string(), text);
        assert_eq!(fp.len_in_str(), text.len());
    }
    let fp = Fingerprint::from_parts(7, "A", "B").unwrap();
    assert_eq!(fp.block_size(), 7);
    assert_eq!(fp.to_string(), "7:A:B");
    let fp4: Fingerprint = "4:A:B".parse().unwrap();
    let fp8: Fingerprint = "8:A:B".parse().unwrap();
    let fp3: Fingerprint = "3:A:B".parse().unwrap();
    assert_eq!(fp4.block_size_relation(&fp8), BlockSizeRelation::NearLt);
    assert_eq!(fp8.block_size_relation(&fp4), BlockSizeRelation::NearGt);
    assert_eq!(fp4.block_size_relation(&fp3), BlockSizeRelation::Far);
}

#[test]
fn debug_output() {
    let fp: Fingerprint = "6:abc:de".parse().unwrap();
    assert_eq!(
        format!("{:?}", fp),
        "Fingerprint { block_size: 6, sig1: abc, sig2: de }"
    );
}

#[test]
fn max_len_in_str() {
    let text = format!(
        "{}:{}:{}",
        block_size::MAX,
        "/".repeat(signature::MAX_LEN),
        "+".repeat(signature::MAX_LEN)
    );
    let fp: Fingerprint = text.parse().unwrap();
    assert_eq!(fp.len_in_str(), Fingerprint::MAX_LEN_IN_STR);
    assert_eq!(fp.to_string().len(), Fingerprint::MAX_LEN_IN_STR);
}
