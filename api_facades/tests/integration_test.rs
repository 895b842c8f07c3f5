//! Integration tests for api_facades
//!
//! End-to-end pack/unpack behavior through the public surface only.

use api_facades::{
    pack, unpack, unpack_prefix, BigNumber, DecodeError, EncodeError, Term, TextEncoding,
    UnpackOptions,
};

#[test]
fn test_pack_vectors() {
    assert_eq!(pack(&Term::from(10i64)).unwrap(), vec![131, 97, 10]);
    assert_eq!(pack(&Term::from(1200i64)).unwrap(), vec![131, 98, 0, 0, 4, 176]);
    assert_eq!(
        pack(&Term::from(3.141592)).unwrap(),
        vec![131, 70, 64, 9, 33, 250, 252, 139, 0, 122]
    );
    assert_eq!(
        pack(&Term::Map(vec![(Term::from("d"), Term::from(10i64))])).unwrap(),
        vec![131, 116, 0, 0, 0, 1, 109, 0, 0, 0, 1, 100, 97, 10]
    );
    assert_eq!(
        pack(&Term::List(vec![
            Term::from(1i64),
            Term::from(2i64),
            Term::from(3i64)
        ]))
        .unwrap(),
        vec![131, 108, 0, 0, 0, 3, 97, 1, 97, 2, 97, 3, 106]
    );
    assert_eq!(pack(&Term::List(vec![])).unwrap(), vec![131, 106]);
}

#[test]
fn test_unpack_vectors() {
    let options = UnpackOptions::new();
    assert_eq!(unpack(&[131, 97, 234], &options).unwrap(), Term::Int(234));
    assert_eq!(
        unpack(&[131, 98, 0, 0, 214, 216], &options).unwrap(),
        Term::Int(55000)
    );
    assert_eq!(
        unpack(&[131, 70, 64, 108, 42, 225, 71, 174, 20, 123], &options).unwrap(),
        Term::Float(225.34)
    );
    assert_eq!(
        unpack(&[131, 107, 0, 3, 1, 2, 3], &options).unwrap(),
        Term::Binary(vec![1, 2, 3])
    );
    assert_eq!(
        unpack(&[131, 108, 0, 0, 0, 3, 97, 1, 97, 2, 97, 3, 106], &options).unwrap(),
        Term::List(vec![Term::Int(1), Term::Int(2), Term::Int(3)])
    );
    assert_eq!(
        unpack(&[131, 116, 0, 0, 0, 1, 100, 0, 1, 97, 97, 150], &options).unwrap(),
        Term::Map(vec![(Term::Atom("a".to_string()), Term::Int(150))])
    );
    assert_eq!(unpack(&[131, 106], &options).unwrap(), Term::Nil);
    assert_eq!(
        unpack(&[131, 100, 0, 5, 104, 101, 108, 108, 111], &options).unwrap(),
        Term::Atom("hello".to_string())
    );
}

#[test]
fn test_unpack_with_charset() {
    let options = UnpackOptions::with_text_encoding(TextEncoding::Utf8);
    assert_eq!(
        unpack(&[131, 107, 0, 6, 233, 153, 176, 233, 153, 189], &options).unwrap(),
        Term::Str("\u{9670}\u{967d}".to_string())
    );
}

#[test]
fn test_atom_text_asymmetry() {
    // Atom in, atom out on decode; text in, binary out on encode
    let packed = pack(&Term::from("hello")).unwrap();
    assert_eq!(packed[1], 109);
    assert_eq!(
        unpack(&packed, &UnpackOptions::new()).unwrap(),
        Term::Binary(b"hello".to_vec())
    );

    let packed = pack(&Term::Atom("hello".to_string())).unwrap();
    assert_eq!(packed[1], 100);
    assert_eq!(
        unpack(&packed, &UnpackOptions::new()).unwrap(),
        Term::Atom("hello".to_string())
    );
}

#[test]
fn test_roundtrip_assorted_terms() {
    let options = UnpackOptions::new();
    let terms = vec![
        Term::Nil,
        Term::Int(0),
        Term::Int(255),
        Term::Int(256),
        Term::Int(-1),
        Term::Int(i64::MAX),
        Term::Int(i64::MIN),
        Term::Float(0.0),
        Term::Float(-1.5),
        Term::Atom("ok".to_string()),
        Term::Binary(vec![]),
        Term::Binary(vec![0, 1, 255]),
        Term::Tuple(vec![]),
        Term::Tuple(vec![Term::Int(1), Term::Nil]),
        Term::List(vec![Term::Int(1), Term::List(vec![Term::Int(2)])]),
        Term::Map(vec![(Term::Int(1), Term::Int(2))]),
        Term::from(BigNumber::from_decimal_str("18446744073709551616").unwrap()),
    ];
    for term in terms {
        let packed = pack(&term).unwrap();
        let (unpacked, consumed) = unpack_prefix(&packed, &options).unwrap();
        assert_eq!(unpacked, term, "roundtrip failed for {:?}", term);
        assert_eq!(consumed, packed.len());
    }
}

#[test]
fn test_error_surface() {
    let options = UnpackOptions::new();
    assert_eq!(
        unpack(&[130, 106], &options),
        Err(DecodeError::BadVersion { found: 130 })
    );
    assert_eq!(
        unpack(&[131, 103], &options),
        Err(DecodeError::UnknownTag { tag: 103, offset: 1 })
    );
    assert_eq!(
        unpack(&[131, 97], &options),
        Err(DecodeError::Truncated { offset: 2 })
    );
    assert_eq!(
        pack(&Term::Atom("a".repeat(300))),
        Err(EncodeError::AtomTooLong)
    );
}

#[test]
fn test_concurrent_calls_share_nothing() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let term = Term::List(vec![Term::Int(i), Term::from("x")]);
                let packed = pack(&term).unwrap();
                unpack(&packed, &UnpackOptions::new()).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let term = handle.join().unwrap();
        assert_eq!(
            term,
            Term::List(vec![Term::Int(i as i64), Term::Binary(b"x".to_vec())])
        );
    }
}
