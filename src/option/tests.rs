use super::*;
use crate::error::SixRdError;

const SINGLE_RELAY: [u8; 22] = [
    12, 36, //
    0x20, 0x01, 0x0d, 0xb8, 0xf0, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x0a, 0xfe, 0x01, 0x01,
];

#[test]
fn test_decode_minimal_payload() {
    let b = [
        0, 32, 0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    let opt = wire::decode(&b).unwrap();

    assert_eq!(opt.mask_len(), 0);
    assert_eq!(opt.prefix_len(), 32);
    assert_eq!(opt.prefix(), "2001:db8::".parse::<Ipv6Addr>().unwrap());
    assert!(opt.relays().is_empty());
}

#[test]
fn test_binary_round_trip() {
    let opt = Option6rd::try_from(&SINGLE_RELAY[..]).unwrap();

    assert_eq!(opt.mask_len(), 12);
    assert_eq!(opt.prefix_len(), 36);
    assert_eq!(opt.relays(), &[Ipv4Addr::new(10, 254, 1, 1)]);
    assert_eq!(&opt.to_bytes()[..], &SINGLE_RELAY[..]);
}

#[test]
fn test_multiple_relays_keep_order() {
    let mut b = SINGLE_RELAY.to_vec();
    b.extend_from_slice(&[0x0a, 0xfe, 0x01, 0x02]);

    let opt = wire::decode(&b).unwrap();
    assert_eq!(
        opt.relays(),
        &[Ipv4Addr::new(10, 254, 1, 1), Ipv4Addr::new(10, 254, 1, 2)]
    );
    assert_eq!(wire::encode(&opt).to_vec(), b);
}

#[test]
fn test_decode_too_short() {
    assert_eq!(
        wire::decode(&SINGLE_RELAY[..17]),
        Err(SixRdError::TooShort { len: 17 })
    );
    assert_eq!(wire::decode(&[]), Err(SixRdError::TooShort { len: 0 }));
}

#[test]
fn test_decode_trailing_bytes() {
    assert_eq!(
        wire::decode(&SINGLE_RELAY[..21]),
        Err(SixRdError::TrailingBytes { len: 3 })
    );
}

#[test]
fn test_decode_does_not_validate_lengths() {
    let mut b = SINGLE_RELAY;
    b[0] = 40;
    b[1] = 200;
    let opt = wire::decode(&b).unwrap();
    assert_eq!(opt.mask_len(), 40);
    assert_eq!(opt.prefix_len(), 200);
}

#[test]
fn test_dhclient_long_form() {
    let opt = dhclient::decode("0 32 8193 3512 0 0 0 0 0 0 192.0.2.1").unwrap();

    assert_eq!(opt.mask_len(), 0);
    assert_eq!(opt.prefix_len(), 32);
    assert_eq!(opt.prefix().to_string(), "2001:db8::");
    assert_eq!(opt.relays(), &[Ipv4Addr::new(192, 0, 2, 1)]);
}

#[test]
fn test_dhclient_short_form_matches_long_form() {
    let short: Option6rd = "0 32 2001:db8:: 192.0.2.1".parse().unwrap();
    let long: Option6rd = "0 32 8193 3512 0 0 0 0 0 0 192.0.2.1".parse().unwrap();
    assert_eq!(short, long);
}

#[test]
fn test_dhclient_encode_is_long_form() {
    let opt: Option6rd = "12 36 2001:db8:f000:: 10.254.1.1 10.254.1.2".parse().unwrap();
    assert_eq!(
        opt.to_dhclient_string(),
        "12 36 8193 3512 61440 0 0 0 0 0 10.254.1.1 10.254.1.2"
    );
    assert_eq!(opt.to_string(), opt.to_dhclient_string());
    assert_eq!(dhclient::decode(&opt.to_dhclient_string()).unwrap(), opt);
}

#[test]
fn test_dhclient_long_form_without_relays() {
    let opt = dhclient::decode("0 32 8193 3512 0 0 0 0 0 0").unwrap();
    assert!(opt.relays().is_empty());
    assert_eq!(dhclient::encode(&opt), "0 32 8193 3512 0 0 0 0 0 0");
}

#[test]
fn test_dhclient_tolerates_extra_whitespace() {
    let opt = dhclient::decode("  0  32\t2001:db8::  192.0.2.1\n").unwrap();
    assert_eq!(opt.relays(), &[Ipv4Addr::new(192, 0, 2, 1)]);
}

#[test]
fn test_dhclient_too_few_fields() {
    assert_eq!(
        dhclient::decode("0 32 2001:db8::"),
        Err(SixRdError::TooFewFields {
            found: 3,
            needed: 4
        })
    );
    assert_eq!(
        dhclient::decode("0 32 8193 3512 0 0 0 0 0"),
        Err(SixRdError::TooFewFields {
            found: 9,
            needed: 10
        })
    );
    assert!(matches!(
        dhclient::decode(""),
        Err(SixRdError::TooFewFields { found: 0, .. })
    ));
}

#[test]
fn test_dhclient_invalid_integer() {
    assert!(matches!(
        dhclient::decode("x 32 2001:db8:: 192.0.2.1"),
        Err(SixRdError::InvalidInteger {
            field: "mask_len",
            ..
        })
    ));
    assert!(matches!(
        dhclient::decode("0 300 2001:db8:: 192.0.2.1"),
        Err(SixRdError::InvalidInteger {
            field: "prefix_len",
            ..
        })
    ));
    assert!(matches!(
        dhclient::decode("0 32 8193 65536 0 0 0 0 0 0 192.0.2.1"),
        Err(SixRdError::InvalidInteger { .. })
    ));
}

#[test]
fn test_dhclient_invalid_address() {
    assert_eq!(
        dhclient::decode("0 32 2001:db8:: 192.0.2"),
        Err(SixRdError::InvalidAddress("192.0.2".to_string()))
    );
    assert_eq!(
        dhclient::decode("0 32 2001::db8:: 192.0.2.1"),
        Err(SixRdError::InvalidAddress("2001::db8::".to_string()))
    );
    assert!(matches!(
        dhclient::decode("0 32 2001:db8:: 2001:db8::1"),
        Err(SixRdError::InvalidAddress(_))
    ));
}

#[test]
fn test_new_validates_lengths() {
    let prefix: Ipv6Addr = "2001:db8::".parse().unwrap();

    assert!(Option6rd::new(0, 32, prefix, vec![]).is_ok());
    assert!(Option6rd::new(0, 96, prefix, vec![]).is_ok());
    assert_eq!(
        Option6rd::new(33, 32, prefix, vec![]),
        Err(SixRdError::MaskLenOutOfRange(33))
    );
    assert_eq!(
        Option6rd::new(32, 129, prefix, vec![]),
        Err(SixRdError::PrefixLenOutOfRange(129))
    );
    assert_eq!(
        Option6rd::new(0, 97, prefix, vec![]),
        Err(SixRdError::PrefixOverflow {
            prefix_len: 97,
            mask_len: 0
        })
    );
}

#[test]
fn test_constructed_option_round_trips() {
    let relays = vec![Ipv4Addr::new(192, 0, 2, 1), Ipv4Addr::new(198, 51, 100, 7)];
    let opt = Option6rd::new(8, 28, "2001:db0::".parse().unwrap(), relays).unwrap();

    assert_eq!(wire::decode(&opt.to_bytes()).unwrap(), opt);
    assert_eq!(opt.to_dhclient_string().parse::<Option6rd>().unwrap(), opt);
    assert_eq!(opt.to_bytes().len(), WIRE_HEADER_LEN + 8);
}
