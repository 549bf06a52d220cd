use super::{ErrorKind, IStr, Nl};

#[test]
fn test_lines() {
    let mut input = IStr::new(b"467..114..\n...*......\n", 0);
    assert_eq!(input.try_line::<&[u8]>().unwrap(), Some(&b"467..114.."[..]));
    assert_eq!(input.index(), 11);
    assert_eq!(input.try_line::<&[u8]>().unwrap(), Some(&b"...*......"[..]));
    assert_eq!(input.try_line::<&[u8]>().unwrap(), None);
    assert!(input.is_empty());
}

#[test]
fn test_lines_without_trailing_newline() {
    let mut input = IStr::new(b"ab\ncd", 0);
    assert_eq!(input.try_line::<&[u8]>().unwrap(), Some(&b"ab"[..]));
    assert_eq!(input.try_line::<&[u8]>().unwrap(), Some(&b"cd"[..]));
    assert_eq!(input.try_line::<&[u8]>().unwrap(), None);
}

#[test]
fn test_expected_line() {
    let mut input = IStr::new(b"ab\ncd", 0);
    assert_eq!(input.line::<&[u8]>().unwrap(), b"ab");
    assert_eq!(input.line::<&[u8]>().unwrap(), b"cd");

    let err = input.line::<&[u8]>().unwrap_err();
    assert_eq!(err.span(), 5..5);
    assert!(matches!(err.kind(), ErrorKind::ExpectedLine));
}

#[test]
fn test_integers() {
    let mut input = IStr::new(b"12 34\n56\n", 0);
    assert_eq!(input.next::<u32>().unwrap(), 12);
    assert_eq!(input.next::<u32>().unwrap(), 34);
    assert_eq!(input.next::<u32>().unwrap(), 56);
    assert!(input.try_next::<u32>().unwrap().is_none());
}

#[test]
fn test_not_integer() {
    let mut input = IStr::new(b"12x", 0);

    let err = input.next::<u32>().unwrap_err();
    assert_eq!(err.span(), 0..3);
    assert_eq!(
        err.to_string(),
        "not an integer or integer overflow `12x` (at 0..3)"
    );
    assert!(matches!(err.kind(), ErrorKind::NotInteger("12x")));
}

#[test]
fn test_not_utf8() {
    let mut input = IStr::new(b"\xff\xfe", 0);

    let err = input.next::<&str>().unwrap_err();
    assert_eq!(err.span(), 0..2);
    assert!(matches!(err.kind(), ErrorKind::NotUtf8));
}

#[test]
fn test_ws() {
    let mut input = IStr::new(b"\n\n  abc", 0);
    assert_eq!(input.ws().unwrap(), 2);
    assert_eq!(input.as_bstr(), "abc");
    assert_eq!(input.len(), 3);
    assert_eq!(input.ws().unwrap(), 0);
}

#[test]
fn test_nl() {
    let mut input = IStr::new(b"42\nrest", 0);

    let Nl(n) = input.next::<Nl<u32>>().unwrap();
    assert_eq!(n, 42);
    assert_eq!(input.as_data(), b"rest");

    let err = input.next::<Nl<u32>>().unwrap_err();
    assert_eq!(err.span(), 3..7);
    assert!(matches!(err.kind(), ErrorKind::NotInteger("rest")));
}

#[test]
fn test_rest_as_str() {
    let mut input = IStr::new(b"hello world", 0);
    assert_eq!(input.next::<&str>().unwrap(), "hello world");
    assert!(input.is_empty());
}
