use revar_core::range::Requirement;
use revar_core::version::VersionToken;

fn v(text: &str) -> VersionToken {
    VersionToken::parse(text).unwrap()
}

#[test]
fn ordering_is_a_strict_total_order() {
    let versions = [
        v("0.9"),
        v("1"),
        v("1.55"),
        v("1.55.3"),
        v("1.72.0"),
        v("1.80"),
        v("1.80.0.1"),
        v("1.80.0.2"),
        v("2017"),
    ];
    for (i, a) in versions.iter().enumerate() {
        assert_eq!(a, a);
        for b in &versions[i + 1..] {
            assert!(a < b, "{a} should precede {b}");
            assert!(b > a);
        }
    }
}

#[test]
fn ordering_is_consistent_with_range_checks() {
    let range = Requirement::parse("boost-1.72<1.80").unwrap().range;
    assert!(range.contains(&v("1.72.0")));
    assert!(range.contains(&v("1.79.9")));
    assert!(!range.contains(&v("1.80")));
    assert!(!range.contains(&v("1.80.0.2")));
    assert!(!range.contains(&v("1.71")));
}

#[test]
fn ordering_is_consistent_with_prefix_pins() {
    let pin = Requirement::parse("boost-1.72").unwrap().range;
    assert!(pin.contains(&v("1.72")));
    assert!(pin.contains(&v("1.72.0")));
    assert!(!pin.contains(&v("1.720")));
    assert!(!pin.contains(&v("1.80")));
}
