use revar_core::constraint::Constraint;
use revar_core::manifest::{EnvOp, ManifestRecord};
use revar_core::range::VersionRange;
use revar_core::version::VersionToken;

const TURRET_MANIFEST: &str = r#"
name = "turret_lib"
version = "0.0.3"
authors = ["ben.skinner", "daniel.flood"]
requires = ["libzmq-4", "cppzmq-4", "boost-1.55"]
build-requires = ["cmake-3.2"]
variants = [["platform-linux", "arch-x86_64"]]

[[env]]
op = "set"
var = "LIBTURRET_ROOT"
value = "{this.root}"

[[env]]
op = "append"
var = "LD_LIBRARY_PATH"
value = "{root}/lib"
"#;

#[test]
fn loads_full_manifest() {
    let m = ManifestRecord::from_str(TURRET_MANIFEST).unwrap();

    assert_eq!(m.name, "turret_lib");
    assert_eq!(m.version, VersionToken::parse("0.0.3").unwrap());
    assert_eq!(m.authors.len(), 2);

    assert_eq!(m.requires.len(), 3);
    assert_eq!(m.requires[2].name, "boost");
    assert!(matches!(m.requires[2].range, VersionRange::Prefix(_)));

    assert_eq!(m.build_requires.len(), 1);
    assert_eq!(m.build_requires[0].name, "cmake");
    assert!(m.private_build_requires.is_empty());

    assert_eq!(m.variants.len(), 1);
    assert_eq!(m.variants[0].constraints().len(), 2);
    assert_eq!(m.variants[0].subpath(), "platform-linux/arch-x86_64");

    assert_eq!(
        m.env,
        vec![
            EnvOp::Set {
                var: "LIBTURRET_ROOT".to_string(),
                value: "{this.root}".to_string(),
            },
            EnvOp::Append {
                var: "LD_LIBRARY_PATH".to_string(),
                value: "{root}/lib".to_string(),
            },
        ]
    );
}

#[test]
fn defaults_for_omitted_sections() {
    let m = ManifestRecord::from_str("name = \"tiny\"\nversion = \"1\"\n").unwrap();
    assert!(m.requires.is_empty());
    assert!(m.variants.is_empty());
    assert!(m.env.is_empty());
    assert!(m.description.is_none());
}

#[test]
fn exclusion_constraints_load() {
    let m = ManifestRecord::from_str(
        r#"
name = "pkg"
version = "2.0"
variants = [["!katana"], ["tbb_katana-2017"]]
"#,
    )
    .unwrap();
    assert_eq!(
        m.variants[0].constraints()[0],
        Constraint::Excludes("katana".to_string())
    );
}

#[test]
fn malformed_version_fails_at_load() {
    let err = ManifestRecord::from_str("name = \"pkg\"\nversion = \"1..0\"\n").unwrap_err();
    assert!(err.to_string().contains("Malformed version"));
}

#[test]
fn malformed_requirement_fails_at_load() {
    let err = ManifestRecord::from_str(
        "name = \"pkg\"\nversion = \"1.0\"\nrequires = [\"boost-\"]\n",
    )
    .unwrap_err();
    assert!(err.to_string().contains("Malformed version"));
}

#[test]
fn conflicting_variant_fails_at_load() {
    let err = ManifestRecord::from_str(
        r#"
name = "pkg"
version = "1.0"
variants = [["katana-4", "!katana"]]
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("requires and excludes"));
}

#[test]
fn bad_toml_is_a_manifest_error() {
    let err = ManifestRecord::from_str("name = ").unwrap_err();
    assert!(err.to_string().contains("Manifest error"));
}

#[test]
fn unknown_env_op_rejected() {
    let err = ManifestRecord::from_str(
        r#"
name = "pkg"
version = "1.0"

[[env]]
op = "unset"
var = "X"
value = ""
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Manifest error"));
}
