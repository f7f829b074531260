// tests/argument_builder.rs

use std::path::{Path, PathBuf};

use web_optimizer::config::{ConfigFile, HostContext, ResolvedConfig, split_options};
use web_optimizer::exec::{
    SKIP_REBASE_FLAG, build_css_invocation, build_invocation, build_js_invocation,
};
use web_optimizer::types::{AssetKind, Platform};
use web_optimizer_test_utils::builders::ConfigFileBuilder;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resolve(cfg: &ConfigFile) -> ResolvedConfig {
    let host = HostContext::new(std::env::temp_dir().join("project"), "site");
    ResolvedConfig::resolve(cfg, &host, Platform::Unix)
}

#[test]
fn css_without_rebase_starts_with_skip_rebase() {
    let out = Path::new("out").join("app.css");
    let inv = build_css_invocation("cleancss", false, &[], &out, &[PathBuf::from("x.css")]);

    let expected = vec![
        "--skip-rebase".to_string(),
        "-o".to_string(),
        out.to_string_lossy().into_owned(),
        "x.css".to_string(),
    ];
    assert_eq!(inv.program(), "cleancss");
    assert_eq!(inv.args(), expected.as_slice());
}

#[test]
fn css_with_rebase_omits_skip_rebase() {
    let inv = build_css_invocation(
        "cleancss",
        true,
        &[],
        Path::new("app.css"),
        &[PathBuf::from("a.css"), PathBuf::from("b.css")],
    );

    assert!(!inv.args().iter().any(|a| a == SKIP_REBASE_FLAG));
    assert_eq!(inv.args(), strings(&["-o", "app.css", "a.css", "b.css"]).as_slice());
}

#[test]
fn css_options_follow_skip_rebase_and_precede_output() {
    let inv = build_css_invocation(
        "cleancss",
        false,
        &strings(&["-d", "--level", "2"]),
        Path::new("app.css"),
        &[PathBuf::from("a.css")],
    );

    assert_eq!(
        inv.args(),
        strings(&["--skip-rebase", "-d", "--level", "2", "-o", "app.css", "a.css"]).as_slice()
    );
}

#[test]
fn js_flags_then_output_then_inputs() {
    let inv = build_js_invocation(
        "uglifyjs",
        &strings(&["-c", "-m", "--stats"]),
        Path::new("app.js"),
        &[PathBuf::from("lib/a.js"), PathBuf::from("b.js")],
    );

    assert_eq!(
        inv.args(),
        strings(&["-c", "-m", "--stats", "-o", "app.js", "lib/a.js", "b.js"]).as_slice()
    );
    assert_eq!(inv.to_string(), "uglifyjs -c -m --stats -o app.js lib/a.js b.js");
}

#[test]
fn js_defaults_to_compress_and_mangle() {
    let resolved = resolve(&ConfigFile::default());
    let out = resolved.bundle_path(AssetKind::Js);

    let inv = build_invocation(AssetKind::Js, &resolved.js, &out, &[PathBuf::from("a.js")]);

    assert_eq!(inv.program(), "uglifyjs");
    assert_eq!(
        inv.args(),
        vec![
            "-c".to_string(),
            "-m".to_string(),
            "-o".to_string(),
            out.to_string_lossy().into_owned(),
            "a.js".to_string(),
        ]
        .as_slice()
    );
}

#[test]
fn blank_js_options_mean_no_flags() {
    let cfg = ConfigFileBuilder::new().js_options("  ").build();
    let resolved = resolve(&cfg);

    let inv = build_invocation(
        AssetKind::Js,
        &resolved.js,
        Path::new("app.js"),
        &[PathBuf::from("a.js")],
    );

    assert_eq!(inv.args(), strings(&["-o", "app.js", "a.js"]).as_slice());
}

#[test]
fn css_rebase_setting_flows_through_resolution() {
    let default_css = resolve(&ConfigFile::default());
    let inv = build_invocation(
        AssetKind::Css,
        &default_css.css,
        Path::new("app.css"),
        &[PathBuf::from("x.css")],
    );
    assert_eq!(inv.args()[0], SKIP_REBASE_FLAG);

    let rebased = resolve(&ConfigFileBuilder::new().css_rebase(true).build());
    let inv = build_invocation(
        AssetKind::Css,
        &rebased.css,
        Path::new("app.css"),
        &[PathBuf::from("x.css")],
    );
    assert_eq!(inv.args(), strings(&["-o", "app.css", "x.css"]).as_slice());
}

#[test]
fn option_strings_split_on_spaces_and_tabs() {
    assert_eq!(split_options("-c -m"), strings(&["-c", "-m"]));
    assert_eq!(
        split_options("  -c\t-m  \t --stats "),
        strings(&["-c", "-m", "--stats"])
    );
    assert!(split_options("").is_empty());
    assert!(split_options(" \t ").is_empty());
}
