mod common;

use common::TestContext;
use predicates::prelude::*;

const WINDOWS_DEBUG: &str = r#"
project: softgpu
settings:
  os: windows
  compiler: msvc
  arch: x86_64
  build_type: Debug
requires:
  - name: tauutils
    version: "^1.3.10"
"#;

const LINUX_RELEASE: &str = r#"
project: demo
settings:
  os: linux
  compiler: gcc
  arch: x86_64
  build_type: Release
requires:
  - name: zlib
    version: "^1.3"
profiles:
  cross:
    generators:
      - cmake
"#;

#[test]
fn debug_build_produces_default_and_testsetup_configurations() {
    let ctx = TestContext::new();
    ctx.write_manifest(WINDOWS_DEBUG);

    ctx.cli()
        .arg("gen")
        .assert()
        .success()
        .stdout(predicate::str::contains("msbuild (default)"))
        .stdout(predicate::str::contains("msbuild (TestSetup)"));

    ctx.assert_generated("default/tauutils.props");
    ctx.assert_generated("testsetup/tauutils.props");
    ctx.assert_generated("manifest.toml");
    assert!(ctx.read_generated("default/tauutils.props").contains("^1.3.10"));
    assert!(ctx.read_generated("testsetup/tauutils.props").contains("^1.3.10"));
}

#[test]
fn release_build_produces_only_the_default_configuration() {
    let ctx = TestContext::new();
    ctx.write_manifest(WINDOWS_DEBUG);

    ctx.cli().args(["gen", "--build-type", "Release"]).assert().success();

    ctx.assert_generated("default/tauutils.props");
    ctx.assert_not_generated("testsetup");
}

#[test]
fn generation_is_idempotent() {
    let ctx = TestContext::new();
    ctx.write_manifest(LINUX_RELEASE);

    ctx.cli().args(["gen", "--profile", "cross"]).assert().success();
    let first = ctx.snapshot_generated();

    ctx.cli().args(["gen", "--profile", "cross"]).assert().success();
    let second = ctx.snapshot_generated();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn cross_profile_adds_cmake_and_toolchain_independent_of_variant() {
    let ctx = TestContext::new();
    ctx.write_manifest(LINUX_RELEASE);

    ctx.cli().args(["gen", "--profile", "cross"]).assert().success();

    ctx.assert_generated("default/zlib.pc");
    ctx.assert_generated("cmake/zlib-config.cmake");
    ctx.assert_generated("cmake/deps.cmake");
    ctx.assert_generated("toolchain/toolchain.cmake");
}

#[test]
fn conflicting_dependency_declarations_abort_before_writing() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"
project: demo
settings: {os: linux, compiler: gcc, arch: x86_64, build_type: Release}
requires:
  - {name: zlib, version: "^1.2"}
  - {name: zlib, version: "^1.3"}
"#,
    );

    ctx.cli()
        .arg("gen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("declared twice"));

    assert!(!ctx.work_dir().join("generators").exists());
}

#[test]
fn empty_layout_override_aborts_before_writing() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"
project: demo
settings: {os: linux, compiler: gcc, arch: x86_64, build_type: Release}
layout: {folder: ""}
"#,
    );

    ctx.cli()
        .arg("gen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("generators folder"));

    assert!(!ctx.work_dir().join("generators").exists());
}

#[test]
fn unknown_build_variant_aborts_with_the_allowed_values() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"
project: demo
settings: {os: linux, compiler: gcc, arch: x86_64, build_type: Coverage}
"#,
    );

    ctx.cli()
        .arg("gen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid build type 'Coverage'"));
}

#[test]
fn unavailable_generator_is_reported_while_others_complete() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"
project: demo
settings: {os: linux, compiler: gcc, arch: x86_64, build_type: Release}
requires:
  - {name: zlib, version: "^1.3"}
profiles:
  default:
    generators: [msbuild, cmake]
"#,
    );

    ctx.cli()
        .arg("gen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("msbuild"))
        .stderr(predicate::str::contains("not available"));

    // The failing task did not stop the rest of the run.
    ctx.assert_generated("default/zlib.pc");
    ctx.assert_generated("cmake/deps.cmake");
    ctx.assert_generated("toolchain/toolchain.cmake");
    ctx.assert_not_generated("msbuild");
}

#[test]
fn unknown_profile_lists_the_available_presets() {
    let ctx = TestContext::new();
    ctx.write_manifest(LINUX_RELEASE);

    ctx.cli()
        .args(["gen", "--profile", "ci"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'ci' not found"))
        .stderr(predicate::str::contains("cross"));
}

#[test]
fn force_static_applies_before_generation() {
    let ctx = TestContext::new();
    ctx.write_manifest(LINUX_RELEASE);

    ctx.cli().args(["gen", "--force-static", "zlib"]).assert().success();

    assert!(ctx.read_generated("default/zlib.pc").contains("-Wl,-Bstatic"));
}

#[test]
fn layout_override_redirects_all_artifacts() {
    let ctx = TestContext::new();
    ctx.write_manifest(
        r#"
project: demo
settings: {os: linux, compiler: gcc, arch: x86_64, build_type: Release}
requires:
  - {name: zlib, version: "^1.3"}
layout:
  folder: libs/deps
"#,
    );

    ctx.cli().arg("gen").assert().success();

    assert!(ctx.work_dir().join("libs/deps/default/zlib.pc").exists());
    assert!(ctx.work_dir().join("libs/deps/manifest.toml").exists());
    assert!(!ctx.work_dir().join("generators").exists());
}
