//! Shared test utilities for integration tests
//!
//! Builds throwaway sample-model corpora laid out the way the generator
//! expects them: `<tmp>/models/2.0/<sample dirs>`.

#![allow(dead_code)]

use std::process::Command;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;

/// Create a temp project with a corpus under `models/2.0`.
/// Each entry is `(path below 2.0, file contents)`.
pub fn make_corpus(files: &[(&str, &str)]) -> assert_fs::TempDir
{
    // Initialize the temporary project root
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    for (rel, contents) in files
    {
        tmp.child(format!("models/2.0/{rel}"))
            .write_str(contents)
            .expect("write sample");
    }

    tmp
}

/// `samplegen` run inside `tmp` with the base directory in the environment.
pub fn samplegen(tmp: &assert_fs::TempDir) -> Command
{
    let mut cmd = Command::cargo_bin("samplegen").expect("bin");
    cmd.current_dir(tmp.path())
        .env("GLTF_SAMPLE_MODELS", tmp.path().join("models"))
        .env_remove("SAMPLEGEN_OUTPUT")
        .env_remove("SAMPLEGEN_SUBDIR")
        .env_remove("RUST_LOG");
    cmd
}

/// `samplegen` run from the crate root against the bundled `tests/fixtures` corpus.
pub fn samplegen_in_repo() -> Command
{
    let mut cmd = Command::cargo_bin("samplegen").expect("bin");
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("GLTF_SAMPLE_MODELS", "tests/fixtures/models")
        .env_remove("SAMPLEGEN_OUTPUT")
        .env_remove("SAMPLEGEN_SUBDIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Contents of the default output file.
pub fn read_output(tmp: &assert_fs::TempDir) -> String
{
    std::fs::read_to_string(tmp.path().join("tests/gltf_samples.rs")).expect("output written")
}
