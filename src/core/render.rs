//! Filepath: src/core/render.rs
//! Text templates for the generated test file.
//!
//! The output is the preamble followed by one `#[test]` per case. The container
//! parser is `gltf::Glb` and the tree parser is `serde_json::Value`; both are
//! resolved by the crate that compiles the generated file.

use crate::core::naming::{GeneratedTestCase, SampleFormat};

/// Emitted once per file. `{{env}}` and `{{subdir}}` take Rust string literals.
pub const PREAMBLE: &str = r#"// @generated by samplegen. Do not edit; rerun `samplegen generate`.
#![allow(dead_code, non_snake_case)]

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const SAMPLES_ENV: &str = {{env}};
const SAMPLES_SUBDIR: &str = {{subdir}};

fn get_path(relative: &str) -> PathBuf {
    static BASE: OnceLock<PathBuf> = OnceLock::new();
    let base = BASE.get_or_init(|| match std::env::var_os(SAMPLES_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => panic!("{SAMPLES_ENV} is not set"),
    });
    base.join(SAMPLES_SUBDIR).join(relative)
}

fn read_all_bytes(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_default()
}
"#;

const LENIENT_CHECKS: &str = r#"    if !path.exists() {
        eprintln!("{} not exists", path.display());
    }
    let bytes = read_all_bytes(&path);
    if bytes.is_empty() {
        eprintln!("{} 0 bytes", path.display());
        return;
    }
"#;

const CONTAINER_PARSE: &str = r#"    let glb = match gltf::Glb::from_slice(&bytes) {
        Ok(glb) => glb,
        Err(err) => panic!("{}: container parse failed: {err}", path.display()),
    };
    if let Err(err) = serde_json::from_slice::<serde_json::Value>(&glb.json) {
        panic!("{}: json chunk parse failed: {err}", path.display());
    }
"#;

const PLAIN_PARSE: &str = r#"    if let Err(err) = serde_json::from_slice::<serde_json::Value>(&bytes) {
        panic!("{}: json parse failed: {err}", path.display());
    }
"#;

/// Preamble with the environment variable and sub-path segment filled in.
pub fn render_preamble(
    env_var: &str,
    subdir: &str,
) -> String
{
    PREAMBLE
        .replace("{{env}}", &format!("{env_var:?}"))
        .replace("{{subdir}}", &format!("{subdir:?}"))
}

/// One self-contained test block, preceded by a blank line.
pub fn render_case(case: &GeneratedTestCase) -> String
{
    let mut out = String::with_capacity(LENIENT_CHECKS.len() + CONTAINER_PARSE.len() + 128);

    out.push_str("\n#[test]\n");
    if case.empty
    {
        out.push_str("#[ignore = \"zero-byte sample\"]\n");
    }
    out.push_str(&format!("fn {}() {{\n", case.name));
    out.push_str(&format!("    let path = get_path({:?});\n", case.relative));
    out.push_str(LENIENT_CHECKS);

    match case.format
    {
        SampleFormat::Container => out.push_str(CONTAINER_PARSE),
        SampleFormat::Plain => out.push_str(PLAIN_PARSE),
    }

    out.push_str("}\n");
    out
}

/// Full file text: preamble, then every case in order.
pub fn render_output(
    env_var: &str,
    subdir: &str,
    cases: &[GeneratedTestCase],
) -> String
{
    let mut out = render_preamble(env_var, subdir);
    for case in cases
    {
        out.push_str(&render_case(case));
    }
    out
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn case(
        name: &str,
        relative: &str,
        format: SampleFormat,
    ) -> GeneratedTestCase
    {
        GeneratedTestCase {
            name: name.to_string(),
            relative: relative.to_string(),
            format,
            empty: false,
        }
    }

    #[test]
    fn test_preamble_substitutes_literals()
    {
        let text = render_preamble("GLTF_SAMPLE_MODELS", "2.0");

        assert!(text.contains("const SAMPLES_ENV: &str = \"GLTF_SAMPLE_MODELS\";"));
        assert!(text.contains("const SAMPLES_SUBDIR: &str = \"2.0\";"));
        assert!(!text.contains("{{"));
        assert!(text.contains("fn get_path(relative: &str) -> PathBuf"));
        assert!(text.contains("fn read_all_bytes(path: &Path) -> Vec<u8>"));
    }

    #[test]
    fn test_container_case_parses_glb_then_json_chunk()
    {
        let text = render_case(&case("Bar_Baz", "Bar Baz/model.glb", SampleFormat::Container));

        assert!(text.starts_with("\n#[test]\nfn Bar_Baz() {\n"));
        assert!(text.contains("let path = get_path(\"Bar Baz/model.glb\");"));
        assert!(text.contains("gltf::Glb::from_slice(&bytes)"));
        assert!(text.contains("serde_json::from_slice::<serde_json::Value>(&glb.json)"));
        assert!(!text.contains("#[ignore"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_plain_case_parses_whole_buffer()
    {
        let text = render_case(&case("Foo", "Foo/model.gltf", SampleFormat::Plain));

        assert!(text.contains("serde_json::from_slice::<serde_json::Value>(&bytes)"));
        assert!(!text.contains("gltf::Glb"));
    }

    #[test]
    fn test_soft_fail_checks_precede_parse()
    {
        let text = render_case(&case("Foo", "Foo/model.gltf", SampleFormat::Plain));

        let missing = text.find("not exists").unwrap();
        let empty = text.find("0 bytes").unwrap();
        let parse = text.find("serde_json::from_slice").unwrap();
        assert!(missing < empty && empty < parse);
        assert!(text.contains("        return;\n"));
    }

    #[test]
    fn test_empty_sample_is_ignored()
    {
        let mut c = case("Empty", "Empty/e.gltf", SampleFormat::Plain);
        c.empty = true;

        let text = render_case(&c);

        assert!(text.contains("#[test]\n#[ignore = \"zero-byte sample\"]\nfn Empty() {"));
    }

    #[test]
    fn test_relative_path_is_escaped_as_literal()
    {
        let text = render_case(&case("Q", "Q/we\"ird\\name.gltf", SampleFormat::Plain));

        assert!(text.contains(r#"get_path("Q/we\"ird\\name.gltf")"#));
    }

    #[test]
    fn test_output_is_preamble_then_blocks_in_order()
    {
        let cases = vec![
            case("A", "A/a.gltf", SampleFormat::Plain),
            case("B", "B/b.glb", SampleFormat::Container),
        ];

        let text = render_output("GLTF_SAMPLE_MODELS", "2.0", &cases);

        assert!(text.starts_with("// @generated by samplegen."));
        assert_eq!(text.matches("#[test]").count(), 2);
        assert!(text.find("fn A()").unwrap() < text.find("fn B()").unwrap());
    }

    #[test]
    fn test_no_cases_is_preamble_only()
    {
        let text = render_output("GLTF_SAMPLE_MODELS", "2.0", &[]);

        assert_eq!(text, render_preamble("GLTF_SAMPLE_MODELS", "2.0"));
        assert!(!text.contains("#[test]"));
    }
}
