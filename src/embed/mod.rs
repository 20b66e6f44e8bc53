use log::info;
use std::path::Path;

use crate::utils::error::{BoxResult, DoctoolError};
use crate::utils::fs;

const GENERATED_WARNING: &str = "\n// This is a generated file. Do not edit.\n\n";
const VAR_TYPE: &str = "const char *";
const VAR_PREFIX: &str = "s_";

/// Embed a text resource as a generated C++ string constant
///
/// Reads `source` and writes `<output_base>.cpp` holding the escaped string
/// literal and `<output_base>.h` holding the matching `extern` declaration.
/// The constant is named `s_<file stem>_code`.
pub fn embed_resource<P: AsRef<Path>, Q: AsRef<Path>>(source: P, output_base: Q) -> BoxResult<()> {
    let source = source.as_ref();
    let base = output_base.as_ref().to_string_lossy();

    info!("Reading {}", source.display());
    let text = fs::read_file(source)?;

    let var_name = variable_name(source)?;
    let cpp_path = format!("{}.cpp", base);
    let header_path = format!("{}.h", base);
    let header_include = Path::new(&header_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| header_path.clone());

    // One string fragment per source line, line endings kept inside the literal
    let literal = text
        .split_inclusive('\n')
        .map(|line| format!("\n\t\"{}\"", escape_line(line)))
        .collect::<String>();

    let cpp_source = format!(
        "{}#include \"{}\"\n\n{}{} ={};\n",
        GENERATED_WARNING, header_include, VAR_TYPE, var_name, literal
    );
    let header_source = format!("{}extern {}{};", GENERATED_WARNING, VAR_TYPE, var_name);

    info!("Writing {}", cpp_path);
    fs::write_file(&cpp_path, &cpp_source)?;

    info!("Writing {}", header_path);
    fs::write_file(&header_path, &header_source)?;

    info!("Done");
    Ok(())
}

/// Derive the generated constant's name from the input filename
fn variable_name(source: &Path) -> BoxResult<String> {
    let file_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            DoctoolError::Embed(format!("invalid input filename: {}", source.display()))
        })?;
    let stem = file_name.split('.').next().unwrap_or(file_name);

    Ok(format!("{}{}_code", VAR_PREFIX, stem))
}

// TODO: escape backslashes and double quotes as well
fn escape_line(line: &str) -> String {
    line.replace('\t', "\\t").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_variable_name_uses_file_stem() {
        let name = variable_name(Path::new("shaders/default_shader.txt")).unwrap();
        assert_eq!(name, "s_default_shader_code");
    }

    #[test]
    fn test_variable_name_stops_at_first_dot() {
        let name = variable_name(Path::new("water.shader.txt")).unwrap();
        assert_eq!(name, "s_water_code");
    }

    #[test]
    fn test_escape_line() {
        assert_eq!(escape_line("\tuniform vec4 color;\n"), "\\tuniform vec4 color;\\n");
    }

    #[test]
    fn test_embed_resource_writes_source_pair() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("default_shader.txt");
        let base = dir.path().join("resources.gen");
        fs::write_file(&source, "shader_type spatial;\n\trender_mode blend_mix;\n").unwrap();

        embed_resource(&source, &base).unwrap();

        let cpp = fs::read_file(dir.path().join("resources.gen.cpp")).unwrap();
        let header = fs::read_file(dir.path().join("resources.gen.h")).unwrap();

        assert!(cpp.starts_with("\n// This is a generated file. Do not edit.\n\n"));
        assert!(cpp.contains("#include \"resources.gen.h\""));
        assert!(cpp.contains("const char *s_default_shader_code ="));
        assert!(cpp.contains("\n\t\"shader_type spatial;\\n\""));
        assert!(cpp.contains("\n\t\"\\trender_mode blend_mix;\\n\""));
        assert!(cpp.trim_end().ends_with("\";"));

        assert_eq!(
            header,
            "\n// This is a generated file. Do not edit.\n\nextern const char *s_default_shader_code;"
        );
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let base = dir.path().join("resources.gen");

        assert!(embed_resource(&missing, &base).is_err());
    }
}
