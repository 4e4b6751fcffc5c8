use crate::core::codec;
use crate::utils::error::Result;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Reads the raw payload from `input`, or from stdin when no path is given.
pub fn read_payload(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) => {
            tracing::debug!("Reading payload from {}", path);
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Writes `text` to `output`, or to stdout when no path is given.
pub fn write_payload(output: Option<&str>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            let full_path = Path::new(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, format!("{}\n", text))?;
            tracing::debug!("Wrote payload to {}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }
    Ok(())
}

/// Reads one payload, normalizes it and writes the canonical form.
pub fn normalize_file(input: Option<&str>, output: Option<&str>, pretty: bool) -> Result<String> {
    let raw = read_payload(input)?;
    let canonical = codec::normalize_json_str(&raw, pretty)?;
    write_payload(output, &canonical)?;
    Ok(canonical)
}
