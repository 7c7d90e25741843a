#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_extraction(&outdir_path, "default_extraction.rs")?;
    Ok(())
}

/// Create default_extraction.rs, containing definition of constant DEFAULT_PREFER_CHAR_CONV
fn write_default_extraction(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let prefer_char_conv = env::var("RUST_BIGNUM_ARRAY_PREFER_CHAR_CONV")
        .map(|s| s.parse::<bool>().expect("$RUST_BIGNUM_ARRAY_PREFER_CHAR_CONV must be `true` or `false`"))
        .unwrap_or(false);

    let default_extraction_rs_path = outdir_path.join(filename);

    let default_extraction = format!("const DEFAULT_PREFER_CHAR_CONV: bool = {prefer_char_conv};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_extraction_rs_path) {
        Ok(existing_contents) if existing_contents == default_extraction => {},
        _ => {
            let mut default_extraction_rs = File::create(&default_extraction_rs_path)
                .expect("Could not create default_extraction.rs");
            write!(default_extraction_rs, "{default_extraction}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", default_extraction_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_BIGNUM_ARRAY_PREFER_CHAR_CONV");

    Ok(())
}
