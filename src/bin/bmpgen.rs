use std::env;

use anyhow::{Context, Result};

const TEST_FILENAME: &str = "test.bmp";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => {
            let written = bmpgen::write_default_bitmap()
                .with_context(|| format!("failed to write {}", bmpgen::DEFAULT_FILENAME))?;
            log::info!("wrote {}", bmpgen::DEFAULT_FILENAME);
            println!("{written}");
        }
        Some("test") => {
            println!("Running test code");
            let written = bmpgen::write_bitmap(
                bmpgen::DEFAULT_WIDTH,
                bmpgen::DEFAULT_HEIGHT,
                TEST_FILENAME,
            )
            .with_context(|| format!("failed to write {TEST_FILENAME}"))?;
            log::info!("wrote {TEST_FILENAME}");
            println!("{written}");
        }
        Some(other) => {
            eprintln!("usage: bmpgen [test]");
            anyhow::bail!("unknown argument '{other}'");
        }
    }

    Ok(())
}
