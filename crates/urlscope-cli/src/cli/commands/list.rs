//! `urlscope list [DIR]` – show CSV files that can be analyzed.

use anyhow::Result;
use std::path::Path;
use urlscope_core::export;

pub fn run_list(dir: &Path) -> Result<()> {
    let files = if dir.is_dir() {
        export::list_csv_files(dir)?
    } else {
        Vec::new()
    };
    if files.is_empty() {
        println!("No CSV files in {}.", dir.display());
    } else {
        for name in files {
            println!("{name}");
        }
    }
    Ok(())
}
