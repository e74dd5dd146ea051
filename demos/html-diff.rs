use std::{env, fs, process};

use htmldiff_text::html_diff;

/// Diffs two HTML files and prints the fragment marking deletions with
/// `<del>` and insertions with `<ins>`.
///
/// Run it with:
/// `cargo run --example html-diff old.html new.html [output.html]`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: html-diff <old> <new> [output]");
        process::exit(1);
    }

    let old_file = &args[1];
    let new_file = &args[2];
    let output_file = args.get(3);

    let old_content = fs::read_to_string(old_file).unwrap_or_else(|e| {
        eprintln!("Error reading {old_file}: {e}");
        process::exit(1);
    });

    let new_content = fs::read_to_string(new_file).unwrap_or_else(|e| {
        eprintln!("Error reading {new_file}: {e}");
        process::exit(1);
    });

    let diff = html_diff(&old_content, &new_content);

    if let Some(output_path) = output_file {
        if let Err(e) = fs::write(output_path, diff) {
            eprintln!("Error writing to {output_path}: {e}");
            process::exit(1);
        }
    } else {
        print!("{diff}");
    }
}
