pub mod csv_rows;
pub mod file;
pub mod stdin;

use serde_json::Value;

/// Load untyped statement rows from `--input <file.csv>` or piped stdin.
pub fn load_rows(path: Option<&str>) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let text = if let Some(path) = path {
        file::read_text(path)?
    } else if let Some(piped) = stdin::read_stdin()? {
        piped
    } else {
        return Err("--input <file.csv> or piped CSV required".into());
    };
    csv_rows::parse_rows(&text)
}
