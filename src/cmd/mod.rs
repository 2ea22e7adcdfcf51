pub mod ask;
pub mod chat;
pub mod report;
pub mod schema;
pub mod suggest;
pub mod tax;
pub mod topics;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Open a file for reading, or stdin when the path is "-"
pub fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        read_stdin()
    } else {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

fn read_stdin() -> anyhow::Result<Box<dyn Read>> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    Ok(Box::new(io::Cursor::new(buffer)))
}
