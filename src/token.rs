use std::fs;
use std::io;
use std::path::Path;

/// Where the PocketBase admin token is expected on disk.
/// Whatever obtained it (e.g. an admin auth call) is responsible for writing it here.
const TOKEN_PATH: &str = "/tmp/pb_token.txt";

/// Reads the admin token from its fixed path, trimming surrounding whitespace.
/// There is no fallback credential; a missing or unreadable file is fatal to the caller.
pub fn load_token() -> Result<String, io::Error> {
    load_token_from(Path::new(TOKEN_PATH))
}

fn load_token_from(path: &Path) -> Result<String, io::Error> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.trim().to_string())
}
