pub mod shifts;
pub mod solve;

use cipherforge::CfResult;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Ciphertext from the positional argument, else `--input`, else stdin.
pub fn read_ciphertext(text: Option<&str>, input: Option<&Path>) -> CfResult<String> {
    if let Some(t) = text {
        return Ok(t.to_string());
    }
    if let Some(path) = input {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
