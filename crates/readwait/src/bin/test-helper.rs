//! Small consumer used by the end-to-end tests.
//!
//! Opens a file and reads until it has seen an exact number of bytes, then
//! closes it and exits 0. Exits 1 on EOF or any I/O error before the target
//! is reached, so a test can tell "read everything it wanted" apart from
//! "came up short".

use std::env;
use std::fs::File;
use std::io::Read;
use std::process;

fn main()
{
    let mut args = env::args().skip(1);
    let (path, target) = match (args.next(), args.next().and_then(|t| t.parse::<u64>().ok())) {
        (Some(path), Some(target)) => (path, target),
        _ => {
            eprintln!("usage: test-helper <path> <bytes>");
            process::exit(2);
        }
    };

    let mut file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("test-helper: open {}: {}", path, err);
            process::exit(1);
        }
    };

    let mut remaining = target;
    let mut buf = [0u8; 256];
    while remaining > 0 {
        let want = buf.len().min(remaining as usize);
        match file.read(&mut buf[..want]) {
            Ok(0) => {
                eprintln!("test-helper: EOF with {} bytes still expected", remaining);
                process::exit(1);
            }
            Ok(n) => remaining -= n as u64,
            Err(err) => {
                eprintln!("test-helper: read {}: {}", path, err);
                process::exit(1);
            }
        }
    }
}
