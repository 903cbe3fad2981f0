//! Demo operations and their text form

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use lrucache::LruCache;
use tracing::info;

/// One step of a demo run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `get:KEY`
    Get(i64),
    /// `put:KEY:VALUE`
    Put(i64, i64),
    /// `print`
    Print,
}

/// Sequence replayed when no `--op` is given
pub const DEFAULT_SCRIPT: [Op; 7] = [
    Op::Get(1),
    Op::Put(1, 1),
    Op::Put(2, 2),
    Op::Get(2),
    Op::Put(3, 3),
    Op::Get(1),
    Op::Print,
];

impl FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let number = |raw: &str| {
            raw.trim()
                .parse::<i64>()
                .map_err(|e| format!("invalid number '{}' in '{}': {}", raw, s, e))
        };

        match parts.as_slice() {
            [cmd, key] if cmd.eq_ignore_ascii_case("get") => Ok(Op::Get(number(*key)?)),
            [cmd, key, value] if cmd.eq_ignore_ascii_case("put") => {
                Ok(Op::Put(number(*key)?, number(*value)?))
            }
            [cmd] if cmd.eq_ignore_ascii_case("print") => Ok(Op::Print),
            _ => Err(format!(
                "unrecognised op '{}' (expected get:KEY, put:KEY:VALUE or print)",
                s
            )),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Get(key) => write!(f, "GET KEY: {}", key),
            Op::Put(key, value) => write!(f, "INSERT: [{}, {}]", key, value),
            Op::Print => write!(f, "PRINT:"),
        }
    }
}

/// Apply each op to the cache, writing the op and its result to `out`
pub fn run<W: Write>(cache: &mut LruCache<i64, i64>, ops: &[Op], out: &mut W) -> io::Result<()> {
    for (i, op) in ops.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", op)?;

        match *op {
            Op::Get(key) => match cache.get(&key) {
                Some(value) => writeln!(out, "{}", value)?,
                None => writeln!(out, "miss")?,
            },
            Op::Put(key, value) => {
                if let Some((old_key, old_value)) = cache.push(key, value) {
                    info!(key = old_key, value = old_value, "evicted");
                }
            }
            Op::Print => writeln!(out, "{:?}", cache.snapshot())?,
        }
    }
    Ok(())
}
