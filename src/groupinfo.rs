use crate::context::Context;
use crate::error::Error;
use crate::manifest::GROUP_INFO_FILE;
use crate::result::Result;
use crate::utils;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::sync::LazyLock;

/// `Full Name (userid)`: the first parenthesized word is the user id
static USER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("user id pattern is valid"));

/// Submitter identity read from `groupinfo.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    /// File contents as read, echoed back for the user to verify
    pub raw: String,
    /// `userid1` or `userid1-userid2`
    pub identity: String,
}

impl GroupInfo {
    /// Read `groupinfo.txt` from the submission directory
    pub fn load(ctx: &Context) -> Result<Self> {
        let path = ctx.path(GROUP_INFO_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::GroupInfoNotFound(GROUP_INFO_FILE.into()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self::parse(&raw, &utils::current_user()))
    }

    /// Derive the identity from the file text
    ///
    /// Line 2 names member 1, line 3 (optional) member 2. A missing or
    /// malformed member 1 falls back to `fallback_user`; a malformed member 2
    /// is dropped.
    pub fn parse(raw: &str, fallback_user: &str) -> Self {
        let lines = split_lines(raw);

        let identity = if lines.len() < 2 {
            fallback_user.to_string()
        } else {
            let first = user_id(lines[1]).unwrap_or(fallback_user);
            let second = lines
                .get(2)
                .and_then(|line| user_id(line))
                .map(|id| format!("-{}", id))
                .unwrap_or_default();
            format!("{}{}", first, second)
        };

        Self {
            raw: raw.to_string(),
            identity,
        }
    }
}

/// Split on `\n`, `\r\n` and lone `\r`; a trailing terminator adds no empty line
fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = raw;
    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

fn user_id(line: &str) -> Option<&str> {
    USER_ID
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
