//! RFC 5952 canonical IPv6 text.
//!
//! - lowercase hex, no leading zeros within a group
//! - the longest run of two or more all-zero groups becomes `::`
//! - ties go to the leftmost run; a lone zero group is written as `0`

use std::fmt::{self, Write};

/// Display adapter rendering a 128-bit value in canonical compressed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalIpv6(pub u128);

impl CanonicalIpv6 {
    fn groups(&self) -> [u16; 8] {
        let mut groups = [0u16; 8];
        for (i, group) in groups.iter_mut().enumerate() {
            *group = (self.0 >> (112 - 16 * i)) as u16;
        }
        groups
    }
}

/// Start and length of the run to collapse, if any run is at least 2 long.
fn longest_zero_run(groups: &[u16; 8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        let len = i - start;
        // strict `>` keeps the leftmost of equal runs
        if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }
    best
}

fn write_groups(out: &mut String, groups: &[u16]) -> fmt::Result {
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push(':');
        }
        write!(out, "{group:x}")?;
    }
    Ok(())
}

impl fmt::Display for CanonicalIpv6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.groups();
        // 8 groups of up to 4 digits plus separators
        let mut text = String::with_capacity(39);
        match longest_zero_run(&groups) {
            Some((start, len)) => {
                write_groups(&mut text, &groups[..start])?;
                text.push_str("::");
                write_groups(&mut text, &groups[start + len..])?;
            }
            None => write_groups(&mut text, &groups)?,
        }
        f.pad(&text)
    }
}
