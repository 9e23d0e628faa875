use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use bmpvox_mesh::Element;
use bmpvox_pool::PooledVertex;

use crate::error::IoError;

/// Field separator; every record also starts with a tab.
pub const SEP: &str = ",\t";

/// `{base}{group}.txt`, e.g. `nodes.txt0.txt`.
pub fn group_path(base: &str, group: usize) -> PathBuf {
    PathBuf::from(format!("{base}{group}.txt"))
}

/// Opens `path` for writing, truncating anything already there.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, IoError> {
    if path.exists() {
        log::warn!(target: "output", "overwriting existing file {:?}", path);
    }
    let file = File::create(path).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Node coordinate printed with 6 significant digits, `%g` style: trailing
/// zeros dropped, scientific notation when the exponent is below -4 or at
/// least 6.
#[derive(Clone, Copy, Debug)]
pub struct Coord(pub f32);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }
        // Round to 6 significant digits first; the exponent is taken after rounding.
        let sci = format!("{v:.5e}");
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);
        if (-4..6).contains(&exp) {
            let fixed = format!("{:.*}", (5 - exp) as usize, v);
            f.write_str(trim_fraction(&fixed))
        } else {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

pub fn write_element<W: Write>(w: &mut W, e: &Element) -> io::Result<()> {
    write!(w, "\t{}", e.index)?;
    for n in e.nodes {
        write!(w, "{SEP}{n}")?;
    }
    writeln!(w)
}

pub fn write_elements<W: Write>(w: &mut W, elements: &[Element]) -> io::Result<()> {
    for e in elements {
        write_element(w, e)?;
    }
    Ok(())
}

/// One line per storage slot, numbered from 1 in handle order. Returns the
/// number of lines written.
pub fn write_nodes<W: Write, V: PooledVertex>(w: &mut W, verts: &[V]) -> io::Result<usize> {
    for (i, v) in verts.iter().enumerate() {
        let p = v.position();
        writeln!(
            w,
            "\t{}{SEP}{}{SEP}{}{SEP}{}",
            i + 1,
            Coord(p.x),
            Coord(p.y),
            Coord(p.z)
        )?;
    }
    Ok(verts.len())
}
