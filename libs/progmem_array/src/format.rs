use alloc::{format, string::String};

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    };
}

/// Literals emitted per body line by the default layout.
pub const BYTES_PER_LINE: usize = 16;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
const SEPARATOR: &str = ", ";

/// Declaration tokens and layout of the generated array.
///
/// The default reproduces the layout firmware build scripts paste verbatim:
///
/// ```text
/// const uint8_t bindata[] PROGMEM = {
///   0x00, 0xff, 0x10
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayFormat<'a> {
    pub element_type: &'a str,
    pub name: &'a str,
    /// Memory placement qualifier. `None` drops it for targets without a
    /// separate program memory.
    pub qualifier: Option<&'a str>,
    /// Zero is treated as one.
    pub bytes_per_line: usize,
    pub indent: &'a str,
}

impl Default for ArrayFormat<'_> {
    fn default() -> Self {
        ArrayFormat {
            element_type: "uint8_t",
            name: "bindata",
            qualifier: Some("PROGMEM"),
            bytes_per_line: BYTES_PER_LINE,
            indent: "  ",
        }
    }
}

impl ArrayFormat<'_> {
    /// The complete document: header comments, declaration and a trailing
    /// empty line.
    pub fn render(&self, source_name: &str, data: &[u8]) -> String {
        let mut out = Self::render_header(source_name, data.len());
        out.push_str(&self.render_array(data));
        out.push('\n');
        out
    }

    /// File name and size comments followed by a blank line. The header is the
    /// same for every layout.
    pub fn render_header(source_name: &str, len: usize) -> String {
        format!("// file name : {source_name}\n// file size : {len} bytes\n\n")
    }

    /// The declaration from the opening token up to and including `};\n`.
    pub fn render_array(&self, data: &[u8]) -> String {
        let per_line = self.bytes_per_line.max(1);
        let lines = data.len().div_ceil(per_line);
        let opening = self.opening();

        let mut out = String::with_capacity(
            opening.len() + data.len() * 6 + lines * (self.indent.len() + 1) + 4,
        );
        out.push_str(&opening);
        for (idx, &byte) in data.iter().enumerate() {
            if idx % per_line == 0 {
                out.push('\n');
                out.push_str(self.indent);
            }
            push_literal(&mut out, byte);
            out.push_str(SEPARATOR);
        }
        // Only ever a separator after a literal; the opening brace is kept.
        if !data.is_empty() {
            out.truncate(out.len() - SEPARATOR.len());
        }
        out.push_str("\n};\n");

        trace!("Rendered {} bytes into {} lines", data.len(), lines);
        out
    }

    fn opening(&self) -> String {
        match self.qualifier {
            Some(qualifier) => format!(
                "const {} {}[] {} = {{",
                self.element_type, self.name, qualifier
            ),
            None => format!("const {} {}[] = {{", self.element_type, self.name),
        }
    }
}

fn push_literal(out: &mut String, byte: u8) {
    out.push_str("0x");
    out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
}
