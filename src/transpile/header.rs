//! Build-constraint header detection.

/// Prefixes of build-constraint lines.
const BUILD_TAG_PREFIXES: [&[u8]; 2] = [b"//go:build", b"// +build"];

/// Whether `line` is a build-constraint comment.
fn is_build_tag(line: &[u8]) -> bool {
    let trimmed = line.trim_ascii();
    BUILD_TAG_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Length in bytes of the leading `//go:build` / `// +build` block.
///
/// Blank lines between tag lines belong to the block; the block ends after the last tag
/// line that precedes the first other line. A blank first line means there is no header.
#[must_use]
pub fn build_tag_prefix_len(src: &[u8]) -> usize {
    let mut pos = 0;
    let mut header_len = 0;
    for (line_no, line) in src.split_inclusive(|&b| b == b'\n').enumerate() {
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            if line_no == 0 {
                return 0;
            }
        } else if is_build_tag(trimmed) {
            header_len = pos + line.len();
        } else {
            break;
        }
        pos += line.len();
    }
    header_len
}

/// Splits `src` into its build-constraint header and the body that follows.
#[must_use]
pub fn split_header(src: &[u8]) -> (&[u8], &[u8]) {
    src.split_at(build_tag_prefix_len(src))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// Header length across tag layouts.
    #[rstest]
    #[case::no_header("package main\n", 0)]
    #[case::go_build("//go:build linux\n\npackage main\n", 17)]
    #[case::plus_build("// +build linux\npackage main\n", 16)]
    #[case::both_forms("//go:build linux\n// +build linux\npackage main\n", 33)]
    #[case::blank_line_inside_block("//go:build linux\n\n// +build linux\n\npackage main\n", 34)]
    #[case::crlf("//go:build linux\r\npackage main\r\n", 18)]
    #[case::blank_first_line("\n//go:build linux\npackage main\n", 0)]
    #[case::tag_after_code("package main\n//go:build linux\n", 0)]
    #[case::only_tags("//go:build linux", 16)]
    #[case::ordinary_comment("// Package main.\n//go:build linux\n", 0)]
    #[case::empty("", 0)]
    fn test_build_tag_prefix_len(#[case] src: &str, #[case] expected: usize) {
        assert_that!(build_tag_prefix_len(src.as_bytes()), eq(expected));
    }

    /// Header and body split at the header length.
    #[rstest]
    fn test_split_header() {
        let (header, body) = split_header(b"//go:build ignore\npaquete main\n");

        assert_that!(header, eq(b"//go:build ignore\n".as_slice()));
        assert_that!(body, eq(b"paquete main\n".as_slice()));
    }
}
