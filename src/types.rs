use std::ffi::OsString;
use std::os::unix::ffi::OsStrExt;

/// One of the two standard output streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum Stream {
    Stdout,
    Stderr,
}

/// A single invocation argument and its 1-based position.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct Arg {
    pub(crate) index: usize,
    pub(crate) value: OsString,
}

impl Arg {
    /// `<STREAM>: Arg is <index> is <<value>>\n`
    ///
    /// The value is copied as raw bytes so that non-UTF-8 input comes out
    /// exactly as it went in.
    pub(crate) fn line(&self, stream: Stream) -> Vec<u8> {
        let value = self.value.as_bytes();

        let mut buf = Vec::with_capacity(value.len() + 32);
        buf.extend_from_slice(format!("{stream}: Arg is {} is <", self.index).as_bytes());
        buf.extend_from_slice(value);
        buf.extend_from_slice(b">\n");
        buf
    }
}

impl From<(usize, OsString)> for Arg {
    fn from(idx_val: (usize, OsString)) -> Self {
        Arg {
            index: idx_val.0,
            value: idx_val.1,
        }
    }
}

#[test]
fn stream_labels() {
    assert_eq!("STDOUT", Stream::Stdout.to_string());
    assert_eq!("STDERR", Stream::Stderr.to_string());
}

#[test]
fn arg_line() {
    fn must_format(index: usize, value: &str, stream: Stream, expect: &str) {
        let arg = Arg::from((index, OsString::from(value)));
        assert_eq!(expect.as_bytes(), arg.line(stream).as_slice());
    }

    must_format(1, "a", Stream::Stdout, "STDOUT: Arg is 1 is <a>\n");
    must_format(2, "b", Stream::Stderr, "STDERR: Arg is 2 is <b>\n");
    must_format(3, "", Stream::Stdout, "STDOUT: Arg is 3 is <>\n");
    must_format(
        10,
        "with spaces",
        Stream::Stderr,
        "STDERR: Arg is 10 is <with spaces>\n",
    );
    must_format(4, "--", Stream::Stdout, "STDOUT: Arg is 4 is <-->\n");
    must_format(5, "<>", Stream::Stdout, "STDOUT: Arg is 5 is <<>>\n");
}

#[test]
fn arg_line_non_utf8() {
    use std::os::unix::ffi::OsStringExt;

    let arg = Arg::from((1, OsString::from_vec(vec![b'x', 0xff, b'y'])));
    assert_eq!(
        b"STDOUT: Arg is 1 is <x\xffy>\n".as_slice(),
        arg.line(Stream::Stdout).as_slice()
    );
}
