use crate::types::Stream;
use std::io;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    /// Whoever was reading the stream hung up.
    #[error("{stream} closed: {source}")]
    Closed {
        stream: Stream,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// A broken pipe ends the run. Any other write failure is dropped and
    /// echoing carries on.
    pub(crate) fn from_write(stream: Stream, source: io::Error) -> Option<Self> {
        (source.kind() == io::ErrorKind::BrokenPipe).then_some(Self::Closed { stream, source })
    }
}

#[test]
fn only_broken_pipe_is_fatal() {
    let e = Error::from_write(Stream::Stdout, io::Error::from(io::ErrorKind::BrokenPipe))
        .expect("broken pipe should end the run");
    assert!(matches!(e, Error::Closed { stream: Stream::Stdout, .. }));
    assert!(e.to_string().starts_with("STDOUT closed: "));

    for kind in [
        io::ErrorKind::PermissionDenied,
        io::ErrorKind::WriteZero,
        io::ErrorKind::Other,
    ] {
        assert!(
            Error::from_write(Stream::Stderr, io::Error::from(kind)).is_none(),
            "{kind:?} should not end the run"
        );
    }
}
