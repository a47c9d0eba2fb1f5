use crate::error::Error;
use crate::types::{Arg, Stream};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub(crate) const DEFAULT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub(crate) struct Echo {
    args: Vec<Arg>,
    delay: Duration,
}

fn emit<W: Write>(w: &mut W, arg: &Arg, stream: Stream) -> Result<(), Error> {
    match w.write_all(&arg.line(stream)).and_then(|_| w.flush()) {
        Ok(()) => Ok(()),
        Err(e) => Error::from_write(stream, e).map_or(Ok(()), Err),
    }
}

impl Echo {
    pub(crate) fn new(args: Vec<Arg>) -> Self {
        Echo {
            args,
            delay: DEFAULT_DELAY,
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Echo every argument to `out` and then `err`, pausing after each pair.
    ///
    /// Both lines are flushed before the pause, so a parent reading from a
    /// shared pipe always sees stdout before stderr for the same argument.
    /// A failed write on one stream doesn't stop the other; only a broken
    /// pipe ends the loop early.
    pub(crate) fn run_with<O, E>(&self, out: &mut O, err: &mut E) -> Result<(), Error>
    where
        O: Write,
        E: Write,
    {
        for arg in self.args() {
            emit(out, arg, Stream::Stdout)?;
            emit(err, arg, Stream::Stderr)?;
            thread::sleep(self.delay);
        }

        Ok(())
    }

    pub(crate) fn run(self) {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();

        // stderr is part of the output, so a hangup has nowhere to be reported
        let _ = self.run_with(&mut out, &mut err);
    }
}
