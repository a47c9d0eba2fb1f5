use crate::echo::Echo;
use crate::types::Arg;
use std::ffi::OsString;

// There are no flags to parse: everything after the program name (including
// things that look like flags, and `--`) is an argument to be echoed.
pub(crate) fn init<I>(args: I) -> Echo
where
    I: IntoIterator<Item = OsString>,
{
    let args = args
        .into_iter()
        .skip(1)
        .enumerate()
        .map(|(i, value)| Arg::from((i + 1, value)))
        .collect();

    Echo::new(args)
}
