use nix::errno::Errno;
use nix::fcntl::OFlag;
use nix::unistd::pipe2;
pub use nix::{
    sys::signal::{
        kill,
        Signal::{self, SIGKILL, SIGTERM},
    },
    unistd::Pid,
};
pub use std::io::prelude::*;
pub use std::{
    ffi::OsString,
    fs::File,
    os::unix::process::ExitStatusExt,
    process::{Child, Command, Output, Stdio},
    time::{Duration, Instant},
};
use std::{io::BufReader, os::fd::OwnedFd, thread::sleep};

pub trait ToPid {
    fn pid(&self) -> Pid;
}

impl ToPid for &Child {
    fn pid(&self) -> Pid {
        Pid::from_raw(self.id() as i32)
    }
}

/// Kills the process (if it is still around) when dropped, so that a failed
/// assertion doesn't leave a sleeping child behind.
#[derive(Debug)]
pub struct Proc(Pid);

impl Proc {
    pub fn exists(&self) -> bool {
        let res = unsafe { libc::kill(self.0.as_raw(), 0) };
        if res == 0 {
            return true;
        }
        assert_eq!(-1, res, "unexpected return value from kill()");
        match Errno::last() {
            Errno::ESRCH => false,
            e => {
                panic!("kill({}, 0) => unexpected errno ({})", self.0.as_raw(), e);
            }
        }
    }

    pub fn signal(&self, sig: Signal) {
        kill(self.0, sig).expect("kill()");
    }
}

impl Drop for Proc {
    fn drop(&mut self) {
        if self.exists() {
            eprintln!("SIGKILL -> {}", self.0);
            let _ = kill(self.0, SIGKILL);
        }
    }
}

impl<T: ToPid> From<T> for Proc {
    fn from(value: T) -> Self {
        Self(value.pid())
    }
}

pub fn cleanup_proc<P: Into<Proc>>(p: P) -> Proc {
    p.into()
}

pub fn sleep_ms(ms: u64) {
    sleep(Duration::from_millis(ms));
}

/// Split a shell-quoted string into an argument list.
///
/// `args("a 'b c' ''")` => `["a", "b c", ""]`
pub fn args(s: &str) -> Vec<String> {
    shlex::split(s).expect("invalid shell args")
}

pub fn lines(bytes: Vec<u8>) -> Vec<String> {
    let data = String::try_from(bytes).expect("invalid utf8 bytes");
    data.split('\n')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_owned())
        .collect()
}

/// A single pipe, both ends ready to hand to a child process.
///
/// Passing `Stdio::from(pipe.writer())` as both stdout and stderr makes the
/// child's two streams land in one ordered byte stream.
pub struct Pipe {
    read: OwnedFd,
    write: OwnedFd,
}

impl Pipe {
    pub fn new() -> Self {
        let (read, write) = pipe2(OFlag::O_CLOEXEC).expect("pipe2()");
        Self { read, write }
    }

    pub fn writer(&self) -> Stdio {
        Stdio::from(self.write.try_clone().expect("dup pipe writer"))
    }

    /// Drop our copy of the write end and read until every writer is gone.
    pub fn read_lines(self) -> Vec<String> {
        let Self { read, write } = self;
        drop(write);

        let mut buf = Vec::new();
        std::fs::File::from(read)
            .read_to_end(&mut buf)
            .expect("read pipe");
        lines(buf)
    }
}

impl Default for Pipe {
    fn default() -> Self {
        Self::new()
    }
}

/// Read lines from a live stream, noting when each one arrived.
pub fn timed_lines<R: Read>(r: R) -> Vec<(Instant, String)> {
    BufReader::new(r)
        .lines()
        .map(|line| (Instant::now(), line.expect("read line")))
        .collect()
}

#[macro_export]
macro_rules! assert_empty {
    ($e:expr) => {{
        let v = $e;
        assert!(v.is_empty(), "expected empty, got {:?}", v);
    }};
}
