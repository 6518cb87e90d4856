//
//   Copyright 2026 Basil Crow
//
//   Licensed under the Apache License, Version 2.0 (the "License");
//   you may not use this file except in compliance with the License.
//   You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
//   Unless required by applicable law or agreed to in writing, software
//   distributed under the License is distributed on an "AS IS" BASIS,
//   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//   See the License for the specific language governing permissions and
//   limitations under the License.
//

use std::fs::{self, DirBuilder};
use std::io;
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;
use std::thread;
use std::time::Duration;

use nix::sys::signal::{self, SigHandler, Signal};

pub mod cli;

// A pidfile tree is the directory-plus-fixture-files footprint a supervised
// process leaves behind. A harness that wants to exercise its cleanup logic
// points this tool at a scratch path, waits for the status line, kills the
// process, and then checks what happened to the leftovers. The tree is never
// touched again once written; removing it is the harness's job.

/// Mode requested for the tree directory. Filtered by the process umask like
/// any mkdir(2).
const TREE_MODE: u32 = 0o755;

/// Create the pidfile tree at `path`: the directory itself plus the fixture
/// files `foo` and `bar`, holding those literal bytes. `path` must not
/// already exist. Each file is closed before the next step, so once the
/// status line is out both files are fully on disk.
pub fn write_pidfile_tree(path: &Path) -> io::Result<()> {
    DirBuilder::new().mode(TREE_MODE).create(path)?;
    fs::write(path.join("foo"), b"foo")?;
    fs::write(path.join("bar"), b"bar")?;
    Ok(())
}

/// Block until an external signal terminates the process. There is no exit
/// path from here; the loop wakes once a second only to avoid spinning.
pub fn wait_to_die() -> ! {
    loop {
        thread::sleep(Duration::from_secs(1));
    }
}

/// Rust ignores SIGPIPE by default. Restore the default disposition so that
/// this tool dies like any other command line tool when its output pipe is
/// closed.
pub fn reset_sigpipe() {
    unsafe {
        let _ = signal::signal(Signal::SIGPIPE, SigHandler::SigDfl);
    }
}
