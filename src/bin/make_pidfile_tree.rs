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

use std::process;

use clap::Parser;
use pidfile_tree::cli::MakePidfileTreeCli;

fn main() {
    pidfile_tree::reset_sigpipe();
    let cli = MakePidfileTreeCli::parse();

    if let Err(e) = pidfile_tree::write_pidfile_tree(&cli.pidfile_path) {
        eprintln!(
            "make_pidfile_tree: cannot create pidfile tree at '{}': {}",
            cli.pidfile_path.display(),
            e
        );
        process::exit(1);
    }

    println!("pidfile written, waiting to die...");
    pidfile_tree::wait_to_die();
}
