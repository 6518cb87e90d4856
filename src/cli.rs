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

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "make_pidfile_tree",
    version,
    about = "Write a pidfile tree and wait to die",
    long_about = "Create a directory holding the fixture files a supervised process would \
leave behind, report readiness on standard output, then idle until killed. Intended to be \
spawned by a test harness that needs a long-lived process with a known filesystem footprint."
)]
pub struct MakePidfileTreeCli {
    /// Directory to create
    ///
    /// The directory must not already exist. It is created with mode 0755
    /// and populated with the fixture files `foo` and `bar`.
    #[arg(value_name = "PIDFILE_PATH")]
    pub pidfile_path: PathBuf,
}
