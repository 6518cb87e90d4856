use roff::{bold, roman, Roff};
use std::fs;
use std::path::Path;

struct Example<'a> {
    title: &'a str,
    description: &'a str,
    code: &'a str,
}

struct ManPage<'a> {
    name: &'a str,
    about: &'a str,
    description: &'a str,
    synopsis: &'a str,
    examples: &'a [Example<'a>],
    exit_status: &'a str,
    files: &'a str,
    see_also: &'a str,
}

fn render_man_page(page: &ManPage, out_dir: &Path) {
    let version = env!("CARGO_PKG_VERSION");
    let upper_name = page.name.to_uppercase();
    let date_version = format!("{} {}", page.name, version);
    let mut roff = Roff::default();
    roff.control("TH", [upper_name.as_str(), "1", date_version.as_str()]);
    roff.control("SH", ["NAME"]);
    roff.text([roman(format!("{} - {}", page.name, page.about))]);
    roff.control("SH", ["SYNOPSIS"]);
    roff.text([bold(page.name), roman(format!(" {}", page.synopsis))]);
    roff.control("SH", ["DESCRIPTION"]);
    roff.text([roman(page.description)]);
    if !page.examples.is_empty() {
        roff.control("SH", ["EXAMPLES"]);
        for example in page.examples {
            roff.text([bold(example.title)]);
            roff.text([roman(example.description)]);
            roff.control("sp", [] as [&str; 0]);
            roff.control("nf", [] as [&str; 0]);
            roff.control("RS", ["4"]);
            for line in example.code.lines() {
                roff.text([roman(line)]);
            }
            roff.control("RE", [] as [&str; 0]);
            roff.control("fi", [] as [&str; 0]);
        }
    }
    if !page.exit_status.is_empty() {
        roff.control("SH", ["EXIT STATUS"]);
        roff.text([roman(page.exit_status)]);
    }
    if !page.files.is_empty() {
        roff.control("SH", ["FILES"]);
        for line in page.files.lines() {
            if let Some((path, desc)) = line.split_once('\t') {
                roff.control("TP", []);
                roff.text([roman(path)]);
                roff.text([roman(desc)]);
            } else {
                roff.text([roman(line)]);
            }
        }
    }
    if !page.see_also.is_empty() {
        roff.control("SH", ["SEE ALSO"]);
        roff.text([roman(page.see_also)]);
    }
    fs::write(out_dir.join(format!("{}.1", page.name)), roff.to_roff()).unwrap();
}

fn main() {
    let out_dir = Path::new("target/man");
    fs::create_dir_all(out_dir).unwrap();

    render_man_page(
        &ManPage {
            name: "make_pidfile_tree",
            about: "write a pidfile tree and wait to die",
            description: "Create the directory PIDFILE_PATH with mode 0755 and write two \
                          fixture files into it: foo, containing the bytes foo, and bar, \
                          containing the bytes bar. Once the tree is on disk, print a single \
                          readiness line to standard output and sleep until killed. The tool \
                          never removes what it wrote and never exits on its own; it stands in \
                          for a supervised process whose leftover pidfiles a test harness wants \
                          to find, inspect, or clean up. PIDFILE_PATH must not already exist \
                          and its parent directory must.",
            synopsis: "PIDFILE_PATH",
            examples: &[Example {
                title: "Example 1 Using make_pidfile_tree from a cleanup test",
                description: "The following example spawns the tool, observes the tree it \
                              leaves behind, and kills it:",
                code: "\
$ make_pidfile_tree /tmp/supervise.d &
pidfile written, waiting to die...
$ ls /tmp/supervise.d
bar  foo
$ kill %1",
            }],
            exit_status: "Never exits on success; the process idles until it is killed. \
                          1 if the pidfile tree cannot be created (path exists, permission \
                          denied, missing parent). 2 on usage errors.",
            files: "PIDFILE_PATH/foo\tFixture file containing the bytes foo.\n\
                    PIDFILE_PATH/bar\tFixture file containing the bytes bar.",
            see_also: "mkdir(2), kill(1)",
        },
        out_dir,
    );

    println!("cargo:rerun-if-changed=build.rs");
}
