//! Static help and version text.

const HELP_TEXT: &str = "\
srcscan - list Go source directories breadth-first

Usage: srcscan [OPTIONS] [PACKAGE]...

Walks the src directory of GOROOT and of every GOPATH entry, level by level,
and prints each directory that directly contains a .go file. With PACKAGE
arguments, prints only the directories whose trailing path components match
each package path.

Options:
      --goroot DIR           Primary root (default: $GOROOT)
      --gopath LIST          Additional roots as a path list
                             (default: $GOPATH, then $HOME/go)
      --no-follow-symlinks   Treat symbolic links as neither files nor directories
  -v, --verbose              Increase logging verbosity (repeatable)
  -q, --quiet                Only log errors
  -h, --help                 Show this help message and exit
  -V, --version              Output version information and exit

Environment:
  SRCSCAN_LOG                Tracing filter directives, e.g. srcscan::walk=debug
";

pub(crate) fn render_help() -> String {
    HELP_TEXT.to_owned()
}

pub(crate) fn render_version() -> String {
    format!("{} {}\n", crate::PROGRAM_NAME, env!("CARGO_PKG_VERSION"))
}
